use crate::{Entity, FieldDef};

/// Immutable metadata of a record type: table name and ordered fields.
///
/// One instance exists per record type, created on first use by the code that
/// `#[derive(Entity)]` generates and shared for the rest of the process.
#[derive(Debug)]
pub struct TableDef {
    /// Table name.
    pub name: &'static str,
    /// Fields in declaration order, `fields[i].position == i`.
    pub fields: Box<[FieldDef]>,
}

impl TableDef {
    pub fn new(name: &'static str, fields: impl Into<Box<[FieldDef]>>) -> Self {
        let fields = fields.into();
        debug_assert!(
            fields.iter().enumerate().all(|(i, f)| f.position == i),
            "Fields of table `{}` must be listed in declaration order",
            name
        );
        Self { name, fields }
    }
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
    /// Position of the field called `name`, `None` if the table has no such field.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.field_index(name).map(|i| &self.fields[i])
    }
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Metadata of the record type `E`.
pub fn describe<E: Entity>() -> &'static TableDef {
    E::table_def()
}

/// Position of field `name` in `E`, `None` when `E` has no such field.
pub fn field_index<E: Entity>(name: &str) -> Option<usize> {
    E::table_def().field_index(name)
}
