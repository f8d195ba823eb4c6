use crate::{FieldDef, FieldValue, Row, TableDef};

/// A record type mapped to a table. Implemented by `#[derive(Entity)]`.
pub trait Entity: Default + Sized + 'static {
    /// Metadata of the type, created on first use.
    fn table_def() -> &'static TableDef;

    /// Visit every field in declaration order.
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor);

    /// Visit every field in declaration order, with write access.
    fn visit_fields_mut(&mut self, visitor: &mut dyn FieldVisitorMut);

    fn table_name() -> &'static str {
        Self::table_def().name
    }

    /// Build a record from a result row, reading one cell per field starting at `*column`.
    fn from_row(row: Row<'_>, column: &mut usize) -> Self {
        let mut result = Self::default();
        result.visit_fields_mut(&mut |value: &mut dyn FieldValue, _: &FieldDef, _: usize| {
            value.decode(row.cell(*column));
            *column += 1;
        });
        result
    }
}

/// Read-only per field visitor, called once per field in ascending position.
pub trait FieldVisitor {
    fn visit(&mut self, value: &dyn FieldValue, def: &FieldDef, position: usize);
}

/// Mutable per field visitor, called once per field in ascending position.
pub trait FieldVisitorMut {
    fn visit(&mut self, value: &mut dyn FieldValue, def: &FieldDef, position: usize);
}

impl<F: FnMut(&dyn FieldValue, &FieldDef, usize)> FieldVisitor for F {
    fn visit(&mut self, value: &dyn FieldValue, def: &FieldDef, position: usize) {
        self(value, def, position)
    }
}

impl<F: FnMut(&mut dyn FieldValue, &FieldDef, usize)> FieldVisitorMut for F {
    fn visit(&mut self, value: &mut dyn FieldValue, def: &FieldDef, position: usize) {
        self(value, def, position)
    }
}

pub fn for_each_field<E: Entity>(entity: &E, mut f: impl FnMut(&dyn FieldValue, &FieldDef, usize)) {
    entity.visit_fields(&mut f);
}

pub fn for_each_field_mut<E: Entity>(
    entity: &mut E,
    mut f: impl FnMut(&mut dyn FieldValue, &FieldDef, usize),
) {
    entity.visit_fields_mut(&mut f);
}
