use crate::{Expr, ValueKind};

/// Declarative description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Column name.
    pub name: &'static str,
    /// Declaration order, starting from 0.
    pub position: usize,
    /// Storage kind.
    pub kind: ValueKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, position: usize, kind: ValueKind) -> Self {
        Self {
            name,
            position,
            kind,
        }
    }
    /// Expression referencing this field, bound to `table`.
    pub fn expr(&self, table: &'static str) -> Expr {
        Expr::field_ref(table, self.name)
    }
}
