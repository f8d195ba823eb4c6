use crate::{Aggregate, Expr, Operand, Selectable};
use std::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{BitXor, Rem},
};

/// Typed handle to one column of a record, emitted by `#[derive(Entity)]` as an associated
/// constant named like the field (`Person::age`).
///
/// `R` is the Rust type of the field, it becomes the declared return type of the selectables built
/// from the column.
pub struct Column<R> {
    table: &'static str,
    name: &'static str,
    _type: PhantomData<fn() -> R>,
}

impl<R> Column<R> {
    pub const fn new(table: &'static str, name: &'static str) -> Self {
        Self {
            table,
            name,
            _type: PhantomData,
        }
    }
    pub const fn name(&self) -> &'static str {
        self.name
    }
    pub const fn table(&self) -> &'static str {
        self.table
    }
    pub fn expr(&self) -> Expr {
        Expr::field_ref(self.table, self.name)
    }

    pub fn eq(&self, rhs: impl Operand) -> Expr {
        self.expr().eq(rhs)
    }
    pub fn ne(&self, rhs: impl Operand) -> Expr {
        self.expr().ne(rhs)
    }
    pub fn lt(&self, rhs: impl Operand) -> Expr {
        self.expr().lt(rhs)
    }
    pub fn gt(&self, rhs: impl Operand) -> Expr {
        self.expr().gt(rhs)
    }
    pub fn le(&self, rhs: impl Operand) -> Expr {
        self.expr().le(rhs)
    }
    pub fn ge(&self, rhs: impl Operand) -> Expr {
        self.expr().ge(rhs)
    }
    pub fn like(&self, pattern: &str) -> Expr {
        self.expr().like(pattern)
    }
    pub fn not_like(&self, pattern: &str) -> Expr {
        self.expr().not_like(pattern)
    }
    pub fn set(&self, rhs: impl Operand) -> Expr {
        self.expr().set(rhs)
    }

    pub fn bare(&self) -> Selectable<R> {
        Selectable::new(self.table, self.name, Aggregate::Bare)
    }
    pub fn count(&self) -> Selectable<i64> {
        Selectable::new(self.table, self.name, Aggregate::Count)
    }
    pub fn sum(&self) -> Selectable<R> {
        Selectable::new(self.table, self.name, Aggregate::Sum)
    }
    pub fn avg(&self) -> Selectable<R> {
        Selectable::new(self.table, self.name, Aggregate::Avg)
    }
    pub fn max(&self) -> Selectable<R> {
        Selectable::new(self.table, self.name, Aggregate::Max)
    }
    pub fn min(&self) -> Selectable<R> {
        Selectable::new(self.table, self.name, Aggregate::Min)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Debug for Column<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Column({}.{})", self.table, self.name)
    }
}

impl<R> Operand for Column<R> {
    fn write_operand(&self, out: &mut String) {
        out.push_str(self.name);
    }
    fn table(&self) -> Option<&'static str> {
        Some(self.table)
    }
}

impl<R> Rem<&str> for Column<R> {
    type Output = Expr;
    fn rem(self, pattern: &str) -> Expr {
        self.like(pattern)
    }
}

impl<R> BitXor<&str> for Column<R> {
    type Output = Expr;
    fn bitxor(self, pattern: &str) -> Expr {
        self.not_like(pattern)
    }
}

impl<R> From<Column<R>> for Expr {
    fn from(value: Column<R>) -> Self {
        value.expr()
    }
}
