use crate::{Entity, FromCells, separated_by};
use std::marker::PhantomData;

/// Aggregate function applied to a selected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    /// The field itself.
    Bare,
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Bare => "",
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Avg => "avg",
            Aggregate::Max => "max",
            Aggregate::Min => "min",
        }
    }
}

/// Entry of a select list: `<aggregate>(<field>)`, decoded as `R`.
#[derive(Debug, Clone)]
pub struct Selectable<R> {
    text: String,
    table: &'static str,
    _type: PhantomData<fn() -> R>,
}

impl<R> Selectable<R> {
    pub fn new(table: &'static str, field: &str, aggregate: Aggregate) -> Self {
        let op = aggregate.as_str();
        let mut text = String::with_capacity(op.len() + field.len() + 2);
        text.push_str(op);
        text.push('(');
        text.push_str(field);
        text.push(')');
        Self {
            text,
            table,
            _type: PhantomData,
        }
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn table(&self) -> &'static str {
        self.table
    }
}

/// Argument of `QueryObject::select`: the projection and the shape rows decode into.
pub trait SelectList<E: Entity> {
    type Output: FromCells;
    /// Append the comma separated projection, asserting every entry belongs to `table`.
    fn write_select_list(&self, table: &'static str, out: &mut String);
}

fn check_table(table: &'static str, selected: &'static str) {
    assert!(
        table == selected,
        "Cannot select a field of table `{}` from a query on table `{}`",
        selected,
        table
    );
}

impl<E: Entity + FromCells> SelectList<E> for () {
    type Output = E;
    fn write_select_list(&self, _table: &'static str, out: &mut String) {
        out.push('*');
    }
}

impl<E: Entity, R: FromCells> SelectList<E> for Selectable<R> {
    type Output = R;
    fn write_select_list(&self, table: &'static str, out: &mut String) {
        check_table(table, self.table);
        out.push_str(&self.text);
    }
}

macro_rules! impl_select_list {
    ($(($i:tt, $T:ident)),+) => {
        impl<E: Entity, $($T: FromCells),+> SelectList<E> for ($(Selectable<$T>,)+) {
            type Output = ($($T,)+);
            fn write_select_list(&self, table: &'static str, out: &mut String) {
                let entries: &[(&str, &'static str)] = &[$((self.$i.text.as_str(), self.$i.table)),+];
                separated_by(
                    out,
                    entries.iter(),
                    |out, &(text, selected)| {
                        check_table(table, selected);
                        out.push_str(text);
                    },
                    ", ",
                );
            }
        }
    };
}
impl_select_list!((0, T0));
impl_select_list!((0, T0), (1, T1));
impl_select_list!((0, T0), (1, T1), (2, T2));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9), (10, T10));
impl_select_list!((0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9), (10, T10), (11, T11));
