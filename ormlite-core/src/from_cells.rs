use crate::{FieldType, FieldValue, Row};

/// Result shapes decodable from a row, reading cells left to right from a running column counter.
///
/// Implemented for every `FieldType` (one cell), for every record type by `#[derive(Entity)]` (one
/// cell per field) and for tuples of those, so a tuple element can itself be a whole record.
pub trait FromCells: Sized {
    fn from_cells(row: Row<'_>, column: &mut usize) -> Self;

    /// Decode a whole row starting from the first column.
    fn from_row_start(row: Row<'_>) -> Self {
        let mut column = 0;
        Self::from_cells(row, &mut column)
    }
}

impl<T: FieldType> FromCells for T {
    fn from_cells(row: Row<'_>, column: &mut usize) -> Self {
        let result = crate::decode::<T>(row.cell(*column));
        *column += 1;
        result
    }
}

/// Walker over tuples of field values, the tuple counterpart of `Entity::visit_fields`.
pub trait TupleFields {
    const LEN: usize;
    fn for_each_value(&self, f: &mut dyn FnMut(&dyn FieldValue, usize));
    fn for_each_value_mut(&mut self, f: &mut dyn FnMut(&mut dyn FieldValue, usize));
}

macro_rules! impl_tuple {
    ($len:literal; $(($i:tt, $T:ident)),+) => {
        impl<$($T: FromCells),+> FromCells for ($($T,)+) {
            fn from_cells(row: Row<'_>, column: &mut usize) -> Self {
                ($($T::from_cells(row, column),)+)
            }
        }
        impl<$($T: FieldType),+> TupleFields for ($($T,)+) {
            const LEN: usize = $len;
            fn for_each_value(&self, f: &mut dyn FnMut(&dyn FieldValue, usize)) {
                $(f(&self.$i, $i);)+
            }
            fn for_each_value_mut(&mut self, f: &mut dyn FnMut(&mut dyn FieldValue, usize)) {
                $(f(&mut self.$i, $i);)+
            }
        }
    };
}
impl_tuple!(1; (0, T0));
impl_tuple!(2; (0, T0), (1, T1));
impl_tuple!(3; (0, T0), (1, T1), (2, T2));
impl_tuple!(4; (0, T0), (1, T1), (2, T2), (3, T3));
impl_tuple!(5; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4));
impl_tuple!(6; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5));
impl_tuple!(7; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6));
impl_tuple!(8; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7));
impl_tuple!(9; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8));
impl_tuple!(10; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9));
impl_tuple!(11; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9), (10, T10));
impl_tuple!(12; (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7), (8, T8), (9, T9), (10, T10), (11, T11));
