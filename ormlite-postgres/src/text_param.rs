use bytes::{BufMut, BytesMut};
use ormlite_core::Param;
use postgres_types::{Format, IsNull, ToSql, Type, to_sql_checked};
use std::error::Error;

/// Statement parameter sent in text format, the server parses it into the column type.
#[derive(Debug)]
pub(crate) struct TextParam<'a>(pub(crate) &'a Param);

impl ToSql for TextParam<'_> {
    fn to_sql(&self, _ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        out.put_slice(self.0.as_str().as_bytes());
        Ok(IsNull::No)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}
