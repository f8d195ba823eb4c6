use crate::SqlWriter;

pub trait Driver {
    type SqlWriter: SqlWriter;

    /// Scheme of the connection URLs accepted by the driver.
    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;
}
