use crate::PostgresSqlWriter;
use ormlite_core::Driver;

#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresDriver {}

impl PostgresDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for PostgresDriver {
    type SqlWriter = PostgresSqlWriter;

    const NAME: &'static str = "postgres";

    fn sql_writer(&self) -> PostgresSqlWriter {
        PostgresSqlWriter {}
    }
}
