use ormlite_core::SqlWriter;

/// Postgres dialect, the default rendering of `SqlWriter` already speaks it.
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresSqlWriter {}

impl SqlWriter for PostgresSqlWriter {}
