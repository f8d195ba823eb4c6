use crate::{
    Constraint, Driver, Entity, Error, Param, QueryObject, Result, RowSet, SqlWriter, encode_row,
    truncate_long,
};

/// Name of the single prepared statement slot used by the insert path.
pub const UNNAMED_STATEMENT: &str = "";

/// Database collaborator: sends text statements and returns text rows.
///
/// Implementations attach context to their errors and log them before returning.
pub trait Executor: Sized {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// Run a statement that returns no rows.
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Prepare `sql`, expecting `param_count` parameters, in the slot `name`, replacing the
    /// statement previously prepared there.
    fn prepare(&mut self, name: &str, sql: &str, param_count: usize) -> Result<()>;

    /// Run the statement prepared in `name` with text parameters.
    fn execute_prepared(&mut self, name: &str, params: &[Param]) -> Result<()>;

    /// Run a query and collect its rows as text cells.
    fn fetch(&mut self, sql: &str) -> Result<RowSet>;

    /// Query object reading records of `E`.
    fn query<E: Entity>(&mut self) -> QueryObject<'_, Self, E> {
        QueryObject::new(self)
    }

    /// Query object rendering `update <table>`, narrowed with `set` and `filter`.
    fn update<E: Entity>(&mut self) -> QueryObject<'_, Self, E> {
        QueryObject::new_update(self)
    }

    /// Query object rendering `delete from <table>`, narrowed with `filter`.
    fn del<E: Entity>(&mut self) -> QueryObject<'_, Self, E> {
        QueryObject::new_delete(self)
    }

    /// Create the table of `E` if it does not exist.
    ///
    /// Panics when `constraints` holds both a primary key and an auto primary key.
    fn create_table<E: Entity>(&mut self, constraints: &[Constraint]) -> Result<()> {
        let mut sql = String::with_capacity(128);
        self.driver()
            .sql_writer()
            .write_create_table::<E>(&mut sql, constraints);
        log::debug!("create: {}", truncate_long!(sql));
        self.execute(&sql)
    }

    fn drop_table<E: Entity>(&mut self, if_exists: bool) -> Result<()> {
        let mut sql = String::with_capacity(64);
        self.driver()
            .sql_writer()
            .write_drop_table::<E>(&mut sql, if_exists);
        log::debug!("exec: {}", truncate_long!(sql));
        self.execute(&sql)
    }

    /// Insert one record, `false` when the record cannot be encoded or the database rejects it.
    fn insert<E: Entity>(&mut self, entity: &E) -> bool {
        if let Err(e) = prepare_insert::<Self, E>(self) {
            log::debug!("{:#}", e);
            return false;
        }
        match insert_prepared(self, entity) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{:#}", e);
                false
            }
        }
    }

    /// Insert all records in one transaction.
    ///
    /// Returns the number of inserted records, or 0 when any record cannot be encoded or is
    /// rejected, in which case the transaction is rolled back.
    fn insert_many<E: Entity>(&mut self, entities: &[E]) -> u64 {
        if entities.is_empty() {
            return 0;
        }
        log::debug!("exec: begin;");
        if self.execute("begin;").is_err() {
            return 0;
        }
        let result = prepare_insert::<Self, E>(self).and_then(|_| {
            entities
                .iter()
                .try_for_each(|entity| insert_prepared(self, entity))
        });
        match result {
            Ok(()) => {
                log::debug!("exec: commit;");
                match self.execute("commit;") {
                    Ok(()) => entities.len() as u64,
                    Err(..) => 0,
                }
            }
            Err(e) => {
                log::warn!("{:#}", e.context("Rolling back the batch insert"));
                log::debug!("exec: rollback;");
                let _ = self.execute("rollback;");
                0
            }
        }
    }
}

fn prepare_insert<X: Executor, E: Entity>(executor: &mut X) -> Result<()> {
    let mut sql = String::with_capacity(128);
    executor.driver().sql_writer().write_insert::<E>(&mut sql);
    log::debug!("insert prepare: {}", truncate_long!(sql));
    executor.prepare(UNNAMED_STATEMENT, &sql, E::table_def().field_count())
}

fn insert_prepared<X: Executor, E: Entity>(executor: &mut X, entity: &E) -> Result<()> {
    let Some(params) = encode_row(entity) else {
        return Err(Error::msg(format!(
            "A record of `{}` cannot be encoded as text parameters",
            E::table_name()
        )));
    };
    log::trace!("params: {}", DisplayParams(&params));
    executor.execute_prepared(UNNAMED_STATEMENT, &params)
}

struct DisplayParams<'a>(&'a [Param]);

impl std::fmt::Display for DisplayParams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            write!(f, "{}={}, ", i, param)?;
        }
        Ok(())
    }
}
