use crate::{Entity, Executor, Expr, FromCells, Result, SelectList, truncate_long};
use std::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
};

/// Builder of one select, update or delete statement on the table of `E`.
///
/// Builder calls consume and return the object, each clause holds its fully rendered text and
/// setting it again overwrites it. A terminal call (`to_vector`, `fetch`, `execute`,
/// `try_execute`) renders the statement and runs it on the borrowed executor. `R` is the shape
/// each row decodes into: the record itself or the tuple declared by `select`.
pub struct QueryObject<'e, X: Executor, E: Entity, R = E> {
    executor: &'e mut X,
    table: &'static str,
    update: String,
    delete: String,
    select: String,
    set: String,
    filter: String,
    group_by: String,
    having: String,
    order_by: String,
    limit: String,
    offset: String,
    _shape: PhantomData<fn() -> (E, R)>,
}

impl<'e, X: Executor, E: Entity> QueryObject<'e, X, E> {
    pub fn new(executor: &'e mut X) -> Self {
        Self {
            executor,
            table: E::table_name(),
            update: String::new(),
            delete: String::new(),
            select: String::new(),
            set: String::new(),
            filter: String::new(),
            group_by: String::new(),
            having: String::new(),
            order_by: String::new(),
            limit: String::new(),
            offset: String::new(),
            _shape: PhantomData,
        }
    }

    pub fn new_update(executor: &'e mut X) -> Self {
        let mut result = Self::new(executor);
        result.update = format!("update {}", result.table);
        result
    }

    pub fn new_delete(executor: &'e mut X) -> Self {
        let mut result = Self::new(executor);
        result.delete = format!("delete from {}", result.table);
        result
    }
}

impl<'e, X: Executor, E: Entity, R> QueryObject<'e, X, E, R> {
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Projection of the query, `()` selects every field of the record.
    ///
    /// Panics when a selectable belongs to another table.
    pub fn select<L: SelectList<E>>(self, list: L) -> QueryObject<'e, X, E, L::Output> {
        let mut select = String::with_capacity(64);
        select.push_str("select ");
        list.write_select_list(self.table, &mut select);
        select.push_str(" from ");
        select.push_str(self.table);
        QueryObject {
            executor: self.executor,
            table: self.table,
            update: self.update,
            delete: self.delete,
            select,
            set: self.set,
            filter: self.filter,
            group_by: self.group_by,
            having: self.having,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
            _shape: PhantomData,
        }
    }

    /// The `where` clause.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = self.clause(" where (", expr.into(), ")");
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Self {
        self.group_by = self.clause(" group by (", expr.into(), ")");
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Self {
        self.having = self.clause(" having (", expr.into(), ")");
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>) -> Self {
        self.order_by = self.clause(" order by ", expr.into(), " asc");
        self
    }

    pub fn order_by_desc(mut self, expr: impl Into<Expr>) -> Self {
        self.order_by = self.clause(" order by ", expr.into(), " desc");
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = format!(" limit {}", n);
        self
    }

    pub fn offset(mut self, n: usize) -> Self {
        self.offset = format!(" offset {}", n);
        self
    }

    /// Assignments of an update, chain several with `Expr::chain`.
    pub fn set(mut self, expr: impl Into<Expr>) -> Self {
        self.set = self.clause(" set ", expr.into(), "");
        self
    }

    fn clause(&self, prefix: &str, expr: Expr, suffix: &str) -> String {
        assert!(
            expr.table() == self.table,
            "Cannot use an expression on table `{}` in a query on table `{}`",
            expr.table(),
            self.table
        );
        let text = expr.text();
        let mut result = String::with_capacity(prefix.len() + text.len() + suffix.len());
        result.push_str(prefix);
        result.push_str(text);
        result.push_str(suffix);
        result
    }

    /// Run an update or delete statement, `false` when the database rejects it.
    pub fn execute(self) -> bool {
        self.try_execute().is_ok()
    }

    pub fn try_execute(self) -> Result<()> {
        let sql = self.to_string();
        log::debug!("exec: {}", truncate_long!(sql));
        self.executor.execute(&sql)
    }
}

impl<'e, X: Executor, E: Entity, R: FromCells> QueryObject<'e, X, E, R> {
    /// Rows of the query decoded into `R`, empty when there are no rows or the query fails.
    pub fn to_vector(self) -> Vec<R> {
        self.fetch().unwrap_or_default()
    }

    /// Rows of the query decoded into `R`.
    pub fn fetch(self) -> Result<Vec<R>> {
        let sql = self.to_string();
        log::debug!("query: {}", truncate_long!(sql));
        let rows = self.executor.fetch(&sql)?;
        Ok(rows.iter().map(R::from_row_start).collect())
    }
}

impl<X: Executor, E: Entity, R> Display for QueryObject<'_, X, E, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.update)?;
        f.write_str(&self.delete)?;
        if self.select.is_empty() && self.update.is_empty() && self.delete.is_empty() {
            write!(f, "select * from {}", self.table)?;
        } else {
            f.write_str(&self.select)?;
        }
        f.write_str(&self.set)?;
        f.write_str(&self.filter)?;
        f.write_str(&self.group_by)?;
        f.write_str(&self.having)?;
        f.write_str(&self.order_by)?;
        f.write_str(&self.limit)?;
        f.write_str(&self.offset)?;
        f.write_str(";")
    }
}

impl<X: Executor, E: Entity, R> Debug for QueryObject<'_, X, E, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryObject")
            .field("table", &self.table)
            .field("sql", &self.to_string())
            .finish()
    }
}
