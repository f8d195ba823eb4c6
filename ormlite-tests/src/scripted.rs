use ormlite::{Driver, Error, Executor, Param, Result, RowSet, SqlWriter};
use std::collections::VecDeque;

/// Round trip observed by a `ScriptedExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Execute(String),
    Prepare {
        name: String,
        sql: String,
        param_count: usize,
    },
    ExecutePrepared {
        name: String,
        params: Vec<String>,
    },
    Fetch(String),
}

#[derive(Default, Debug, Clone, Copy)]
pub struct ScriptedDriver {}

#[derive(Default, Debug, Clone, Copy)]
pub struct ScriptedSqlWriter {}

impl SqlWriter for ScriptedSqlWriter {}

impl Driver for ScriptedDriver {
    type SqlWriter = ScriptedSqlWriter;

    const NAME: &'static str = "scripted";

    fn sql_writer(&self) -> ScriptedSqlWriter {
        ScriptedSqlWriter {}
    }
}

/// In memory executor recording every round trip.
///
/// `fetch` pops the queued row sets in order and returns an empty one when none is left. A round
/// trip whose statement or parameters contain the text given to `fail_on` returns an error.
#[derive(Default, Debug)]
pub struct ScriptedExecutor {
    pub recorded: Vec<Recorded>,
    pub results: VecDeque<RowSet>,
    pub fail_on: Option<String>,
    driver: ScriptedDriver,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a row set of text cells, `None` standing for `NULL`.
    pub fn push_rows(&mut self, rows: &[&[Option<&str>]]) {
        let rows: Vec<_> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(ToString::to_string))
                    .collect::<Box<[_]>>()
            })
            .collect();
        let columns = rows.first().map(|r| r.len()).unwrap_or_default();
        self.results.push_back(RowSet::new(columns, rows));
    }

    pub fn fail_on(mut self, pattern: impl Into<String>) -> Self {
        self.fail_on = Some(pattern.into());
        self
    }

    /// Statements sent through `execute` and `fetch`, in order.
    pub fn statements(&self) -> Vec<&str> {
        self.recorded
            .iter()
            .filter_map(|v| match v {
                Recorded::Execute(sql) | Recorded::Fetch(sql) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, text: &str) -> Result<()> {
        match &self.fail_on {
            Some(pattern) if text.contains(pattern.as_str()) => {
                let e = Error::msg(format!("Scripted failure on:\n{}", text));
                log::error!("{:#}", e);
                Err(e)
            }
            _ => Ok(()),
        }
    }
}

impl Executor for ScriptedExecutor {
    type Driver = ScriptedDriver;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        self.recorded.push(Recorded::Execute(sql.to_string()));
        self.check(sql)
    }

    fn prepare(&mut self, name: &str, sql: &str, param_count: usize) -> Result<()> {
        self.recorded.push(Recorded::Prepare {
            name: name.to_string(),
            sql: sql.to_string(),
            param_count,
        });
        self.check(sql)
    }

    fn execute_prepared(&mut self, name: &str, params: &[Param]) -> Result<()> {
        let params: Vec<String> = params.iter().map(|v| v.as_str().to_string()).collect();
        let joined = params.join(", ");
        self.recorded.push(Recorded::ExecutePrepared {
            name: name.to_string(),
            params,
        });
        self.check(&joined)
    }

    fn fetch(&mut self, sql: &str) -> Result<RowSet> {
        self.recorded.push(Recorded::Fetch(sql.to_string()));
        self.check(sql)?;
        Ok(self.results.pop_front().unwrap_or_default())
    }
}
