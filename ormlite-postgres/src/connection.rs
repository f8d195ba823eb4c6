use crate::{ConnectOptions, PostgresDriver, TextParam};
use ormlite_core::{
    Connection, Context, Driver, Error, Executor, Param, Result, RowSet, truncate_long,
};
use postgres::{Client, NoTls, SimpleQueryMessage, Statement, types::ToSql};
use url::Url;
use urlencoding::decode;

/// Blocking Postgres connection exchanging parameters and cells as text.
///
/// Holds at most one prepared statement, preparing again replaces it.
pub struct PostgresConnection {
    pub(crate) client: Client,
    pub(crate) prepared: Option<(String, Statement)>,
}

impl PostgresConnection {
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            prepared: None,
        }
    }

    /// Connect using the keyword form built from `options`.
    pub fn connect_with(options: &ConnectOptions) -> Result<Self> {
        log::debug!(
            "connect: host={} port={} user={} dbname={}",
            options.host,
            options.port,
            options.user,
            options.dbname
        );
        let client = Client::connect(&options.to_string(), NoTls).map_err(|e| {
            let e = Error::new(e).context(format!(
                "While trying to connect to `{}:{}/{}`",
                options.host, options.port, options.dbname
            ));
            log::error!("{:#}", e);
            e
        })?;
        Ok(Self::from_client(client))
    }

    pub fn client(&mut self) -> &mut Client {
        &mut self.client
    }
}

impl Executor for PostgresConnection {
    type Driver = PostgresDriver;

    fn driver(&self) -> &Self::Driver {
        &PostgresDriver {}
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        self.client.batch_execute(sql).map_err(|e| {
            let e = Error::new(e).context(format!(
                "While executing the query:\n{}",
                truncate_long!(sql)
            ));
            log::error!("{:#}", e);
            e
        })
    }

    fn prepare(&mut self, name: &str, sql: &str, param_count: usize) -> Result<()> {
        self.prepared = None;
        let sql = sql.trim_end().trim_end_matches(';');
        let statement = self.client.prepare(sql).map_err(|e| {
            let e = Error::new(e).context(format!(
                "While preparing the query:\n{}",
                truncate_long!(sql)
            ));
            log::error!("{:#}", e);
            e
        })?;
        if statement.params().len() != param_count {
            let e = Error::msg(format!(
                "The query expects {} parameters instead of {}:\n{}",
                statement.params().len(),
                param_count,
                truncate_long!(sql)
            ));
            log::error!("{:#}", e);
            return Err(e);
        }
        self.prepared = Some((name.to_string(), statement));
        Ok(())
    }

    fn execute_prepared(&mut self, name: &str, params: &[Param]) -> Result<()> {
        let Some((prepared_name, statement)) = &self.prepared else {
            let e = Error::msg(format!("No statement is prepared with the name `{}`", name));
            log::error!("{:#}", e);
            return Err(e);
        };
        if prepared_name != name {
            let e = Error::msg(format!(
                "The prepared statement is `{}` instead of `{}`",
                prepared_name, name
            ));
            log::error!("{:#}", e);
            return Err(e);
        }
        let values: Vec<TextParam> = params.iter().map(TextParam).collect();
        let values: Vec<&(dyn ToSql + Sync)> =
            values.iter().map(|v| v as &(dyn ToSql + Sync)).collect();
        self.client
            .execute(statement, &values)
            .map(|_| ())
            .map_err(|e| {
                let e = Error::new(e).context("While executing the prepared statement");
                log::error!("{:#}", e);
                e
            })
    }

    fn fetch(&mut self, sql: &str) -> Result<RowSet> {
        let messages = self.client.simple_query(sql).map_err(|e| {
            let e = Error::new(e).context(format!(
                "While fetching the query:\n{}",
                truncate_long!(sql)
            ));
            log::error!("{:#}", e);
            e
        })?;
        let mut result = RowSet::default();
        for message in messages {
            if let SimpleQueryMessage::Row(row) = message {
                result.columns = row.len();
                result.rows.push(
                    (0..row.len())
                        .map(|i| row.get(i).map(ToString::to_string))
                        .collect(),
                );
            }
        }
        Ok(result)
    }
}

impl Connection for PostgresConnection {
    fn connect(url: &str) -> Result<PostgresConnection> {
        let context = || format!("While trying to connect to `{}`", truncate_long!(url));
        let url = decode(url).with_context(context)?;
        let prefix = format!("{}://", PostgresDriver::NAME);
        if !url.starts_with(&prefix) {
            let error = Error::msg(format!(
                "Postgres connection url must start with `{}`",
                &prefix
            ))
            .context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        let url = Url::parse(&url).with_context(context)?;
        let client = Client::connect(url.as_str(), NoTls).map_err(|e| {
            let e = Error::new(e).context(context());
            log::error!("{:#}", e);
            e
        })?;
        Ok(Self::from_client(client))
    }
}
