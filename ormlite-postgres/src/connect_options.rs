use std::fmt::{self, Display, Formatter};

/// Keyword form of a Postgres connection string.
///
/// ```
/// # use ormlite_postgres::ConnectOptions;
/// let options = ConnectOptions::new("127.0.0.1", 5432, "postgres", "secret", "testdb")
///     .connect_timeout(10);
/// assert_eq!(
///     options.to_string(),
///     "host=127.0.0.1 port=5432 user=postgres password=secret dbname=testdb connect_timeout=10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// Seconds, omitted when `None`.
    pub connect_timeout: Option<u64>,
}

impl ConnectOptions {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        dbname: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            dbname: dbname.into(),
            connect_timeout: None,
        }
    }

    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout = Some(seconds);
        self
    }
}

fn write_value(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    if !value.is_empty() && !value.contains([' ', '\'', '\\']) {
        return f.write_str(value);
    }
    f.write_str("'")?;
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("'")
}

impl Display for ConnectOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("host=")?;
        write_value(f, &self.host)?;
        write!(f, " port={}", self.port)?;
        f.write_str(" user=")?;
        write_value(f, &self.user)?;
        f.write_str(" password=")?;
        write_value(f, &self.password)?;
        f.write_str(" dbname=")?;
        write_value(f, &self.dbname)?;
        if let Some(timeout) = self.connect_timeout {
            write!(f, " connect_timeout={}", timeout)?;
        }
        Ok(())
    }
}
