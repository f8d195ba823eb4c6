use crate::{Executor, Result};

pub trait Connection: Executor {
    /// Open a connection to the database at `url`, whose scheme must match `Driver::NAME`.
    fn connect(url: &str) -> Result<Self>;
}
