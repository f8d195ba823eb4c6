mod connect_options;
mod connection;
mod driver;
mod sql_writer;
mod text_param;

pub use connect_options::*;
pub use connection::*;
pub use driver::*;
pub use sql_writer::*;
pub(crate) use text_param::*;
