mod column;
mod connection;
mod constraint;
mod driver;
mod entity;
mod executor;
mod expression;
mod field_def;
mod field_value;
mod fixed_buf;
mod from_cells;
mod param;
mod query;
mod row_set;
mod selectable;
mod sql_writer;
mod table_def;
mod util;
mod value_kind;

pub use ::anyhow::Context;
pub use column::*;
pub use connection::*;
pub use constraint::*;
pub use driver::*;
pub use entity::*;
pub use executor::*;
pub use expression::*;
pub use field_def::*;
pub use field_value::*;
pub use fixed_buf::*;
pub use from_cells::*;
pub use param::*;
pub use query::*;
pub use row_set::*;
pub use selectable::*;
pub use sql_writer::*;
pub use table_def::*;
pub use util::*;
pub use value_kind::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
