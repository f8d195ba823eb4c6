pub use ormlite_core::*;
pub use ormlite_macros::*;
