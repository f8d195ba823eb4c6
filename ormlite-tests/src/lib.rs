mod aggregates;
mod batch;
mod person;
mod scripted;

use aggregates::aggregates;
use batch::batch;
use log::LevelFilter;
use ormlite::Executor;
use person::person;
use std::env;

pub use batch::BatchItem;
pub use person::{Gender, Person};
pub use scripted::*;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Run the behavioral suite against a live database.
pub fn execute_tests<X: Executor>(mut executor: X) {
    person(&mut executor);
    batch(&mut executor);
    aggregates(&mut executor);
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
