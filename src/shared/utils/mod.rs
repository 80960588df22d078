pub mod lenient;
pub mod logger;

pub use logger::{init_logger, LogContext, TimedOperation};
