// Shared kernel: error type, configuration, logging and serde helpers used by
// every listing module.

pub mod config;
pub mod errors;
pub mod utils;

pub use config::{AppConfig, DataMode, FreshnessConfig};
pub use errors::{AppError, AppResult};
