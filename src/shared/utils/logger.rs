use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the logger
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("opportunities_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized"),
            // Another logger (e.g. a host application's) is already installed
            Err(e) => debug!("Logger already installed: {}", e),
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a record fetch against a listing endpoint
    pub fn fetch(source: &str, endpoint: &str, records: Option<usize>, duration_ms: Option<u64>) {
        match (records, duration_ms) {
            (Some(count), Some(duration)) => info!(
                "Fetch: {} {} returned {} records in {}ms",
                source, endpoint, count, duration
            ),
            (Some(count), None) => info!("Fetch: {} {} returned {} records", source, endpoint, count),
            _ => debug!("Fetch: Starting {} {}", source, endpoint),
        }
    }

    /// Log a transport failure that was degraded to an empty batch
    pub fn fetch_failed(source: &str, endpoint: &str, error: &dyn std::error::Error) {
        warn!(
            "Fetch: {} {} failed, continuing with an empty batch: {}",
            source, endpoint, error
        );
    }

    /// Log normalization of one raw batch
    pub fn normalized(category: &str, source: &str, count: usize) {
        debug!("Normalize: {} from {} -> {} listings", category, source, count);
    }

    /// Log query evaluation
    pub fn query(category: &str, search: &str, input: usize, output: usize) {
        if search.is_empty() {
            debug!("Query: {} {} -> {} results", category, input, output);
        } else {
            debug!(
                "Query: {} '{}' {} -> {} results",
                category, search, input, output
            );
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => debug!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => debug!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish(self) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
