use async_trait::async_trait;
use serde_json::Value;

use crate::modules::provider::domain::value_objects::Endpoint;

/// Where raw listing records come from (remote service or bundled data)
///
/// Implementations own transport failures: a failed fetch is logged and
/// returned as an empty batch, never as an error. Normalization only ever sees
/// "an array of records, possibly empty".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name for logs ("http", "bundled")
    fn name(&self) -> &str;

    /// Fetch every raw record of one feed
    async fn fetch(&self, endpoint: &Endpoint) -> Vec<Value>;
}
