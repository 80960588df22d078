use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::modules::provider::domain::{repositories::RecordSource, value_objects::Endpoint};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};

/// Reads listing feeds from the listing service over HTTP
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
    limit: usize,
}

impl HttpRecordSource {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_client(client, &config.api_base_url, config.fetch_limit))
    }

    /// Create source with a custom HTTP client (for testing)
    pub fn with_client(client: Client, base_url: &str, limit: usize) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
        }
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path(self.limit))
    }

    async fn try_fetch(&self, endpoint: &Endpoint) -> AppResult<Vec<Value>> {
        let url = self.url_for(endpoint);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: Value = response.json().await?;

        let records = extract_records(body)?;
        debug!("{} answered with {} records", endpoint, records.len());
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Vec<Value> {
        let timer = TimedOperation::new(&format!("fetch {}", endpoint));

        match self.try_fetch(endpoint).await {
            Ok(records) => {
                let elapsed = timer.finish();
                LogContext::fetch(self.name(), &endpoint.key(), Some(records.len()), Some(elapsed));
                records
            }
            Err(e) => {
                LogContext::fetch_failed(self.name(), &endpoint.key(), &e);
                Vec::new()
            }
        }
    }
}

/// Feeds answer with a bare array; some deployments wrap it in
/// `{"data": [...]}` or `{"items": [...]}`
pub fn extract_records(body: Value) -> AppResult<Vec<Value>> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("data").or_else(|| map.remove("items")) {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(AppError::SerializationError(
                "Response object has no record array".to_string(),
            )),
        },
        other => Err(AppError::SerializationError(format!(
            "Expected a JSON array of records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
