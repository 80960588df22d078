use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::modules::provider::domain::{repositories::RecordSource, value_objects::Endpoint};
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

use super::http_source::extract_records;

const LABLAB_HACKATHONS: &str = include_str!("../../../../../data/lablab_hackathons.json");
const DEVPOST_HACKATHONS: &str = include_str!("../../../../../data/devpost_hackathons.json");
const COURSES_COURSERA: &str = include_str!("../../../../../data/courses_coursera.json");
const COURSES_UDEMY: &str = include_str!("../../../../../data/courses_udemy.json");
const INTERNSHIPS: &str = include_str!("../../../../../data/internships.json");
const COMPETITIONS: &str = include_str!("../../../../../data/competitions.json");

/// Serves feeds from JSON compiled into the crate or supplied in memory.
///
/// Shapes are identical to the HTTP feeds, so normalization cannot tell the
/// two apart.
#[derive(Debug, Clone, Default)]
pub struct BundledRecordSource {
    datasets: HashMap<String, Vec<Value>>,
}

impl BundledRecordSource {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The snapshot shipped with the crate
    pub fn bundled() -> Self {
        let mut source = Self::empty();
        for (endpoint, json) in [
            (Endpoint::LabLabHackathons, LABLAB_HACKATHONS),
            (Endpoint::DevpostHackathons, DEVPOST_HACKATHONS),
            (Endpoint::courses("coursera"), COURSES_COURSERA),
            (Endpoint::courses("udemy"), COURSES_UDEMY),
            (Endpoint::Internships, INTERNSHIPS),
            (Endpoint::Competitions, COMPETITIONS),
        ] {
            match Self::parse(json) {
                Ok(records) => source = source.with_dataset(&endpoint, records),
                Err(e) => LogContext::error_with_context(
                    &e,
                    &format!("Bundled dataset {} is unreadable", endpoint),
                ),
            }
        }
        source
    }

    pub fn with_dataset(mut self, endpoint: &Endpoint, records: Vec<Value>) -> Self {
        self.datasets.insert(endpoint.key(), records);
        self
    }

    /// Add a dataset from JSON text
    pub fn from_json(self, endpoint: &Endpoint, json: &str) -> AppResult<Self> {
        let records = Self::parse(json)?;
        Ok(self.with_dataset(endpoint, records))
    }

    fn parse(json: &str) -> AppResult<Vec<Value>> {
        let body: Value = serde_json::from_str(json)?;
        extract_records(body)
    }
}

#[async_trait]
impl RecordSource for BundledRecordSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Vec<Value> {
        let records = self
            .datasets
            .get(&endpoint.key())
            .cloned()
            .unwrap_or_default();
        LogContext::fetch(self.name(), &endpoint.key(), Some(records.len()), None);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_snapshot_has_every_feed() {
        let source = BundledRecordSource::bundled();
        for endpoint in [
            Endpoint::LabLabHackathons,
            Endpoint::DevpostHackathons,
            Endpoint::courses("coursera"),
            Endpoint::courses("udemy"),
            Endpoint::Internships,
            Endpoint::Competitions,
        ] {
            assert!(!source.fetch(&endpoint).await.is_empty(), "{} is empty", endpoint);
        }
    }

    #[tokio::test]
    async fn test_unknown_feed_is_empty() {
        let source = BundledRecordSource::bundled();
        assert!(source.fetch(&Endpoint::courses("edx")).await.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let result = BundledRecordSource::empty().from_json(&Endpoint::Internships, "{\"a\": 1}");
        assert!(result.is_err());

        let source = BundledRecordSource::empty()
            .from_json(&Endpoint::Internships, "[{}, {}]")
            .unwrap();
        let records = tokio_test::block_on(source.fetch(&Endpoint::Internships));
        assert_eq!(records.len(), 2);
    }
}
