/// Shared helpers: a pinned clock and a mockable record source
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use opportunities_lib::{Endpoint, ListingLoader, NormalizeContext, RecordSource};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

mock! {
    pub Source {}

    #[async_trait]
    impl RecordSource for Source {
        fn name(&self) -> &str;
        async fn fetch(&self, endpoint: &Endpoint) -> Vec<Value>;
    }
}

/// 2025-11-10 09:00 UTC
pub fn fixed_context() -> NormalizeContext {
    NormalizeContext::at(Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap())
}

/// Mock source answering from a fixed map; unknown feeds come back empty
pub fn mock_source(feeds: HashMap<Endpoint, Vec<Value>>) -> MockSource {
    let mut source = MockSource::new();
    source.expect_name().return_const("mock".to_string());
    source
        .expect_fetch()
        .returning(move |endpoint| feeds.get(endpoint).cloned().unwrap_or_default());
    source
}

pub fn loader_for(source: MockSource) -> ListingLoader {
    ListingLoader::new(
        Arc::new(source),
        vec!["coursera".to_string(), "udemy".to_string()],
    )
    .with_context(fixed_context())
}
