use futures::future::join_all;
use std::sync::Arc;

use crate::modules::listing::domain::entities::{Competition, Course, Hackathon, Internship};
use crate::modules::provider::domain::{
    repositories::RecordSource,
    value_objects::{Endpoint, NormalizeContext},
};
use crate::modules::provider::infrastructure::adapters::{
    normalize_competitions, normalize_courses, normalize_hackathons, normalize_internships,
};
use crate::modules::provider::infrastructure::sources::{BundledRecordSource, HttpRecordSource};
use crate::shared::config::{AppConfig, DataMode};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;

/// Fetches every feed of a category and normalizes the result.
///
/// Loading never fails: an unreachable feed contributes an empty batch and
/// the category is built from whatever the other feeds returned.
#[derive(Clone)]
pub struct ListingLoader {
    source: Arc<dyn RecordSource>,
    course_providers: Vec<String>,
    /// Pinned normalization clock; `None` reads the wall clock per load
    context: Option<NormalizeContext>,
}

impl ListingLoader {
    pub fn new(source: Arc<dyn RecordSource>, course_providers: Vec<String>) -> Self {
        Self {
            source,
            course_providers,
            context: None,
        }
    }

    /// Picks the record source from the configured data mode
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let source: Arc<dyn RecordSource> = match config.data_mode {
            DataMode::Remote => Arc::new(HttpRecordSource::new(config)?),
            DataMode::Bundled => Arc::new(BundledRecordSource::bundled()),
        };

        log::info!(
            "Listing loader using {} source ({} course providers)",
            source.name(),
            config.course_providers.len()
        );

        Ok(Self::new(source, config.course_providers.clone()))
    }

    /// Pin the clock used for countdowns (for testing)
    pub fn with_context(mut self, context: NormalizeContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    fn context(&self) -> NormalizeContext {
        self.context.unwrap_or_default()
    }

    pub async fn load_hackathons(&self) -> Vec<Hackathon> {
        let timer = TimedOperation::new("load hackathons");
        let (lablab, devpost) = futures::join!(
            self.source.fetch(&Endpoint::LabLabHackathons),
            self.source.fetch(&Endpoint::DevpostHackathons),
        );

        let hackathons = normalize_hackathons(lablab, devpost, &self.context());
        timer.finish_with_info(&format!("{} listings", hackathons.len()));
        hackathons
    }

    pub async fn load_internships(&self) -> Vec<Internship> {
        let records = self.source.fetch(&Endpoint::Internships).await;
        normalize_internships(records, &self.context())
    }

    /// Provider feeds are fetched concurrently and merged in configured order
    pub async fn load_courses(&self) -> Vec<Course> {
        let timer = TimedOperation::new("load courses");
        let endpoints: Vec<Endpoint> = self
            .course_providers
            .iter()
            .map(|provider| Endpoint::courses(provider))
            .collect();

        let batches = join_all(endpoints.iter().map(|endpoint| self.source.fetch(endpoint))).await;
        let feeds = self
            .course_providers
            .iter()
            .cloned()
            .zip(batches)
            .collect::<Vec<_>>();

        let courses = normalize_courses(feeds, &self.context());
        timer.finish_with_info(&format!("{} listings", courses.len()));
        courses
    }

    pub async fn load_competitions(&self) -> Vec<Competition> {
        let records = self.source.fetch(&Endpoint::Competitions).await;
        normalize_competitions(records, &self.context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::domain::repositories::MockRecordSource;
    use crate::modules::listing::domain::value_objects::CourseSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_course_feeds_merge_in_configured_order() {
        let source = BundledRecordSource::empty()
            .with_dataset(&Endpoint::courses("udemy"), vec![json!({"title": "U1"})])
            .with_dataset(
                &Endpoint::courses("coursera"),
                vec![json!({"title": "C1"}), json!({"title": "C2"})],
            );
        let loader = ListingLoader::new(
            Arc::new(source),
            vec!["coursera".to_string(), "udemy".to_string()],
        );

        let courses = loader.load_courses().await;
        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["C1", "C2", "U1"]);
        assert_eq!(courses[2].source, CourseSource::Udemy);
    }

    #[tokio::test]
    async fn test_failed_feed_contributes_nothing() {
        let mut source = MockRecordSource::new();
        source.expect_name().return_const("mock".to_string());
        source.expect_fetch().returning(|endpoint| match endpoint {
            Endpoint::LabLabHackathons => vec![json!({"title": "Only LabLab"})],
            _ => Vec::new(),
        });

        let loader = ListingLoader::new(Arc::new(source), vec![]);
        let hackathons = loader.load_hackathons().await;
        assert_eq!(hackathons.len(), 1);
        assert!(loader.load_internships().await.is_empty());
        assert!(loader.load_courses().await.is_empty());
    }

    #[tokio::test]
    async fn test_bundled_mode_from_config() {
        let config = AppConfig::builder()
            .data_mode(DataMode::Bundled)
            .build()
            .unwrap();
        let loader = ListingLoader::from_config(&config).unwrap();
        assert_eq!(loader.source_name(), "bundled");
        assert_eq!(loader.load_competitions().await.len(), 3);
    }
}
