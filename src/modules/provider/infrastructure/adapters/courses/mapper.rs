use super::models::RawCourse;
use crate::modules::listing::domain::{
    entities::Course,
    value_objects::{CourseSource, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::modules::provider::infrastructure::adapters::mapper::{text_or, ListingMapper};

/// One mapper per provider feed; the feed decides the source tag
#[derive(Debug, Clone)]
pub struct CourseMapper {
    source: CourseSource,
}

impl CourseMapper {
    pub fn new(source: CourseSource) -> Self {
        Self { source }
    }

    pub fn for_feed(feed: &str) -> Self {
        Self::new(CourseSource::from_feed(feed))
    }

    /// Shown when a row names no partner institution
    fn default_provider(&self) -> String {
        match &self.source {
            CourseSource::Coursera => "Coursera".to_string(),
            CourseSource::Udemy => "Udemy".to_string(),
            CourseSource::Other(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl ListingMapper for CourseMapper {
    type Raw = RawCourse;
    type Output = Course;

    fn source_tag(&self) -> &str {
        self.source.as_str()
    }

    fn map_record(&self, raw: RawCourse, index: usize, _ctx: &NormalizeContext) -> Course {
        Course {
            id: ListingId::resolve(
                self.source_tag(),
                raw.id.as_deref(),
                &raw.link,
                &raw.title,
                index,
            ),
            provider: text_or(&raw.provider, &self.default_provider()),
            title: raw.title,
            link: raw.link,
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coursera_row() {
        let mapper = CourseMapper::for_feed("Coursera");
        let courses = mapper.map_batch(
            vec![
                json!({"title": "Machine Learning", "link": "https://coursera.org/learn/ml", "provider": "Stanford University"}),
                json!({"title": "Python for Everybody", "url": "https://coursera.org/specializations/python"}),
            ],
            &NormalizeContext::new(),
        );

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].provider, "Stanford University");
        assert_eq!(courses[1].provider, "Coursera");
        assert_eq!(courses[1].link, "https://coursera.org/specializations/python");
        assert!(courses.iter().all(|c| c.source == CourseSource::Coursera));
    }

    #[test]
    fn test_other_feed_provider_default() {
        let mapper = CourseMapper::for_feed("edx");
        let course = mapper.map_record(RawCourse::default(), 0, &NormalizeContext::new());
        assert_eq!(course.source, CourseSource::Other("edx".to_string()));
        assert_eq!(course.provider, "Edx");
        assert_eq!(course.title, "");
        assert!(!course.id.is_empty());
    }
}
