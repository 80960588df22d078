use chrono::{DateTime, Utc};

use super::filter::{FieldValue, FilterDef, Metric, PRIZE_BUCKETS, SALARY_BUCKETS};
use super::sort_key::SortKey;
use crate::modules::listing::domain::{
    entities::{Competition, Course, Hackathon, Internship},
    value_objects::Category,
};

/// What the evaluator needs to know about a canonical listing.
///
/// Each category declares its searchable text, its filters and the sort
/// orders it supports; the evaluator itself is category-agnostic.
pub trait Queryable: Clone + Send + Sync + 'static {
    const CATEGORY: Category;

    fn id(&self) -> &str;
    fn title(&self) -> &str;

    /// Searchable text besides the title
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical field addressed by a filter key
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;

    fn metric(&self, metric: Metric) -> Option<f64>;

    fn posted_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Posting date for ordering; unknown dates sort as the oldest
    fn posted_or_epoch(&self) -> DateTime<Utc> {
        self.posted_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn filters() -> &'static [FilterDef];

    fn sort_keys() -> &'static [SortKey];

    fn default_sort() -> SortKey {
        SortKey::TitleAsc
    }

    /// Field counted by the distinct-value statistic
    fn stat_field() -> &'static str;

    fn filter_def(key: &str) -> Option<&'static FilterDef> {
        Self::filters().iter().find(|def| def.key == key)
    }

    /// Unsupported sort orders fall back to the category default
    fn resolve_sort(requested: SortKey) -> SortKey {
        if Self::sort_keys().contains(&requested) {
            requested
        } else {
            Self::default_sort()
        }
    }
}

impl Queryable for Hackathon {
    const CATEGORY: Category = Category::Hackathons;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.themes.iter().map(String::as_str).collect();
        fields.push(&self.host);
        fields
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "source" => Some(FieldValue::Scalar(self.source.as_str())),
            "status" => Some(FieldValue::Scalar(self.status.as_str())),
            "theme" => Some(FieldValue::Set(
                self.themes.iter().map(String::as_str).collect(),
            )),
            "location" => Some(FieldValue::Scalar(&self.location)),
            "host" => Some(FieldValue::Scalar(&self.host)),
            _ => None,
        }
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Prize => Some(self.prize_amount),
            Metric::Participants => Some(self.participants as f64),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterDef] {
        const FILTERS: &[FilterDef] = &[
            FilterDef::categorical("source"),
            FilterDef::categorical("status"),
            FilterDef::categorical("theme"),
            FilterDef::categorical("location"),
            FilterDef::range("prize", Metric::Prize, PRIZE_BUCKETS),
        ];
        FILTERS
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::TitleAsc,
            SortKey::PrizeDesc,
            SortKey::ParticipantsDesc,
        ]
    }

    fn stat_field() -> &'static str {
        "host"
    }
}

impl Queryable for Internship {
    const CATEGORY: Category = Category::Internships;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.company.as_str(), self.description.as_str()]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "job_type" => Some(FieldValue::Set(
                self.job_types.iter().map(String::as_str).collect(),
            )),
            "location" => Some(FieldValue::Scalar(self.city())),
            "company" => Some(FieldValue::Scalar(&self.company)),
            "source" => Some(FieldValue::Scalar(self.source.as_str())),
            _ => None,
        }
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Salary => Some(self.salary_min),
            Metric::Rating => Some(self.rating),
            _ => None,
        }
    }

    fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.posting_date
    }

    fn filters() -> &'static [FilterDef] {
        const FILTERS: &[FilterDef] = &[
            FilterDef::categorical("job_type"),
            FilterDef::categorical("location"),
            FilterDef::range("salary", Metric::Salary, SALARY_BUCKETS),
        ];
        FILTERS
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::NewestFirst,
            SortKey::SalaryDesc,
            SortKey::RatingDesc,
            SortKey::TitleAsc,
        ]
    }

    fn default_sort() -> SortKey {
        SortKey::NewestFirst
    }

    fn stat_field() -> &'static str {
        "company"
    }
}

impl Queryable for Course {
    const CATEGORY: Category = Category::Courses;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.provider.as_str()]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "provider" => Some(FieldValue::Scalar(&self.provider)),
            "source" => Some(FieldValue::Scalar(self.source.as_str())),
            _ => None,
        }
    }

    fn metric(&self, _metric: Metric) -> Option<f64> {
        None
    }

    fn filters() -> &'static [FilterDef] {
        const FILTERS: &[FilterDef] = &[
            FilterDef::categorical("provider"),
            FilterDef::categorical("source"),
        ];
        FILTERS
    }

    fn sort_keys() -> &'static [SortKey] {
        &[SortKey::TitleAsc]
    }

    fn stat_field() -> &'static str {
        "provider"
    }
}

impl Queryable for Competition {
    const CATEGORY: Category = Category::Competitions;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "source" => Some(FieldValue::Scalar(self.source.as_str())),
            "status" => Some(FieldValue::Scalar(self.status.as_str())),
            "location" => Some(FieldValue::Scalar(&self.location)),
            "host" => Some(FieldValue::Scalar(&self.host)),
            _ => None,
        }
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Prize => Some(self.prize_amount),
            Metric::Participants => Some(self.participants as f64),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterDef] {
        const FILTERS: &[FilterDef] = &[
            FilterDef::categorical("source"),
            FilterDef::categorical("status"),
            FilterDef::range("prize", Metric::Prize, PRIZE_BUCKETS),
        ];
        FILTERS
    }

    fn sort_keys() -> &'static [SortKey] {
        &[
            SortKey::TitleAsc,
            SortKey::PrizeDesc,
            SortKey::ParticipantsDesc,
        ]
    }

    fn stat_field() -> &'static str {
        "host"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_fallback_per_category() {
        assert_eq!(Course::resolve_sort(SortKey::PrizeDesc), SortKey::TitleAsc);
        assert_eq!(Internship::resolve_sort(SortKey::PrizeDesc), SortKey::NewestFirst);
        assert_eq!(Hackathon::resolve_sort(SortKey::PrizeDesc), SortKey::PrizeDesc);
        assert_eq!(Internship::resolve_sort(SortKey::RatingDesc), SortKey::RatingDesc);
    }

    #[test]
    fn test_filter_lookup() {
        assert!(Hackathon::filter_def("theme").is_some());
        assert!(Hackathon::filter_def("job_type").is_none());
        assert!(Internship::filter_def("salary").is_some());
    }
}
