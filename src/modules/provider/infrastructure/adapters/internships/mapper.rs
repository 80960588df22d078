use std::collections::BTreeSet;

use super::models::RawInternship;
use crate::modules::listing::domain::{
    entities::Internship,
    services::{extract_hourly_rate, parse_posting_date},
    value_objects::{InternshipSource, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::modules::provider::infrastructure::adapters::mapper::{clean_text, ListingMapper};

#[derive(Debug, Clone, Default)]
pub struct InternshipMapper;

impl InternshipMapper {
    pub fn new() -> Self {
        Self
    }
}

impl ListingMapper for InternshipMapper {
    type Raw = RawInternship;
    type Output = Internship;

    fn source_tag(&self) -> &str {
        InternshipSource::Indeed.as_str()
    }

    fn map_record(&self, raw: RawInternship, index: usize, _ctx: &NormalizeContext) -> Internship {
        let salary_text = clean_text(&raw.salary).to_string();
        let salary_min = extract_hourly_rate(Some(&salary_text));
        let job_types: BTreeSet<String> = raw.job_type.into_iter().collect();
        let rating = if raw.rating.is_finite() && raw.rating > 0.0 {
            raw.rating
        } else {
            0.0
        };

        Internship {
            id: ListingId::resolve(
                self.source_tag(),
                raw.id.as_deref(),
                &raw.url,
                &raw.position_name,
                index,
            ),
            title: raw.position_name.clone(),
            link: raw.url,
            source: InternshipSource::Indeed,
            company: clean_text(&raw.company).to_string(),
            position_name: raw.position_name,
            location: clean_text(&raw.location).to_string(),
            salary_text,
            salary_min,
            job_types,
            posting_date: parse_posting_date(raw.posting_date_parsed.as_deref()),
            description: raw.description,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_indeed_posting() {
        let raw: RawInternship = serde_json::from_value(json!({
            "id": "a1b2",
            "positionName": "Software Engineering Intern",
            "company": "Acme",
            "location": "Austin, TX",
            "salary": "$18 - $22 an hour",
            "jobType": ["Internship", "Full-time"],
            "postingDateParsed": "2025-03-03T00:00:00.000Z",
            "rating": 4.1,
            "url": "https://indeed.com/viewjob?jk=a1b2"
        }))
        .unwrap();

        let internship = InternshipMapper::new().map_record(raw, 0, &NormalizeContext::new());
        assert_eq!(internship.id, "indeed-a1b2");
        assert_eq!(internship.title, "Software Engineering Intern");
        assert_eq!(internship.salary_min, 18.0);
        assert_eq!(internship.job_types.len(), 2);
        assert!(internship.job_types.contains("Internship"));
        assert_eq!(
            internship.posting_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap())
        );
        assert_eq!(internship.rating, 4.1);
        assert_eq!(internship.city(), "Austin");
    }

    #[test]
    fn test_job_type_scalar_and_missing() {
        let scalar: RawInternship =
            serde_json::from_value(json!({"jobType": "Internship"})).unwrap();
        let internship = InternshipMapper::new().map_record(scalar, 0, &NormalizeContext::new());
        assert_eq!(internship.job_types.len(), 1);

        let missing = InternshipMapper::new().map_record(
            RawInternship::default(),
            1,
            &NormalizeContext::new(),
        );
        assert!(missing.job_types.is_empty());
        assert_eq!(missing.posting_date, None);
        assert_eq!(missing.salary_min, 0.0);
        assert_eq!(missing.rating, 0.0);
    }

    #[test]
    fn test_unparsable_date_and_salary() {
        let raw: RawInternship = serde_json::from_value(json!({
            "salary": "Competitive",
            "postingDateParsed": "Just posted",
            "rating": "n/a"
        }))
        .unwrap();
        let internship = InternshipMapper::new().map_record(raw, 0, &NormalizeContext::new());
        assert_eq!(internship.salary_min, 0.0);
        assert_eq!(internship.posting_date, None);
        assert_eq!(internship.rating, 0.0);
    }
}
