use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::modules::listing::domain::services::is_within_days;
use crate::modules::listing::domain::value_objects::InternshipSource;
use crate::shared::config::FreshnessConfig;

/// Canonical internship listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: String,
    /// Same as `position_name`; kept so every category exposes a title
    pub title: String,
    pub link: String,
    pub source: InternshipSource,

    pub company: String,
    pub position_name: String,
    pub location: String,

    // Pay: original display text plus the hourly lower bound
    pub salary_text: String,
    pub salary_min: f64,

    pub job_types: BTreeSet<String>,
    pub posting_date: Option<DateTime<Utc>>,
    pub description: String,
    pub rating: f64,
}

impl Internship {
    /// City part of the location ("Austin, TX" -> "Austin")
    pub fn city(&self) -> &str {
        self.location
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    /// Whether the listing gets a "just posted" badge
    pub fn is_just_posted(&self, now: DateTime<Utc>, freshness: &FreshnessConfig) -> bool {
        self.posting_date
            .map(|posted| is_within_days(posted, now, freshness.just_posted_days))
            .unwrap_or(false)
    }
}
