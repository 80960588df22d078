use serde::{Deserialize, Serialize};

use crate::modules::listing::domain::value_objects::CourseSource;

/// Canonical course listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub link: String,
    /// Partner institution shown on the card ("Google", "Stanford University")
    pub provider: String,
    /// Feed the course came from
    pub source: CourseSource,
}
