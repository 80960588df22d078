use serde::{Deserialize, Serialize};

use crate::modules::listing::domain::value_objects::{EventStatus, HackathonSource};

/// Canonical hackathon listing, shared by the LabLab and Devpost feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    // Core identification
    pub id: String,
    pub title: String,
    pub link: String,
    pub source: HackathonSource,

    // Organisation
    pub host: String,
    pub status: EventStatus,
    pub location: String,

    // Prize: original display text plus the amount recovered from it
    pub prize_text: String,
    pub prize_amount: f64,

    pub themes: Vec<String>,
    pub submission_period: String,
    pub participants: u64,
    pub days_left: String,

    pub image_url: String,
}

impl Hackathon {
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t.eq_ignore_ascii_case(theme))
    }

    pub fn is_open(&self) -> bool {
        self.status == EventStatus::Open
    }
}
