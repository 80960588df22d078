use serde::{Deserialize, Serialize};

use crate::modules::listing::domain::value_objects::{CompetitionSource, EventStatus};

/// Canonical competition listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub title: String,
    pub link: String,
    pub source: CompetitionSource,

    pub host: String,
    pub description: String,
    pub status: EventStatus,
    pub location: String,

    pub prize_text: String,
    pub prize_amount: f64,
    pub participants: u64,
    pub days_left: String,
}
