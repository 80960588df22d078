use serde::Deserialize;

use crate::shared::utils::lenient::{count_or_zero, optional_string, string_or_default};

/// Competition row: the hackathon table layout plus a free text description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCompetition {
    #[serde(default, deserialize_with = "optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub prize_amount: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub participants: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub host: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub days_left: String,
}
