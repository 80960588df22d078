use serde::Deserialize;

use crate::shared::utils::lenient::{
    count_or_zero, optional_string, string_list, string_or_default,
};

/// Devpost hackathon tile
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DevpostHackathon {
    #[serde(default, deserialize_with = "optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub submission_period: String,
    /// "$50,000 in prizes"
    #[serde(default, deserialize_with = "string_or_default")]
    pub prize_amount: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub participants: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub host: String,
    #[serde(default, deserialize_with = "string_list")]
    pub themes: Vec<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub managed_by_devpost: String,
    /// "12 days left", "Upcoming", "Ended"
    #[serde(default, deserialize_with = "string_or_default")]
    pub days_left: String,
}
