// LabLab.ai event cards as stored by the listing service.
// Every field is optional in practice; see shared::utils::lenient.

use serde::Deserialize;

use crate::shared::utils::lenient::{
    count_or_zero, optional_string, string_list, string_or_default,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LabLabHackathon {
    #[serde(default, deserialize_with = "optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub link: String,
    /// Card ribbon: "Register", "Finished", ...
    #[serde(default, deserialize_with = "string_or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub location: String,
    /// "NOV 14 - 19"
    #[serde(default, deserialize_with = "string_or_default")]
    pub submission_period: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub prize_amount: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub participants: u64,
    /// Card blurb; prize and themes are mined from it when absent
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub image_url: String,
    /// Comma separated in the scraper output
    #[serde(default, deserialize_with = "string_list")]
    pub themes: Vec<String>,
    /// Countdown computed at scrape time (stale by the time it is read)
    #[serde(default, deserialize_with = "optional_string")]
    pub days_left: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub end_date: Option<String>,
}
