use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::filter::Metric;
use crate::shared::errors::AppError;

/// Result orderings. Numeric and date orderings are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// A-Z, case-insensitive
    #[default]
    TitleAsc,
    PrizeDesc,
    ParticipantsDesc,
    SalaryDesc,
    RatingDesc,
    NewestFirst,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title",
            SortKey::PrizeDesc => "prize",
            SortKey::ParticipantsDesc => "participants",
            SortKey::SalaryDesc => "salary",
            SortKey::RatingDesc => "rating",
            SortKey::NewestFirst => "newest",
        }
    }

    pub fn metric(&self) -> Option<Metric> {
        match self {
            SortKey::PrizeDesc => Some(Metric::Prize),
            SortKey::ParticipantsDesc => Some(Metric::Participants),
            SortKey::SalaryDesc => Some(Metric::Salary),
            SortKey::RatingDesc => Some(Metric::Rating),
            SortKey::TitleAsc | SortKey::NewestFirst => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "title_asc" | "a-z" | "az" | "alphabetical" => Ok(SortKey::TitleAsc),
            "prize" | "prize_desc" => Ok(SortKey::PrizeDesc),
            "participants" | "participants_desc" => Ok(SortKey::ParticipantsDesc),
            "salary" | "salary_desc" => Ok(SortKey::SalaryDesc),
            "rating" | "rating_desc" => Ok(SortKey::RatingDesc),
            "newest" | "date" | "newest_first" => Ok(SortKey::NewestFirst),
            other => Err(AppError::InvalidInput(format!("Unknown sort key: {}", other))),
        }
    }
}
