use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registration state of a hackathon or competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Upcoming,
    Ended,
    Unknown,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ended => "ended",
            EventStatus::Unknown => "unknown",
        }
    }

    /// Devpost exposes status only through its countdown label
    /// ("12 days left", "Upcoming", "Ended")
    pub fn from_countdown_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("left") {
            EventStatus::Open
        } else if lower.contains("upcoming") || lower.contains("starts") {
            EventStatus::Upcoming
        } else if lower.contains("ended") || lower.contains("closed") {
            EventStatus::Ended
        } else {
            EventStatus::Unknown
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for EventStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "open" | "register" | "registration open" | "live" | "ongoing" => EventStatus::Open,
            "upcoming" | "soon" | "coming soon" => EventStatus::Upcoming,
            "ended" | "finished" | "closed" | "past" => EventStatus::Ended,
            _ => EventStatus::Unknown,
        }
    }
}

impl FromStr for EventStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_feed_labels() {
        assert_eq!(EventStatus::from("Register"), EventStatus::Open);
        assert_eq!(EventStatus::from("Finished"), EventStatus::Ended);
        assert_eq!(EventStatus::from(" upcoming "), EventStatus::Upcoming);
        assert_eq!(EventStatus::from("???"), EventStatus::Unknown);
    }

    #[test]
    fn test_status_from_countdown() {
        assert_eq!(EventStatus::from_countdown_label("12 days left"), EventStatus::Open);
        assert_eq!(EventStatus::from_countdown_label("Upcoming"), EventStatus::Upcoming);
        assert_eq!(EventStatus::from_countdown_label("Ended"), EventStatus::Ended);
        assert_eq!(EventStatus::from_countdown_label("N/A"), EventStatus::Unknown);
    }
}
