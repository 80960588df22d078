use serde::{Deserialize, Serialize};
use std::fmt;

/// Hackathon feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HackathonSource {
    #[serde(rename = "lablab")]
    LabLab,
    #[serde(rename = "devpost")]
    Devpost,
}

impl HackathonSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HackathonSource::LabLab => "lablab",
            HackathonSource::Devpost => "devpost",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HackathonSource::LabLab => "LabLab.ai",
            HackathonSource::Devpost => "Devpost",
        }
    }
}

impl fmt::Display for HackathonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internship feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternshipSource {
    #[serde(rename = "indeed")]
    Indeed,
}

impl InternshipSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternshipSource::Indeed => "indeed",
        }
    }
}

impl fmt::Display for InternshipSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Course provider feeds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseSource {
    Coursera,
    Udemy,
    /// A provider feed configured at runtime
    Other(String),
}

impl CourseSource {
    /// Maps a feed name (as used in `/courses/{provider}`) to its tag
    pub fn from_feed(feed: &str) -> Self {
        match feed.trim().to_lowercase().as_str() {
            "coursera" => CourseSource::Coursera,
            "udemy" => CourseSource::Udemy,
            other => CourseSource::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CourseSource::Coursera => "coursera",
            CourseSource::Udemy => "udemy",
            CourseSource::Other(name) => name,
        }
    }
}

impl fmt::Display for CourseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Competition feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionSource {
    #[serde(rename = "lablab")]
    LabLab,
    #[serde(rename = "devpost")]
    Devpost,
}

impl CompetitionSource {
    /// Competitions share one feed; the originating site is read off the link
    pub fn from_link(link: &str) -> Self {
        if link.to_lowercase().contains("lablab.ai") {
            CompetitionSource::LabLab
        } else {
            CompetitionSource::Devpost
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionSource::LabLab => "lablab",
            CompetitionSource::Devpost => "devpost",
        }
    }
}

impl fmt::Display for CompetitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_source_from_feed() {
        assert_eq!(CourseSource::from_feed("Coursera"), CourseSource::Coursera);
        assert_eq!(CourseSource::from_feed("udemy"), CourseSource::Udemy);
        assert_eq!(
            CourseSource::from_feed("edx"),
            CourseSource::Other("edx".to_string())
        );
    }

    #[test]
    fn test_competition_source_from_link() {
        assert_eq!(
            CompetitionSource::from_link("https://lablab.ai/event/x"),
            CompetitionSource::LabLab
        );
        assert_eq!(
            CompetitionSource::from_link("https://foo.devpost.com"),
            CompetitionSource::Devpost
        );
        assert_eq!(CompetitionSource::from_link(""), CompetitionSource::Devpost);
    }

    #[test]
    fn test_sources_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&HackathonSource::LabLab).unwrap(),
            "\"lablab\""
        );
        assert_eq!(
            serde_json::to_string(&CourseSource::Coursera).unwrap(),
            "\"coursera\""
        );
    }
}
