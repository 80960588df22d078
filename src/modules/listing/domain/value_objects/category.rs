use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing categories; each owns its own collection and query state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hackathons,
    Internships,
    Courses,
    Competitions,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hackathons,
        Category::Internships,
        Category::Courses,
        Category::Competitions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hackathons => "hackathons",
            Category::Internships => "internships",
            Category::Courses => "courses",
            Category::Competitions => "competitions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
