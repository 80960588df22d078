use std::fmt;

/// Listing feeds exposed by the listing service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LabLabHackathons,
    DevpostHackathons,
    /// One course feed per provider (`coursera`, `udemy`, ...)
    Courses { provider: String },
    Internships,
    Competitions,
}

impl Endpoint {
    pub fn courses(provider: &str) -> Self {
        Endpoint::Courses {
            provider: provider.trim().to_lowercase(),
        }
    }

    /// Stable key, also used to look up bundled datasets
    pub fn key(&self) -> String {
        match self {
            Endpoint::LabLabHackathons => "hackathons/lablab".to_string(),
            Endpoint::DevpostHackathons => "hackathons/devpost".to_string(),
            Endpoint::Courses { provider } => format!("courses/{}", provider),
            Endpoint::Internships => "internships".to_string(),
            Endpoint::Competitions => "competitions".to_string(),
        }
    }

    /// Request path relative to the service base URL
    pub fn path(&self, limit: usize) -> String {
        match self {
            Endpoint::LabLabHackathons => format!("/hackathons/lablab?limit={}", limit),
            Endpoint::DevpostHackathons => format!("/hackathons/devpost?limit={}", limit),
            Endpoint::Courses { provider } => format!(
                "/courses/{}?limit={}",
                urlencoding::encode(provider),
                limit
            ),
            Endpoint::Internships => format!("/internships/?limit={}", limit),
            Endpoint::Competitions => format!("/competitions?limit={}", limit),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
