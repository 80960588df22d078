//! Structured hints recovered from free-form event descriptions.
//!
//! LabLab cards carry no dedicated prize or theme fields; both are read out
//! of the description text.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

const THEME_KEYWORDS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Blockchain",
    "Web3",
    "Healthcare",
    "Education",
    "Finance",
    "Gaming",
    "Robotics",
    "IoT",
    "Cloud",
    "DevOps",
    "Quantum",
    "Cybersecurity",
    "Data Science",
    "Analytics",
];

fn prize_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"\$\d+(?:,\d{3})*(?:\.\d+)?(?:\s*(?:in|of|total))?(?:\s*(?:prizes?|rewards?))?",
            r"\d+(?:,\d{3})*\s*USD",
            r"\d+(?:,\d{3})*\s*dollars?",
        ]
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("prize pattern is valid")
        })
        .collect()
    })
}

fn theme_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        THEME_KEYWORDS
            .iter()
            .map(|kw| {
                let pattern = format!(r"\b{}\b", regex::escape(kw));
                let re = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("theme pattern is valid");
                (*kw, re)
            })
            .collect()
    })
}

/// First prize mention in a description ("$5,000 in prizes", "2000 USD")
pub fn extract_prize_text(description: &str) -> Option<String> {
    prize_patterns()
        .iter()
        .find_map(|re| re.find(description))
        .map(|m| m.as_str().trim().to_string())
}

/// Known themes mentioned in a description, in keyword-list order.
/// Matches whole words only, so "AI" does not fire on "maintain".
pub fn extract_themes(description: &str) -> Vec<String> {
    theme_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(description))
        .map(|(kw, _)| kw.to_string())
        .collect()
}
