/// Raw feed records built the way each provider actually sends them
use serde_json::{json, Map, Value};

/// Builder for one raw feed record. Only the fields that were set end up in
/// the JSON, so "missing field" cases stay easy to express.
#[derive(Debug, Clone, Default)]
pub struct RawRecordFactory {
    fields: Map<String, Value>,
}

impl RawRecordFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// LabLab.ai event card
    pub fn lablab(title: &str) -> Self {
        Self::new()
            .set("title", title)
            .set("link", format!("https://lablab.ai/event/{}", slug(title)))
            .set("status", "Register")
            .set("location", "Online")
    }

    /// Devpost hackathon tile
    pub fn devpost(title: &str) -> Self {
        Self::new()
            .set("title", title)
            .set("link", format!("https://{}.devpost.com/", slug(title)))
            .set("host", "Devpost")
            .set("days_left", "10 days left")
    }

    /// Indeed posting in the scraper's camelCase layout
    pub fn indeed(position: &str) -> Self {
        Self::new()
            .set("positionName", position)
            .set("company", "Acme")
            .set("url", format!("https://www.indeed.com/viewjob?jk={}", slug(position)))
    }

    pub fn course(title: &str) -> Self {
        Self::new()
            .set("title", title)
            .set("link", format!("https://courses.test/{}", slug(title)))
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

fn slug(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Two LabLab cards, deliberately out of title order
pub fn two_lablab_records() -> Vec<Value> {
    vec![
        RawRecordFactory::lablab("Zero Shot Sprint")
            .set("prize_amount", "$3,000 in prizes")
            .set("themes", "AI, NLP")
            .set("submission_period", "NOV 14 - 19")
            .build(),
        RawRecordFactory::lablab("Agents Weekend")
            .set("description", "Build with Robotics APIs. $1,000 for the winners.")
            .build(),
    ]
}

/// Three Devpost tiles, one of them mostly empty
pub fn three_devpost_records() -> Vec<Value> {
    vec![
        RawRecordFactory::devpost("Build for Good")
            .set("prize_amount", "$50,000 in prizes")
            .set("participants", 3120)
            .set("themes", json!(["Social Good"]))
            .build(),
        RawRecordFactory::devpost("climate data jam")
            .set("prize_amount", "$800")
            .set("participants", "145 participants")
            .set("days_left", "Upcoming")
            .build(),
        json!({"title": "Mystery Hack"}),
    ]
}
