use chrono::{DateTime, NaiveDate, Utc};

/// Inputs to normalization that are not part of the raw record.
///
/// Countdown labels depend on the current date; pinning `now` here keeps
/// every mapper a pure function of (record, context).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeContext {
    pub now: DateTime<Utc>,
}

impl NormalizeContext {
    pub fn new() -> Self {
        Self { now: Utc::now() }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl Default for NormalizeContext {
    fn default() -> Self {
        Self::new()
    }
}
