use serde::Serialize;
use std::collections::BTreeMap;

use super::sort_key::SortKey;

/// Filter value meaning "no restriction"
pub const ALL: &str = "all";

/// Search text, filter selections and sort order for one category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    pub search_text: String,
    /// Filter key -> selected value (category value or bucket name)
    pub filters: BTreeMap<String, String>,
    pub sort_key: SortKey,
}

impl Query {
    pub fn new(sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(key, value);
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Replaces one filter; an inactive value removes it
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if is_active(&value) {
            self.filters.insert(key, value.trim().to_string());
        } else {
            self.filters.remove(&key);
        }
    }

    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .filter(|(_, v)| is_active(v))
    }

    /// Lowercased search needle, `None` when search is inactive
    pub fn search_needle(&self) -> Option<String> {
        let needle = self.search_text.trim();
        (!needle.is_empty()).then(|| needle.to_lowercase())
    }
}

pub fn is_active(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case(ALL)
}
