use serde::Deserialize;

use crate::shared::utils::lenient::{optional_string, string_or_default};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCourse {
    #[serde(default, deserialize_with = "optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, alias = "url", deserialize_with = "string_or_default")]
    pub link: String,
    /// Partner institution; Udemy rows usually carry none
    #[serde(default, deserialize_with = "string_or_default")]
    pub provider: String,
}
