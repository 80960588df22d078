use serde::Deserialize;

use crate::shared::utils::lenient::{
    float_or_zero, optional_string, string_list, string_or_default,
};

/// Indeed job posting as exported by the scraping actor (camelCase keys)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInternship {
    #[serde(default, deserialize_with = "optional_string")]
    pub id: Option<String>,
    #[serde(default, alias = "title", deserialize_with = "string_or_default")]
    pub position_name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub company: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub location: String,
    /// "$18 - $22 an hour"
    #[serde(default, deserialize_with = "string_or_default")]
    pub salary: String,
    /// Array, single string or missing
    #[serde(default, deserialize_with = "string_list")]
    pub job_type: Vec<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub posting_date_parsed: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "float_or_zero")]
    pub rating: f64,
    #[serde(
        default,
        alias = "link",
        alias = "externalApplyLink",
        deserialize_with = "string_or_default"
    )]
    pub url: String,
}
