use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::shared::utils::LogContext;

/// Main mapper trait for converting one feed's raw records into a canonical
/// listing. Mapping is total: every record produces a listing, with missing
/// fields replaced by the mapper's declared defaults.
pub trait ListingMapper {
    /// Raw record shape of the feed
    type Raw: DeserializeOwned + Default;
    /// Canonical listing produced
    type Output;

    /// Tag used in logs and synthesized ids
    fn source_tag(&self) -> &str;

    /// Map one raw record. `index` is the record's position in its feed.
    fn map_record(&self, raw: Self::Raw, index: usize, ctx: &NormalizeContext) -> Self::Output;

    /// Decode and map a whole feed, preserving order
    fn map_batch(&self, records: Vec<Value>, ctx: &NormalizeContext) -> Vec<Self::Output> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let raw = decode_record::<Self::Raw>(value, self.source_tag(), index);
                self.map_record(raw, index, ctx)
            })
            .collect()
    }
}

/// Decode a raw record. Field-level problems are absorbed by the lenient
/// deserializers; a record that is not an object at all decodes to the
/// all-defaults record so it is still counted rather than dropped.
pub fn decode_record<T>(value: Value, source_tag: &str, index: usize) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_value::<T>(value) {
        Ok(raw) => raw,
        Err(e) => {
            LogContext::error_with_context(
                &e,
                &format!("{} record #{} is malformed, using defaults", source_tag, index),
            );
            T::default()
        }
    }
}

/// Scrapers write placeholders such as "N/A" for missing values
pub fn clean_text(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.to_lowercase().as_str() {
        "n/a" | "na" | "none" | "null" | "-" => "",
        _ => trimmed,
    }
}

/// `text` when it carries a value, otherwise `default`
pub fn text_or(text: &str, default: &str) -> String {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        default.to_string()
    } else {
        cleaned.to_string()
    }
}
