use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::filter::FilterKind;
use super::listing::Queryable;

/// Distinct values a filter can take over `collection`, sorted
/// case-insensitively. Range filters list their bucket names in order.
pub fn filter_options<L: Queryable>(collection: &[L], key: &str) -> Vec<String> {
    let Some(def) = L::filter_def(key) else {
        return Vec::new();
    };

    if let FilterKind::Range { buckets, .. } = def.kind {
        if collection.is_empty() {
            return Vec::new();
        }
        return buckets.iter().map(|b| b.name.to_string()).collect();
    }

    distinct_values(collection, key)
}

/// First spelling wins among values that differ only by case
fn distinct_values<L: Queryable>(collection: &[L], key: &str) -> Vec<String> {
    let mut values: BTreeMap<String, &str> = BTreeMap::new();
    for value in collection
        .iter()
        .filter_map(|listing| listing.field(key))
        .flat_map(|field| field.values())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        values.entry(value.to_lowercase()).or_insert(value);
    }

    values.into_values().map(str::to_string).collect()
}

/// Summary counters shown above a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub total: usize,
    pub results: usize,
    /// Distinct companies, hosts or providers across the collection
    pub distinct: usize,
}

pub fn stats<L: Queryable>(collection: &[L], results: &[L]) -> ListingStats {
    let distinct = collection
        .iter()
        .filter_map(|listing| listing.field(L::stat_field()))
        .flat_map(|field| field.values())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .len();

    ListingStats {
        total: collection.len(),
        results: results.len(),
        distinct,
    }
}
