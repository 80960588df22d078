use super::filter::{Bucket, FilterDef, FilterKind, Metric};
use super::listing::Queryable;
use super::query::Query;
use super::sort_key::SortKey;

enum ActiveFilter<'q> {
    Categorical { key: &'q str, value: &'q str },
    Range { metric: Metric, bucket: &'static Bucket },
}

/// Runs a query over a collection: search, categorical filters, range
/// filters, then one stable sort. The collection is left untouched.
///
/// Filter keys the category does not declare and unknown bucket names are
/// ignored.
pub fn evaluate<L: Queryable>(collection: &[L], query: &Query) -> Vec<L> {
    let needle = query.search_needle();
    let (categorical, ranges): (Vec<_>, Vec<_>) = active_filters::<L>(query)
        .into_iter()
        .partition(|f| matches!(f, ActiveFilter::Categorical { .. }));

    let mut results: Vec<L> = collection
        .iter()
        .filter(|listing| needle.as_deref().map_or(true, |n| matches_search(*listing, n)))
        .filter(|listing| categorical.iter().all(|f| matches_filter(*listing, f)))
        .filter(|listing| ranges.iter().all(|f| matches_filter(*listing, f)))
        .cloned()
        .collect();

    sort_listings(&mut results, L::resolve_sort(query.sort_key));
    results
}

fn active_filters<L: Queryable>(query: &Query) -> Vec<ActiveFilter<'_>> {
    query
        .active_filters()
        .filter_map(|(key, value)| {
            let def: &FilterDef = L::filter_def(key)?;
            match def.kind {
                FilterKind::Categorical => Some(ActiveFilter::Categorical { key, value }),
                FilterKind::Range { metric, .. } => def
                    .bucket(value)
                    .map(|bucket| ActiveFilter::Range { metric, bucket }),
            }
        })
        .collect()
}

/// `needle` must already be lowercased
pub fn matches_search<L: Queryable>(listing: &L, needle: &str) -> bool {
    std::iter::once(listing.title())
        .chain(listing.search_fields())
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filter<L: Queryable>(listing: &L, filter: &ActiveFilter<'_>) -> bool {
    match filter {
        ActiveFilter::Categorical { key, value } => listing
            .field(key)
            .map_or(false, |field| field.matches(value)),
        ActiveFilter::Range { metric, bucket } => {
            bucket.contains(listing.metric(*metric).unwrap_or(0.0))
        }
    }
}

/// Stable in every ordering; ties keep their incoming order
pub fn sort_listings<L: Queryable>(listings: &mut [L], sort_key: SortKey) {
    match sort_key {
        SortKey::TitleAsc => listings.sort_by_cached_key(|l| title_key(l.title())),
        SortKey::NewestFirst => listings.sort_by_key(|l| std::cmp::Reverse(l.posted_or_epoch())),
        key => {
            if let Some(metric) = key.metric() {
                listings.sort_by(|a, b| {
                    let a = a.metric(metric).unwrap_or(0.0);
                    let b = b.metric(metric).unwrap_or(0.0);
                    b.total_cmp(&a)
                });
            }
        }
    }
}

/// Title ordering key: accents folded onto their base letter first, so
/// "Éclair" sorts among the E titles; the lowercase title breaks ties.
fn title_key(title: &str) -> (String, String) {
    let lower = title.to_lowercase();
    let mut folded = String::with_capacity(lower.len());
    for c in lower.chars() {
        match fold_accent(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }
    (folded, lower)
}

/// Base letters for lowercase Latin-1 and Latin Extended-A accented letters
fn fold_accent(c: char) -> Option<&'static str> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(base)
}
