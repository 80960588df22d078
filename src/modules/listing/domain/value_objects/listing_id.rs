use std::collections::HashSet;
use uuid::Uuid;

/// Identifier rules for canonical listings
pub struct ListingId;

impl ListingId {
    /// Picks the feed's own id when present, otherwise derives a stable id
    /// from the link, then the title, then the position in the batch.
    ///
    /// Derived ids are UUIDv5 so the same record gets the same id on every
    /// fetch.
    pub fn resolve(
        source_tag: &str,
        source_id: Option<&str>,
        link: &str,
        title: &str,
        index: usize,
    ) -> String {
        if let Some(id) = source_id.map(str::trim).filter(|id| !id.is_empty()) {
            return format!("{}-{}", source_tag, id);
        }

        let key = if !link.trim().is_empty() {
            format!("{}:link:{}", source_tag, link.trim())
        } else if !title.trim().is_empty() {
            format!("{}:title:{}", source_tag, title.trim().to_lowercase())
        } else {
            format!("{}:index:{}", source_tag, index)
        };

        Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes()).to_string()
    }

    /// Makes ids unique in place. The first occurrence keeps its id; later
    /// duplicates get `-2`, `-3`, ... appended.
    pub fn make_unique<'a, I>(ids: I) -> usize
    where
        I: IntoIterator<Item = &'a mut String>,
    {
        let mut seen = HashSet::new();
        let mut renamed = 0;

        for id in ids {
            if seen.insert(id.clone()) {
                continue;
            }

            let mut n = 2;
            let mut candidate = format!("{}-{}", id, n);
            while seen.contains(&candidate) {
                n += 1;
                candidate = format!("{}-{}", id, n);
            }

            log::debug!("Duplicate listing id '{}' renamed to '{}'", id, candidate);
            seen.insert(candidate.clone());
            *id = candidate;
            renamed += 1;
        }

        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_preferred() {
        let id = ListingId::resolve("lablab", Some("42"), "https://x", "T", 0);
        assert_eq!(id, "lablab-42");
    }

    #[test]
    fn test_synthesized_id_is_stable() {
        let a = ListingId::resolve("devpost", None, "https://a.devpost.com", "A", 0);
        let b = ListingId::resolve("devpost", Some("  "), "https://a.devpost.com", "B", 9);
        assert_eq!(a, b);
        assert!(!a.is_empty());

        let c = ListingId::resolve("devpost", None, "", "Some Title", 0);
        let d = ListingId::resolve("devpost", None, "", "some title", 3);
        assert_eq!(c, d);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_record_falls_back_to_index() {
        let a = ListingId::resolve("udemy", None, "", "", 0);
        let b = ListingId::resolve("udemy", None, "", "", 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_make_unique_keeps_first_seen() {
        let mut ids = vec![
            "x".to_string(),
            "y".to_string(),
            "x".to_string(),
            "x-2".to_string(),
            "x".to_string(),
        ];
        let renamed = ListingId::make_unique(ids.iter_mut());
        assert_eq!(ids, vec!["x", "y", "x-2", "x-2-2", "x-3"]);
        assert_eq!(renamed, 3);
    }
}
