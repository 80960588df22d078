use std::sync::Arc;

use crate::modules::query::domain::{
    evaluate, filter_options, stats, ListingStats, Query, Queryable, SortKey,
};
use crate::shared::utils::{LogContext, TimedOperation};

/// Filter key addressing the search text
pub const SEARCH_KEY: &str = "search";
/// Filter key addressing the sort order
pub const SORT_KEY: &str = "sort";

/// Owns one category's query and its current result.
///
/// The collection is an immutable snapshot; loading a new batch swaps the
/// whole snapshot. Every mutation re-runs the evaluator before returning.
#[derive(Debug, Clone)]
pub struct QueryController<L: Queryable> {
    collection: Arc<Vec<L>>,
    query: Query,
    results: Vec<L>,
}

impl<L: Queryable> QueryController<L> {
    pub fn new(collection: Arc<Vec<L>>) -> Self {
        let mut controller = Self {
            collection,
            query: Self::default_query(),
            results: Vec::new(),
        };
        controller.recompute();
        controller
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(Vec::new()))
    }

    fn default_query() -> Query {
        Query::new(L::default_sort())
    }

    /// Replaces one key. `search` and `sort` address the search text and the
    /// sort order; an unknown sort value is logged and ignored.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        match key {
            SEARCH_KEY => self.query.search_text = value.to_string(),
            SORT_KEY => match value.parse::<SortKey>() {
                Ok(sort_key) => self.query.sort_key = sort_key,
                Err(e) => {
                    log::warn!("{}: ignoring sort '{}': {}", L::CATEGORY, value, e);
                    return;
                }
            },
            _ => {
                if L::filter_def(key).is_none() {
                    log::debug!("{}: '{}' is not a filter for this category", L::CATEGORY, key);
                }
                self.query.set_filter(key, value);
            }
        }
        self.recompute();
    }

    pub fn set_search(&mut self, text: &str) {
        self.set_filter(SEARCH_KEY, text);
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.query.sort_key = sort_key;
        self.recompute();
    }

    /// Back to no search, no filters and the category's default order
    pub fn clear(&mut self) {
        self.query = Self::default_query();
        self.recompute();
    }

    /// Swap in a freshly loaded collection, keeping the current query
    pub fn replace_collection(&mut self, collection: Arc<Vec<L>>) {
        self.collection = collection;
        self.recompute();
    }

    fn recompute(&mut self) {
        let timer = TimedOperation::new(&format!("evaluate {}", L::CATEGORY));
        self.results = evaluate(&self.collection, &self.query);
        timer.finish();

        LogContext::query(
            L::CATEGORY.as_str(),
            &self.query.search_text,
            self.collection.len(),
            self.results.len(),
        );
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The sort order actually applied
    pub fn effective_sort(&self) -> SortKey {
        L::resolve_sort(self.query.sort_key)
    }

    pub fn results(&self) -> &[L] {
        &self.results
    }

    pub fn collection(&self) -> &Arc<Vec<L>> {
        &self.collection
    }

    pub fn filter_options(&self, key: &str) -> Vec<String> {
        filter_options(&self.collection, key)
    }

    pub fn stats(&self) -> ListingStats {
        stats(&self.collection, &self.results)
    }
}

impl<L: Queryable> Default for QueryController<L> {
    fn default() -> Self {
        Self::empty()
    }
}
