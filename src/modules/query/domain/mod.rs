pub mod evaluator;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod query;
pub mod sort_key;

pub use evaluator::{evaluate, sort_listings};
pub use facets::{filter_options, stats, ListingStats};
pub use filter::{Bucket, FieldValue, FilterDef, FilterKind, Metric, PRIZE_BUCKETS, SALARY_BUCKETS};
pub use listing::Queryable;
pub use query::{Query, ALL};
pub use sort_key::SortKey;
