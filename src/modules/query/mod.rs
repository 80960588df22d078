pub mod application;
pub mod domain;

pub use application::{CategoryView, ListingBoard, LoadCategory, LoadOutcome, QueryController};
pub use domain::{evaluate, ListingStats, Query, Queryable, SortKey};
