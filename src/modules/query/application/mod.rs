pub mod controller;
pub mod view;

pub use controller::{QueryController, SEARCH_KEY, SORT_KEY};
pub use view::{CategoryView, ListingBoard, LoadCategory, LoadOutcome};
