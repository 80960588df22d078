pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ListingLoader;
pub use domain::repositories::RecordSource;
pub use domain::value_objects::{Endpoint, NormalizeContext};
pub use infrastructure::adapters::{
    normalize_competitions, normalize_courses, normalize_hackathons, normalize_internships,
    RawHackathon,
};
pub use infrastructure::sources::{BundledRecordSource, HttpRecordSource};
