mod category;
mod event_status;
mod listing_id;
mod listing_source;

pub use category::Category;
pub use event_status::EventStatus;
pub use listing_id::ListingId;
pub use listing_source::{CompetitionSource, CourseSource, HackathonSource, InternshipSource};
