pub mod domain;

// Re-exports for easy external access
pub use domain::entities::{Competition, Course, Hackathon, Internship};
pub use domain::value_objects::{
    Category, CompetitionSource, CourseSource, EventStatus, HackathonSource, InternshipSource,
    ListingId,
};
