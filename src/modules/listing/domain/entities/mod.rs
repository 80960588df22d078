pub mod competition;
pub mod course;
pub mod hackathon;
pub mod internship;

pub use competition::Competition;
pub use course::Course;
pub use hackathon::Hackathon;
pub use internship::Internship;
