pub mod competitions;
pub mod courses;
pub mod devpost;
pub mod hackathon;
pub mod internships;
pub mod lablab;
pub mod mapper;
pub mod normalize;

pub use hackathon::RawHackathon;
pub use mapper::ListingMapper;
pub use normalize::{
    normalize_competitions, normalize_courses, normalize_hackathons, normalize_internships,
};
