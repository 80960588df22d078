pub mod mapper;
pub mod models;

pub use mapper::*;
pub use models::*;
