mod loader_service;

pub use loader_service::ListingLoader;
