pub mod adapters;
pub mod sources;
