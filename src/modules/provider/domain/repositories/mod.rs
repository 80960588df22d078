mod record_source_repo;

pub use record_source_repo::*;
