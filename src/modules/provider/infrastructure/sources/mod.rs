mod bundled_source;
mod http_source;

pub use bundled_source::BundledRecordSource;
pub use http_source::HttpRecordSource;
