mod endpoint;
mod normalize_context;

pub use endpoint::Endpoint;
pub use normalize_context::NormalizeContext;
