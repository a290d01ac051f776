//! Query filter types (nouns)

mod request;
mod resolved;

pub use request::StructuredFilter;
pub use resolved::ResolvedFilter;
