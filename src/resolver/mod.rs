mod error;
mod resolve;

pub use error::ResolveError;
pub use resolve::{resolve_filter, resolve_phrase};
