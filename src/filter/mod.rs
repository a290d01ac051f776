mod apply;
mod error;

pub use apply::apply_filter;
pub use error::FilterError;
