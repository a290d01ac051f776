use std::fmt;

/// Errors that can occur during metric resolution
#[derive(Debug)]
pub enum ResolveError {
    /// No phrase in the filter matched any metadata label
    UnresolvedMetrics(Vec<String>),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvedMetrics(phrases) => {
                write!(f, "No matching metrics found in metadata for {:?}", phrases)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
