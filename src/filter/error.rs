use std::fmt;

/// Empty-result diagnostics, from most to least specific
///
/// Exactly one of these is produced when a filter matches no rows; the
/// applier checks dimensions in the declared order and reports the first
/// one with no overlap against the dataset at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// None of the requested years appear in the dataset
    YearsNotFound(Vec<i64>),
    /// None of the requested geographies appear in the dataset
    GeographiesNotFound(Vec<String>),
    /// None of the resolved codes appear in the dataset; carries the
    /// original free-text phrases, which are what the user recognizes
    MetricsNotFound(Vec<String>),
    /// Every dimension overlaps individually, but no row satisfies all three
    CombinationNotFound,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::YearsNotFound(years) => {
                write!(f, "No data found for the selected year(s): {:?}", years)
            }
            FilterError::GeographiesNotFound(geographies) => {
                write!(f, "No data found for the selected geography/geographies: {:?}", geographies)
            }
            FilterError::MetricsNotFound(metrics) => {
                write!(f, "No data found for the selected metric(s): {:?}", metrics)
            }
            FilterError::CombinationNotFound => {
                write!(f, "No data found for your query with the selected combination of filters")
            }
        }
    }
}

impl std::error::Error for FilterError {}
