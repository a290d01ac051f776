//! Pipeline error type and its wire payload

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ParseError;
use crate::filter::FilterError;
use crate::resolver::ResolveError;

/// Any client-facing failure of the query pipeline
///
/// All user-facing errors are values, never panics: malformed collaborator
/// output and empty results both land here and convert to a structured
/// payload for the presentation layer.
#[derive(Debug)]
pub enum QueryError {
    /// The translated filter text could not be parsed as JSON
    BadFilter(ParseError),
    /// No metric phrase matched any metadata label
    Resolve(ResolveError),
    /// The filter matched no rows
    Filter(FilterError),
}

/// Wire shape of a failed query
///
/// `context` carries the requested values implicated in the failure so the
/// presentation layer can render them without parsing the message.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "errorKind")]
    pub kind: &'static str,
    pub message: String,
    pub context: Value,
}

impl QueryError {
    /// Convert to the structured payload handed to the presentation layer
    pub fn to_payload(&self) -> ErrorPayload {
        let (kind, context) = match self {
            QueryError::BadFilter(_) => ("bad_filter", Value::Null),
            QueryError::Resolve(ResolveError::UnresolvedMetrics(phrases)) => {
                ("unresolved_metric", json!(phrases))
            }
            QueryError::Filter(FilterError::YearsNotFound(years)) => {
                ("empty_result_year", json!(years))
            }
            QueryError::Filter(FilterError::GeographiesNotFound(geographies)) => {
                ("empty_result_geography", json!(geographies))
            }
            QueryError::Filter(FilterError::MetricsNotFound(metrics)) => {
                ("empty_result_metric", json!(metrics))
            }
            QueryError::Filter(FilterError::CombinationNotFound) => {
                ("empty_result_combination", Value::Null)
            }
        };
        ErrorPayload {
            kind,
            message: self.to_string(),
            context,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::BadFilter(err) => {
                write!(f, "Could not parse filter from translation response: {}", err)
            }
            QueryError::Resolve(err) => err.fmt(f),
            QueryError::Filter(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::BadFilter(err) => Some(err),
            QueryError::Resolve(err) => Some(err),
            QueryError::Filter(err) => Some(err),
        }
    }
}

impl From<ParseError> for QueryError {
    fn from(err: ParseError) -> Self {
        QueryError::BadFilter(err)
    }
}

impl From<ResolveError> for QueryError {
    fn from(err: ResolveError) -> Self {
        QueryError::Resolve(err)
    }
}

impl From<FilterError> for QueryError {
    fn from(err: FilterError) -> Self {
        QueryError::Filter(err)
    }
}
