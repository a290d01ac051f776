//! Structured filter request types

use serde::{Deserialize, Deserializer};

/// The structured filter produced by translating a natural-language question
///
/// Supplied per request by the external translation service. The service is
/// asked for lists under every key but sometimes returns a bare scalar; any
/// scalar is coerced to a one-element list during deserialization. Missing
/// keys deserialize to empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuredFilter {
    #[serde(default, deserialize_with = "one_or_many")]
    pub years: Vec<i64>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub geography: Vec<String>,
    /// Metric names as free text, not yet resolved to canonical codes
    #[serde(default, deserialize_with = "one_or_many")]
    pub metrics: Vec<String>,
}

/// Accept either a bare value or a list of values
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}
