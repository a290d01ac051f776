//! Resolved filter types

/// A structured filter whose metric phrases have been resolved to codes
///
/// Produced by the resolver; carrying both the original phrases and the
/// resolved codes lets the filter applier name the phrases the user actually
/// wrote when it reports a metric diagnostic.
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    pub years: Vec<i64>,
    pub geography: Vec<String>,
    /// The free-text phrases from the structured filter, unchanged
    pub metric_phrases: Vec<String>,
    /// Deduplicated canonical codes, unioned across all phrases
    pub metric_codes: Vec<String>,
}
