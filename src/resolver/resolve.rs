//! Metric phrase resolution
//!
//! Turns the free-text metric phrases of a structured filter into the
//! canonical category codes the dataset is keyed by.

use crate::metadata::MetadataIndex;
use crate::query::{ResolvedFilter, StructuredFilter};

use super::error::ResolveError;

/// Resolve a structured filter's metric phrases to canonical codes
///
/// Matches from all phrases are unioned and deduplicated. A filter whose
/// phrases collectively match nothing is rejected before any filtering is
/// attempted: an empty code set could only produce a misleading empty
/// result downstream.
pub fn resolve_filter(
    index: &MetadataIndex,
    filter: &StructuredFilter,
) -> Result<ResolvedFilter, ResolveError> {
    let mut codes: Vec<String> = Vec::new();
    for phrase in &filter.metrics {
        for code in resolve_phrase(index, phrase) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }

    if codes.is_empty() {
        return Err(ResolveError::UnresolvedMetrics(filter.metrics.clone()));
    }

    Ok(ResolvedFilter {
        years: filter.years.clone(),
        geography: filter.geography.clone(),
        metric_phrases: filter.metrics.clone(),
        metric_codes: codes,
    })
}

/// Codes whose display or alternate label contains the phrase
///
/// Case-insensitive substring containment, deliberately permissive: user
/// phrasing rarely matches canonical labels exactly, so recall is favored
/// over precision and short phrases may over-match. No edit distance, no
/// tokenization. The phrase is matched as written, surrounding whitespace
/// included, so a padded phrase only matches keys containing the padded
/// form. Empty and whitespace-only phrases match nothing. The result is
/// deduplicated and carries no ordering guarantee.
pub fn resolve_phrase(index: &MetadataIndex, phrase: &str) -> Vec<String> {
    if phrase.trim().is_empty() {
        return Vec::new();
    }
    let needle = phrase.to_lowercase();

    let mut codes: Vec<String> = Vec::new();
    for (text, code) in &index.text_to_code {
        if text.to_lowercase().contains(&needle) && !codes.contains(code) {
            codes.push(code.clone());
        }
    }
    codes
}
