//! Dataset filtering with graded empty-result diagnostics

use crate::dataset::{Dataset, Row};
use crate::query::ResolvedFilter;

use super::error::FilterError;

/// Rows matching the filter on all three dimensions
///
/// A row matches when its Year, Geography and Category are each members of
/// the corresponding filter list. An empty result is never returned as-is:
/// it is diagnosed into the most specific responsible dimension.
pub fn apply_filter<'a>(
    dataset: &'a Dataset,
    filter: &ResolvedFilter,
) -> Result<Vec<&'a Row>, FilterError> {
    let matched: Vec<&Row> = dataset
        .rows
        .iter()
        .filter(|row| {
            filter.years.contains(&row.year)
                && filter.geography.iter().any(|g| g == &row.geography)
                && filter.metric_codes.iter().any(|c| c == &row.category)
        })
        .collect();

    if matched.is_empty() {
        return Err(diagnose(dataset, filter));
    }
    Ok(matched)
}

/// Name the dimension responsible for an empty result
///
/// Each check runs against the full dataset's values, not the partially
/// filtered ones, in fixed order: years, then geography, then metrics. Year
/// mismatches are the most common user error, so they are reported first
/// even when later dimensions would also come up empty. Only when every
/// dimension overlaps individually is the residual combination case
/// reported.
fn diagnose(dataset: &Dataset, filter: &ResolvedFilter) -> FilterError {
    if !dataset.rows.iter().any(|r| filter.years.contains(&r.year)) {
        return FilterError::YearsNotFound(filter.years.clone());
    }
    if !dataset
        .rows
        .iter()
        .any(|r| filter.geography.iter().any(|g| g == &r.geography))
    {
        return FilterError::GeographiesNotFound(filter.geography.clone());
    }
    if !dataset
        .rows
        .iter()
        .any(|r| filter.metric_codes.iter().any(|c| c == &r.category))
    {
        return FilterError::MetricsNotFound(filter.metric_phrases.clone());
    }
    FilterError::CombinationNotFound
}
