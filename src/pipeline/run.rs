//! Query pipeline (verb module)
//!
//! Runs the fixed resolve → filter → project sequence. The dataset and the
//! metadata index are built once by the embedding process and passed in by
//! reference; the pipeline holds no state of its own, so identical inputs
//! always produce identical output.

use crate::dataset::Dataset;
use crate::filter::apply_filter;
use crate::metadata::MetadataIndex;
use crate::parser;
use crate::projector::{long_table, project};
use crate::query::StructuredFilter;
use crate::resolver::resolve_filter;
use crate::table::{Table, HEAD_LIMIT};

use super::error::QueryError;

/// Result of a successful query
#[derive(Debug)]
pub struct QueryOutput {
    /// Presentation table: wide where possible, long otherwise, capped at
    /// `HEAD_LIMIT` rows
    pub table: Table,
    /// Text rendering of the first filtered rows (long format), for the
    /// summarization collaborator to embed in its prompt
    pub summary_input: String,
}

/// Answer a structured filter against the dataset
pub fn run_query(
    dataset: &Dataset,
    index: &MetadataIndex,
    filter: &StructuredFilter,
) -> Result<QueryOutput, QueryError> {
    let resolved = resolve_filter(index, filter)?;
    let rows = apply_filter(dataset, &resolved)?;

    let summary_input = long_table(dataset, &rows).head(HEAD_LIMIT).to_text();
    let table = project(dataset, &rows, index).head(HEAD_LIMIT);

    Ok(QueryOutput {
        table,
        summary_input,
    })
}

/// Answer a query from the translation service's raw response text
///
/// Parses the (possibly code-fenced) JSON filter first; a response that
/// cannot be parsed fails the request, since there is nothing to filter by.
pub fn run_query_raw(
    dataset: &Dataset,
    index: &MetadataIndex,
    raw_filter: &str,
) -> Result<QueryOutput, QueryError> {
    let filter = parser::parse_filter(raw_filter)?;
    run_query(dataset, index, &filter)
}
