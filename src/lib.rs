//! askframe - Resolve structured filters into presentation tables
//!
//! This library is the core of a question-answering backend over a fixed
//! statistical indicator dataset (one row per Year, Geography, Category).
//! An external translation service turns the user's question into a
//! structured filter; this crate does the rest:
//! - Metadata indexing (canonical code ↔ display label mappings)
//! - Metric phrase resolution (free text → canonical category codes)
//! - Dataset filtering with graded empty-result diagnostics
//! - Long-to-wide projection with display relabeling and a safe fallback
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `metadata/` - hierarchical metadata tree and the derived MetadataIndex
//! - `dataset/` - the indicator dataset (Dataset, Row)
//! - `query/` - filter types (StructuredFilter, ResolvedFilter)
//! - `table/` - presentation table (Table)
//!
//! **Verb modules** (transformations):
//! - `parser/` - JSON text → MetadataNode / StructuredFilter
//! - `resolver/` - MetadataIndex + phrases → canonical codes
//! - `filter/` - Dataset + ResolvedFilter → matching rows
//! - `projector/` - long rows → wide Table (fallback: long Table)
//! - `pipeline/` - the fixed resolve → filter → project sequence
//!
//! # Example
//!
//! ```ignore
//! use askframe::{parser, run_query, MetadataIndex};
//!
//! let tree = parser::parse_metadata_file("metadata_filter_tree.json")?;
//! let index = MetadataIndex::build(&tree);
//! let filter = parser::parse_filter(llm_response)?;
//! let output = run_query(&dataset, &index, &filter)?;
//! println!("{}", output.summary_input);
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod metadata;
pub mod parser;
pub mod pipeline;
pub mod projector;
pub mod query;
pub mod resolver;
pub mod table;

// Re-export commonly used types
pub use dataset::{Dataset, Row};
pub use error::ParseError;
pub use filter::{apply_filter, FilterError};
pub use metadata::{MetadataIndex, MetadataNode, MetadataObject};
pub use pipeline::{run_query, run_query_raw, ErrorPayload, QueryError, QueryOutput};
pub use projector::{long_table, project};
pub use query::{ResolvedFilter, StructuredFilter};
pub use resolver::{resolve_filter, resolve_phrase, ResolveError};
pub use table::{Table, HEAD_LIMIT};
