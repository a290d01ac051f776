//! Metadata types (nouns)
//!
//! The hierarchical metadata document and the name index derived from it.

mod index;
mod node;

pub use index::MetadataIndex;
pub use node::{MetadataNode, MetadataObject};
