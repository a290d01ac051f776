//! Dataset types (nouns)
//!
//! The indicator dataset in long format, as handed to the engine by the
//! loading layer.

mod rows;

pub use rows::{Dataset, Row, KEY_COLUMNS};
