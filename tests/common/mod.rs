//! Shared test utilities for integration tests

use askframe::{parser, Dataset, MetadataIndex, Row};
use serde_json::Value;

/// Build the metadata index from the shared fixture document
pub fn load_index() -> MetadataIndex {
    let tree = parser::parse_metadata_file("test_data/title_iii_metadata.json")
        .unwrap_or_else(|e| panic!("Failed to load metadata fixture: {}", e));
    MetadataIndex::build(&tree)
}

/// A small long-format dataset covering two years, two states, two metrics
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec!["Value".to_string()],
        vec![
            Row::new(2019, "State A", "NET_ACCESS", vec![Value::from(70.1)]),
            Row::new(2019, "State A", "MEALS_HOME", vec![Value::from(1500)]),
            Row::new(2019, "State B", "NET_ACCESS", vec![Value::from(65.4)]),
            Row::new(2020, "State A", "NET_ACCESS", vec![Value::from(74.9)]),
            Row::new(2020, "State B", "NET_ACCESS", vec![Value::from(81.5)]),
            Row::new(2020, "State B", "MEALS_HOME", vec![Value::from(1900)]),
        ],
    )
}

/// A one-state dataset with one NET_ACCESS observation per year
pub fn tall_dataset(years: std::ops::Range<i64>) -> Dataset {
    let rows = years
        .map(|year| Row::new(year, "State A", "NET_ACCESS", vec![Value::from(year - 2000)]))
        .collect();
    Dataset::new(vec!["Value".to_string()], rows)
}
