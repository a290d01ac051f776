//! Dataset and row types

use serde_json::Value;

/// The three key columns every row carries, in long-format column order
pub const KEY_COLUMNS: [&str; 3] = ["Year", "Geography", "Category"];

/// The indicator dataset, long format: one row per observation
///
/// Loaded once at process start and shared read-only across requests;
/// nothing in this crate mutates it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Names of the measure columns, in order; the last one holds the
    /// display value the projector pivots on
    pub measure_columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// A single observation: the three keys plus the measure cells
#[derive(Debug, Clone)]
pub struct Row {
    pub year: i64,
    pub geography: String,
    pub category: String,
    /// Measure cells, matching `Dataset::measure_columns` positionally
    pub values: Vec<Value>,
}

impl Dataset {
    pub fn new(measure_columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset {
            measure_columns,
            rows,
        }
    }

    /// Long-format column headers: the key columns followed by the measures
    pub fn columns(&self) -> Vec<String> {
        KEY_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.measure_columns.iter().cloned())
            .collect()
    }
}

impl Row {
    pub fn new(
        year: i64,
        geography: impl Into<String>,
        category: impl Into<String>,
        values: Vec<Value>,
    ) -> Self {
        Row {
            year,
            geography: geography.into(),
            category: category.into(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_format_columns() {
        let dataset = Dataset::new(
            vec!["Unit".to_string(), "Value".to_string()],
            vec![Row::new(2020, "State A", "NET_ACCESS", vec![Value::from("%"), Value::from(81.5)])],
        );

        assert_eq!(
            dataset.columns(),
            vec!["Year", "Geography", "Category", "Unit", "Value"]
        );
    }
}
