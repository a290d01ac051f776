//! Integration tests for wide projection through the pipeline

mod common;

use askframe::{run_query, Dataset, Row, StructuredFilter};
use common::{load_index, sample_dataset};
use serde_json::Value;

fn filter(years: Vec<i64>, geography: Vec<&str>, metrics: Vec<&str>) -> StructuredFilter {
    StructuredFilter {
        years,
        geography: geography.iter().map(|g| g.to_string()).collect(),
        metrics: metrics.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn test_one_wide_row_per_year_geography_pair() {
    let dataset = sample_dataset();
    let index = load_index();
    let request = filter(
        vec![2019, 2020],
        vec!["State A", "State B"],
        vec!["internet access"],
    );

    let output = run_query(&dataset, &index, &request).expect("Pipeline should succeed");

    // Four (year, state) pairs have NET_ACCESS observations
    assert_eq!(output.table.rows.len(), 4);
    assert_eq!(
        output.table.columns,
        vec!["Year", "Geography", "Internet Access (%)"]
    );
}

#[test]
fn test_sparse_combinations_leave_null_cells() {
    let dataset = sample_dataset();
    let index = load_index();
    let request = filter(
        vec![2019, 2020],
        vec!["State A", "State B"],
        vec!["internet access", "home-delivered"],
    );

    let output = run_query(&dataset, &index, &request).expect("Pipeline should succeed");

    // (2019, State B) has internet data but no meals data
    let row = output
        .table
        .rows
        .iter()
        .find(|r| r[0] == Value::from(2019) && r[1] == Value::from("State B"))
        .expect("Expected a (2019, State B) row");
    let meals_col = output
        .table
        .columns
        .iter()
        .position(|c| c == "Home-Delivered Meals")
        .expect("Expected a meals column");
    assert_eq!(row[meals_col], Value::Null);
}

#[test]
fn test_ragged_dataset_falls_back_to_long_format() {
    // Second measure cell missing on one row: the value column is ambiguous
    let dataset = Dataset::new(
        vec!["Unit".to_string(), "Value".to_string()],
        vec![
            Row::new(2020, "State A", "NET_ACCESS", vec![Value::from("%"), Value::from(74.9)]),
            Row::new(2020, "State B", "NET_ACCESS", vec![Value::from(81.5)]),
        ],
    );
    let index = load_index();
    let request = filter(vec![2020], vec!["State A", "State B"], vec!["internet access"]);

    let output = run_query(&dataset, &index, &request).expect("Pipeline should succeed");

    // Long shape with the dataset's own column names, codes unrelabeled
    assert_eq!(
        output.table.columns,
        vec!["Year", "Geography", "Category", "Unit", "Value"]
    );
    assert_eq!(output.table.rows.len(), 2);
    assert_eq!(output.table.rows[0][2], Value::from("NET_ACCESS"));
}
