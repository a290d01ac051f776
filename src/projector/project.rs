//! Long-to-wide projection
//!
//! Reshapes filtered long rows (one row per Year, Geography, Category) into
//! a wide presentation table (one row per Year×Geography, one column per
//! category). Projection never fails: when reshaping is infeasible the
//! untouched long table is returned instead.

use serde_json::Value;

use crate::dataset::{Dataset, Row, KEY_COLUMNS};
use crate::metadata::MetadataIndex;
use crate::table::Table;

/// Project filtered rows into a wide table, falling back to long format
///
/// The wide shape keeps first-encounter order for both the (Year, Geography)
/// row keys and the category columns. Category columns are renamed to their
/// display labels where the index knows them; key columns keep their names.
pub fn project(dataset: &Dataset, rows: &[&Row], index: &MetadataIndex) -> Table {
    match reshape(dataset, rows) {
        Some(wide) => relabel(wide, index),
        None => long_table(dataset, rows),
    }
}

/// The filtered rows as a long table with the dataset's own column names
///
/// This is both the projection fallback and the shape handed to the
/// summarization prompt.
pub fn long_table(dataset: &Dataset, rows: &[&Row]) -> Table {
    let out_rows = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                Value::from(row.year),
                Value::from(row.geography.as_str()),
                Value::from(row.category.as_str()),
            ];
            cells.extend(row.values.iter().cloned());
            cells
        })
        .collect();
    Table::new(dataset.columns(), out_rows)
}

/// Pivot to one row per (Year, Geography) with one column per category
///
/// The cell value is the last measure column. Duplicate (Year, Geography,
/// Category) triples keep the first-encountered value; an arbitrary but
/// deterministic tie-break for a fixed input order, not an error. Returns
/// None when the value column cannot be identified: no measure columns at
/// all, or rows whose cell count disagrees with the declared measures.
fn reshape(dataset: &Dataset, rows: &[&Row]) -> Option<Table> {
    if dataset.measure_columns.is_empty() {
        return None;
    }
    let value_index = dataset.measure_columns.len() - 1;
    if rows.iter().any(|r| r.values.len() != dataset.measure_columns.len()) {
        return None;
    }

    let mut keys: Vec<(i64, &str)> = Vec::new();
    let mut categories: Vec<&str> = Vec::new();
    for row in rows {
        let key = (row.year, row.geography.as_str());
        if !keys.contains(&key) {
            keys.push(key);
        }
        if !categories.contains(&row.category.as_str()) {
            categories.push(row.category.as_str());
        }
    }

    let mut cells: Vec<Vec<Option<Value>>> = vec![vec![None; categories.len()]; keys.len()];
    for row in rows {
        let Some(r) = keys.iter().position(|k| *k == (row.year, row.geography.as_str())) else {
            continue;
        };
        let Some(c) = categories.iter().position(|c| *c == row.category.as_str()) else {
            continue;
        };
        if cells[r][c].is_none() {
            cells[r][c] = Some(row.values[value_index].clone());
        }
    }

    let columns = [KEY_COLUMNS[0], KEY_COLUMNS[1]]
        .iter()
        .map(|c| c.to_string())
        .chain(categories.iter().map(|c| c.to_string()))
        .collect();
    let out_rows = keys
        .iter()
        .zip(cells)
        .map(|((year, geography), row_cells)| {
            let mut out = vec![Value::from(*year), Value::from(*geography)];
            out.extend(row_cells.into_iter().map(|c| c.unwrap_or(Value::Null)));
            out
        })
        .collect();

    Some(Table::new(columns, out_rows))
}

/// Rename category columns to display labels where the index knows them
fn relabel(table: Table, index: &MetadataIndex) -> Table {
    let columns = table
        .columns
        .iter()
        .map(|col| match index.label_for(col) {
            Some(label) => label.to_string(),
            None => col.clone(),
        })
        .collect();
    Table::new(columns, table.rows)
}
