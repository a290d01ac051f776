//! Presentation table (noun module)

use serde::Serialize;
use serde_json::Value;

/// Hard cap on rows rendered for display and for the summarization prompt
pub const HEAD_LIMIT: usize = 10;

/// An ordered, presentation-ready table
///
/// Either the wide projection (one row per Year×Geography) or the long
/// fallback; the shape is decided by the projector, consumers only see
/// columns and rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Table { columns, rows }
    }

    /// A copy keeping only the first `limit` rows
    pub fn head(&self, limit: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
        }
    }

    /// Pipe-delimited text rendering, for embedding in a summarization prompt
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format!("| {} |", self.columns.join(" | ")));
        lines.push(format!(
            "| {} |",
            self.columns.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
        ));
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        lines.join("\n")
    }
}

/// Render a cell without JSON quoting; null cells render empty
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
