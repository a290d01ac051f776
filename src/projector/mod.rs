mod project;

pub use project::{long_table, project};
