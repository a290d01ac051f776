mod error;
mod run;

pub use error::{ErrorPayload, QueryError};
pub use run::{run_query, run_query_raw, QueryOutput};
