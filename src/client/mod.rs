//! Query client for the remote word-matching service

mod error;
mod query;

pub use error::QueryError;
pub use query::{DEFAULT_API_URL, PLACEHOLDER_WORD, QueryClient, query_params};
