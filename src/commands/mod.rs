//! Command implementations

pub mod find;
pub mod simple;

pub use find::{FindError, FindInput, FindResult, find_words};
pub use simple::run_simple;
