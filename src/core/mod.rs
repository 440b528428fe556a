//! Core domain types for the assistant form
//!
//! Pure types with no I/O: the three constraint fields and their sanitizers.

mod constraints;

pub use constraints::{
    Constraints, Field, PLACEHOLDER, sanitize_exclude, sanitize_pattern_or_include,
};
