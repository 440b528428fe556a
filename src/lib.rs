//! Wordle Assist
//!
//! A form for Wordle constraints that asks a remote word-matching service
//! for candidate words. The form state round-trips through route paths such
//! as `/_O___/B__R_/AD`.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Constraints;
//! use wordle_assist::route::{constraints_from_path, constraints_path};
//!
//! let constraints = Constraints::new("_o___", "b__r_", "ad");
//! let path = constraints_path(&constraints);
//! assert_eq!(path, "/_O___/B__R_/AD");
//! assert_eq!(constraints_from_path(&path).unwrap(), constraints);
//! ```

// Core domain types
pub mod core;

// Route encoding and history
pub mod route;

// Word service client
pub mod client;

// Form state and request lifecycle
pub mod session;

// Configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
