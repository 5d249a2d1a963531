//! Command-line interface logic
//!
//! Subcommand implementations behind the `quizlet` binary.

pub mod api;
pub mod auth;
pub mod context;
pub mod walkthrough;

pub use context::{CliContext, GlobalArgs};
