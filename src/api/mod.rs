//! Quizlet REST API request layer
//!
//! Thin forwarders to the set, term and user endpoints. Bodies come back
//! raw; [`responses`] has helpers for the identifiers callers usually need.

pub mod client;
pub mod responses;
pub mod types;

pub use client::QuizletClient;
pub use responses::{new_set_id, new_term_id};
pub use types::{NewSet, Term};
