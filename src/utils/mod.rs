//! Utility functions and helpers
//!
//! This module contains utility functions used throughout the crate.

pub mod cache;
pub mod version;

pub use cache::{TokenCache, cache_file_name};
pub use version::{VERSION, get_version};
