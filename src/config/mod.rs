//! Configuration management
//!
//! This module handles loading settings and the static app credentials.

pub mod credentials;
pub mod loader;
pub mod settings;

pub use credentials::Credentials;
pub use loader::ConfigLoader;
pub use settings::Settings;
