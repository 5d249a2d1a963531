//! OAuth authorization-code flow
//!
//! Builds authorization requests, obtains codes through a pluggable
//! [`AuthorizationCodeProvider`] (a scripted browser or manual entry),
//! exchanges them for bearer tokens and caches the result on disk.

pub mod browser;
pub mod exchange;
pub mod manager;
pub mod manual;
pub mod provider;
pub mod request;

pub use browser::{BrowserLauncher, BrowserSession, WebDriverCodeProvider, WebDriverLauncher};
pub use exchange::TokenExchanger;
pub use manager::{TokenManager, TokenState};
pub use manual::ManualCodeProvider;
pub use provider::AuthorizationCodeProvider;
pub use request::AuthorizationRequest;
