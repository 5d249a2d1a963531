//! Type definitions shared by the auth and API layers

pub mod scope;
pub mod tokens;

pub use scope::Scope;
pub use tokens::AccessTokens;
