//! Authorization code provider seam

use super::AuthorizationRequest;
use crate::Result;

/// Source of OAuth authorization codes
///
/// The token manager only depends on this trait, so the browser-driven
/// implementation can be swapped for manual entry (or a test double)
/// without touching token or cache logic.
///
/// An empty string means the provider failed to obtain a code; the token
/// exchange rejects it.
#[async_trait::async_trait]
pub trait AuthorizationCodeProvider: Send + Sync {
    /// Obtain a single-use code for `request.scope()`
    async fn authorization_code(&self, request: &AuthorizationRequest) -> Result<String>;
}
