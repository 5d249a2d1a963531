//! # Token Manager
//!
//! Owns the lifecycle of the read and write access tokens.
//!
//! ## States
//!
//! - **NoCache**: nothing held in memory, cache file not consulted yet or absent
//! - **Fetching**: running the authorize/exchange sequence
//! - **Cached**: tokens held in memory and persisted on disk
//!
//! A present cache file moves straight to `Cached` without any network or
//! browser traffic. There is no expiry tracking: a stale cache keeps being
//! served until someone deletes the file.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use quizlet_api_client::auth::{TokenManager, WebDriverCodeProvider};
//! use quizlet_api_client::config::{Credentials, Settings};
//!
//! # async fn example() -> quizlet_api_client::Result<()> {
//! let settings = Settings::default();
//! let credentials = Credentials::from_file(&settings.credentials.path)?;
//! let provider = WebDriverCodeProvider::new(credentials.clone(), settings.browser.clone());
//! let mut manager = TokenManager::new(&settings, credentials, settings.http_client()?, provider);
//!
//! let tokens = manager.access_tokens().await?;
//! # Ok(())
//! # }
//! ```

use super::{AuthorizationCodeProvider, AuthorizationRequest, TokenExchanger};
use crate::{
    Result,
    config::{Credentials, Settings},
    types::{AccessTokens, Scope},
    utils::TokenCache,
};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Token lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    NoCache,
    Fetching,
    Cached(AccessTokens),
}

/// Acquires, persists and serves the access tokens for one credential set
pub struct TokenManager<P: AuthorizationCodeProvider> {
    credentials: Credentials,
    authorize_url: String,
    provider: P,
    exchanger: TokenExchanger,
    cache: TokenCache,
    state: TokenState,
}

impl<P: AuthorizationCodeProvider> TokenManager<P> {
    /// Wire a manager from settings: token endpoint, authorize URL and cache directory
    pub fn new(settings: &Settings, credentials: Credentials, http: Client, provider: P) -> Self {
        let exchanger =
            TokenExchanger::new(http, settings.quizlet.token_url.clone(), credentials.clone());
        let cache = TokenCache::for_credentials(&settings.cache.dir, &credentials);

        Self::with_parts(
            credentials,
            settings.quizlet.authorize_url.clone(),
            provider,
            exchanger,
            cache,
        )
    }

    pub fn with_parts(
        credentials: Credentials,
        authorize_url: impl Into<String>,
        provider: P,
        exchanger: TokenExchanger,
        cache: TokenCache,
    ) -> Self {
        Self {
            credentials,
            authorize_url: authorize_url.into(),
            provider,
            exchanger,
            cache,
            state: TokenState::NoCache,
        }
    }

    pub fn state(&self) -> &TokenState {
        &self.state
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Return both access tokens, fetching and caching them on first use.
    ///
    /// Without a cache file this runs authorize(read), exchange(read),
    /// authorize(write), exchange(write) in that order and then writes the
    /// cache. On failure the state falls back to `NoCache` and nothing is
    /// written.
    pub async fn access_tokens(&mut self) -> Result<AccessTokens> {
        if let TokenState::Cached(tokens) = &self.state {
            return Ok(tokens.clone());
        }

        if let Some(tokens) = self.cache.load().await? {
            info!("Using cached access tokens from {:?}", self.cache.path());
            self.state = TokenState::Cached(tokens.clone());
            return Ok(tokens);
        }

        info!(
            "No token cache for client {} and user {}, starting authorization",
            self.credentials.client_id, self.credentials.username
        );
        self.state = TokenState::Fetching;

        match self.fetch_tokens().await {
            Ok(tokens) => {
                if let Err(e) = self.cache.save(&tokens).await {
                    self.state = TokenState::NoCache;
                    return Err(e);
                }
                info!("Access tokens cached at {:?}", self.cache.path());
                self.state = TokenState::Cached(tokens.clone());
                Ok(tokens)
            }
            Err(e) => {
                warn!("Token acquisition failed: {}", e);
                self.state = TokenState::NoCache;
                Err(e)
            }
        }
    }

    async fn fetch_tokens(&self) -> Result<AccessTokens> {
        let read = self.acquire(Scope::Read).await?;
        let write = self.acquire(Scope::Write).await?;
        Ok(AccessTokens::new(read, write))
    }

    async fn acquire(&self, scope: Scope) -> Result<String> {
        let request =
            AuthorizationRequest::new(&self.authorize_url, &self.credentials.client_id, scope)?;
        let code = self.provider.authorization_code(&request).await?;
        debug!("Obtained {} authorization code", scope);
        self.exchanger.exchange(scope, &code).await
    }
}
