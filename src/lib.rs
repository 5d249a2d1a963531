//! Quizlet API Client
//!
//! A client for the Quizlet 2.0 REST API that obtains its OAuth tokens by
//! scripting the Quizlet login and consent pages.
//!
//! # Features
//!
//! - **Browser-driven authorization**: logs in and grants consent through a
//!   WebDriver session to obtain authorization codes
//! - **Pluggable code providers**: swap the browser for manual redirect entry
//! - **Token caching**: read and write tokens persisted per client and user
//! - **Set and term operations**: create, read, edit and delete, returning raw bodies
//!
//! # Architecture
//!
//! - [`auth`]: authorization requests, code providers, token exchange, [`TokenManager`]
//! - [`api`]: the [`QuizletClient`] request layer
//! - [`config`]: [`Settings`] and [`Credentials`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use quizlet_api_client::{
//!     Credentials, QuizletClient, Settings, TokenManager, auth::WebDriverCodeProvider,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let credentials = Credentials::from_file(&settings.credentials.path)?;
//! let http = settings.http_client()?;
//!
//! let provider = WebDriverCodeProvider::new(credentials.clone(), settings.browser.clone());
//! let mut manager = TokenManager::new(&settings, credentials, http.clone(), provider);
//! let tokens = manager.access_tokens().await?;
//!
//! let client = QuizletClient::new(http, &settings.quizlet.api_base_url, tokens);
//! println!("{}", client.set_terms(415).await?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use api::QuizletClient;
pub use auth::{AuthorizationCodeProvider, TokenManager};
pub use config::{ConfigLoader, Credentials, Settings};
pub use error::{Error, Result};
pub use types::{AccessTokens, Scope};
