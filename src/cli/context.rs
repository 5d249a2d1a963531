//! Shared CLI setup
//!
//! Resolves settings and credentials, installs logging and builds the
//! token manager and API client that every subcommand uses.

use crate::{
    api::QuizletClient,
    auth::{AuthorizationCodeProvider, ManualCodeProvider, TokenManager, WebDriverCodeProvider},
    config::{ConfigLoader, Credentials, Settings},
    types::AccessTokens,
};
use anyhow::{Context, Result};
use clap::Args;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Flags accepted by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Credentials JSON file (CLIENT_ID, SECRET_KEY, REDIRECT_URI, USERNAME, PASSWORD)
    #[arg(long, global = true, value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Directory for the access token cache
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Paste the redirect URL by hand instead of scripting a browser
    #[arg(long, global = true)]
    pub manual: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Resolve settings: CLI flags > environment > config file > defaults
pub fn resolve_settings(args: &GlobalArgs) -> Result<Settings> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = ConfigLoader::new()
        .load(config_path.as_deref())
        .context("failed to load configuration")?;

    if let Some(path) = &args.credentials {
        settings.credentials.path = path.clone();
    }
    if let Some(dir) = &args.cache_dir {
        settings.cache.dir = dir.clone();
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    Ok(settings)
}

/// Install the tracing subscriber on stderr
///
/// Precedence: --verbose, then RUST_LOG, then the configured level.
pub fn init_logging(settings: &Settings) {
    let env_filter = if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Everything a subcommand needs to talk to Quizlet
#[derive(Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub credentials: Credentials,
    pub http: Client,
    manual: bool,
}

impl CliContext {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let settings = resolve_settings(args)?;
        init_logging(&settings);
        debug!("Resolved settings: {:?}", settings);

        let credentials = Credentials::from_file(&settings.credentials.path).with_context(|| {
            format!(
                "failed to load credentials from {}",
                settings.credentials.path.display()
            )
        })?;
        let http = settings.http_client()?;

        Ok(Self {
            settings,
            credentials,
            http,
            manual: args.manual,
        })
    }

    /// Cached tokens, or a fresh authorization through the selected provider
    pub async fn access_tokens(&self) -> Result<(AccessTokens, PathBuf)> {
        if self.manual {
            self.access_tokens_with(ManualCodeProvider::stdin()).await
        } else {
            let provider =
                WebDriverCodeProvider::new(self.credentials.clone(), self.settings.browser.clone());
            self.access_tokens_with(provider).await
        }
    }

    async fn access_tokens_with<P: AuthorizationCodeProvider>(
        &self,
        provider: P,
    ) -> Result<(AccessTokens, PathBuf)> {
        let mut manager = TokenManager::new(
            &self.settings,
            self.credentials.clone(),
            self.http.clone(),
            provider,
        );
        let tokens = manager
            .access_tokens()
            .await
            .context("failed to obtain access tokens")?;
        Ok((tokens, manager.cache().path().to_path_buf()))
    }

    pub async fn client(&self) -> Result<QuizletClient> {
        let (tokens, cache_path) = self.access_tokens().await?;
        info!("Using access tokens from {}", cache_path.display());
        Ok(QuizletClient::new(
            self.http.clone(),
            self.settings.quizlet.api_base_url.clone(),
            tokens,
        ))
    }
}
