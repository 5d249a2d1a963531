//! File-based token cache
//!
//! One JSON file per (client id, username) holding the read and write
//! access tokens. There is no freshness check: a stale or corrupted file
//! has to be deleted by hand.

use crate::{Result, config::Credentials, types::AccessTokens};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

/// File name of the cache record for one client/user pair
pub fn cache_file_name(client_id: &str, username: &str) -> String {
    format!("access_token_cache_{}_{}.json", client_id, username)
}

/// File-based token cache
///
/// ```rust
/// use quizlet_api_client::{AccessTokens, utils::TokenCache};
///
/// # tokio_test::block_on(async {
/// let dir = tempfile::tempdir()?;
/// let cache = TokenCache::new(dir.path().join("access_token_cache_abc_u.json"));
///
/// cache.save(&AccessTokens::new("R", "W")).await?;
/// assert_eq!(cache.load().await?, Some(AccessTokens::new("R", "W")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct TokenCache {
    /// Path to cache file
    cache_path: PathBuf,
}

impl TokenCache {
    /// Create a cache backed by an explicit file
    pub fn new(cache_path: PathBuf) -> Self {
        Self { cache_path }
    }

    /// Cache file for the given credentials inside `dir`
    pub fn for_credentials(dir: impl AsRef<Path>, credentials: &Credentials) -> Self {
        Self::new(
            dir.as_ref()
                .join(cache_file_name(&credentials.client_id, &credentials.username)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.cache_path
    }

    pub fn exists(&self) -> bool {
        self.cache_path.exists()
    }

    /// Load cached tokens, `None` if the file is absent
    pub async fn load(&self) -> Result<Option<AccessTokens>> {
        if !self.cache_path.exists() {
            debug!("Token cache does not exist: {:?}", self.cache_path);
            return Ok(None);
        }

        let content = fs::read_to_string(&self.cache_path).await.map_err(|e| {
            error!("Failed to read token cache {:?}: {}", self.cache_path, e);
            crate::Error::cache("file_read", &format!("Read failed: {}", e))
        })?;

        let tokens: AccessTokens = serde_json::from_str(&content).map_err(|e| {
            error!(
                "Token cache {:?} is malformed, delete it to re-authorize: {}",
                self.cache_path, e
            );
            crate::Error::cache("parse", &format!("Malformed cache file: {}", e))
        })?;

        debug!("Loaded tokens from: {:?}", self.cache_path);
        Ok(Some(tokens))
    }

    /// Save tokens to the cache file, creating its directory if needed
    pub async fn save(&self, tokens: &AccessTokens) -> Result<()> {
        let content = serde_json::to_string(tokens)?;

        if let Some(parent) = self.cache_path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent).await
        {
            error!("Failed to create cache directory {:?}: {}", parent, e);
            return Err(crate::Error::cache(
                "directory_creation",
                &format!("Directory creation failed: {}", e),
            ));
        }

        match fs::write(&self.cache_path, content).await {
            Ok(_) => {
                debug!("Tokens saved to: {:?}", self.cache_path);
                Ok(())
            }
            Err(e) => {
                error!("Failed to write token cache {:?}: {}", self.cache_path, e);
                Err(crate::Error::cache(
                    "file_write",
                    &format!("Write failed: {}", e),
                ))
            }
        }
    }
}
