//! Static app credentials
//!
//! Loaded once from a JSON file and passed by value to the components that
//! need them.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Quizlet developer app credentials and the account used for consent
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "CLIENT_ID")]
    pub client_id: String,
    #[serde(rename = "SECRET_KEY")]
    pub secret_key: String,
    #[serde(rename = "REDIRECT_URI")]
    pub redirect_uri: String,
    #[serde(rename = "USERNAME")]
    pub username: String,
    #[serde(rename = "PASSWORD")]
    pub password: String,
}

impl Credentials {
    /// Read credentials from a JSON file.
    ///
    /// A missing file is an I/O error; malformed JSON or a missing key is a
    /// JSON error. There are no defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading credentials from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let credentials = serde_json::from_str(&content)?;
        Ok(credentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("secret_key", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
