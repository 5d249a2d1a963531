//! Access token pair
//!
//! Serializes to the token cache record format.

use super::Scope;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer tokens for both scopes
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokens {
    /// Token granted for the `read` scope
    #[serde(rename = "READ_ACCESS_TOKEN")]
    pub read: String,
    /// Token granted for the `write_set` scope
    #[serde(rename = "WRITE_ACCESS_TOKEN")]
    pub write: String,
}

impl AccessTokens {
    /// Create a new token pair
    pub fn new(read: impl Into<String>, write: impl Into<String>) -> Self {
        Self {
            read: read.into(),
            write: write.into(),
        }
    }

    /// Token for the given scope. Scopes never substitute for each other.
    pub fn token_for(&self, scope: Scope) -> &str {
        match scope {
            Scope::Read => &self.read,
            Scope::Write => &self.write,
        }
    }
}

impl fmt::Debug for AccessTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokens")
            .field("read", &"<redacted>")
            .field("write", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_for_scope() {
        let tokens = AccessTokens::new("r-token", "w-token");
        assert_eq!(tokens.token_for(Scope::Read), "r-token");
        assert_eq!(tokens.token_for(Scope::Write), "w-token");
    }

    #[test]
    fn test_cache_record_keys() {
        let tokens = AccessTokens::new("r", "w");
        let value = serde_json::to_value(&tokens).unwrap();
        assert_eq!(value["READ_ACCESS_TOKEN"], "r");
        assert_eq!(value["WRITE_ACCESS_TOKEN"], "w");
    }

    #[test]
    fn test_debug_hides_tokens() {
        let tokens = AccessTokens::new("secret-read", "secret-write");
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("secret-read"));
        assert!(!debug.contains("secret-write"));
    }
}
