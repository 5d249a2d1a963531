//! Configuration settings
//!
//! Settings are read from a TOML file, overridden by environment variables
//! and finally by command-line flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// Helper functions for serde defaults
fn default_authorize_url() -> String {
    "https://quizlet.com/authorize".to_string()
}

fn default_token_url() -> String {
    "https://api.quizlet.com/oauth/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.quizlet.com/2.0".to_string()
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("data").join("private_creds.json")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_true() -> bool {
    true
}

fn default_field_timeout() -> u64 {
    10
}

fn default_consent_timeout() -> u64 {
    30
}

fn default_settle_delay() -> u64 {
    5
}

fn default_username_selector() -> String {
    "input[name=username]".to_string()
}

fn default_password_selector() -> String {
    "input[name=password]".to_string()
}

fn default_login_selector() -> String {
    "form > button".to_string()
}

fn default_allow_selector() -> String {
    "button[name=allow]".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("quizlet-api-client/{}", crate::utils::VERSION)
}

fn default_log_level() -> String {
    "info".to_string()
}

// Duration serialization module
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Quizlet endpoint configuration
    #[serde(default)]
    pub quizlet: QuizletSettings,
    /// Credential file location
    #[serde(default)]
    pub credentials: CredentialSettings,
    /// Token cache configuration
    #[serde(default)]
    pub cache: CacheSettings,
    /// Browser automation configuration
    #[serde(default)]
    pub browser: BrowserSettings,
    /// HTTP client configuration
    #[serde(default)]
    pub network: NetworkSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Quizlet OAuth and REST endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizletSettings {
    /// Browser-rendered authorization page
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    /// OAuth token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// REST API base, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialSettings {
    /// Path of the JSON credentials file
    #[serde(default = "default_credentials_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Directory holding `access_token_cache_*.json` files
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

/// WebDriver session and login page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// WebDriver server (chromedriver, geckodriver, selenium)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Run the browser without a visible window
    #[serde(default = "default_true")]
    pub headless: bool,
    /// Wait for login form elements, in seconds
    #[serde(default = "default_field_timeout")]
    pub field_timeout_secs: u64,
    /// Wait for the consent button, in seconds
    #[serde(default = "default_consent_timeout")]
    pub consent_timeout_secs: u64,
    /// Pause after consent before reading the redirect URL, in seconds
    #[serde(default = "default_settle_delay")]
    pub settle_delay_secs: u64,
    #[serde(default = "default_username_selector")]
    pub username_selector: String,
    #[serde(default = "default_password_selector")]
    pub password_selector: String,
    #[serde(default = "default_login_selector")]
    pub login_selector: String,
    #[serde(default = "default_allow_selector")]
    pub allow_selector: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Request timeout
    #[serde(with = "duration_secs", default = "default_request_timeout")]
    pub request_timeout: Duration,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for QuizletSettings {
    fn default() -> Self {
        Self {
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            path: default_credentials_path(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_true(),
            field_timeout_secs: default_field_timeout(),
            consent_timeout_secs: default_consent_timeout(),
            settle_delay_secs: default_settle_delay(),
            username_selector: default_username_selector(),
            password_selector: default_password_selector(),
            login_selector: default_login_selector(),
            allow_selector: default_allow_selector(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl BrowserSettings {
    pub fn field_timeout(&self) -> Duration {
        Duration::from_secs(self.field_timeout_secs)
    }

    pub fn consent_timeout(&self) -> Duration {
        Duration::from_secs(self.consent_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Apply environment variable overrides; unset variables leave values untouched
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(path) = std::env::var("QUIZLET_CREDENTIALS") {
            self.credentials.path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("QUIZLET_CACHE_DIR") {
            self.cache.dir = PathBuf::from(dir);
        }

        if let Ok(url) = std::env::var("QUIZLET_WEBDRIVER_URL") {
            self.browser.webdriver_url = url;
        }

        if let Ok(url) = std::env::var("QUIZLET_API_BASE_URL") {
            self.quizlet.api_base_url = url;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            self.logging.verbose = verbose.parse().map_err(|e| {
                crate::Error::config("VERBOSE", &format!("Invalid boolean: {}", e))
            })?;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("quizlet.authorize_url", &self.quizlet.authorize_url),
            ("quizlet.token_url", &self.quizlet.token_url),
            ("quizlet.api_base_url", &self.quizlet.api_base_url),
            ("browser.webdriver_url", &self.browser.webdriver_url),
        ] {
            if let Err(e) = url::Url::parse(value) {
                return Err(crate::Error::config(
                    name,
                    &format!("Invalid URL '{}': {}", value, e),
                ));
            }
        }

        if self.browser.field_timeout_secs == 0 {
            return Err(crate::Error::config(
                "browser.field_timeout_secs",
                "Invalid timeout: cannot be 0",
            ));
        }

        if self.browser.consent_timeout_secs == 0 {
            return Err(crate::Error::config(
                "browser.consent_timeout_secs",
                "Invalid timeout: cannot be 0",
            ));
        }

        if self.network.request_timeout.is_zero() {
            return Err(crate::Error::config(
                "network.request_timeout",
                "Invalid timeout: cannot be 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "logging.level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        Ok(())
    }

    /// Build the shared HTTP client for the token exchange and API calls
    pub fn http_client(&self) -> crate::Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(self.network.user_agent.clone())
            .timeout(self.network.request_timeout)
            .build()?;
        Ok(client)
    }
}
