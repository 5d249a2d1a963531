//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use quizlet_api_client::{
    AccessTokens, Credentials, Result,
    auth::{AuthorizationCodeProvider, AuthorizationRequest, BrowserLauncher, BrowserSession},
    config::settings::BrowserSettings,
    utils::cache_file_name,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Test data factory
pub struct MockData;

impl MockData {
    /// Credentials with short, predictable values
    pub fn credentials() -> Credentials {
        Credentials {
            client_id: "abc".to_string(),
            secret_key: "xyz".to_string(),
            redirect_uri: "https://x".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
        }
    }

    pub fn credentials_json() -> serde_json::Value {
        serde_json::json!({
            "CLIENT_ID": "abc",
            "SECRET_KEY": "xyz",
            "REDIRECT_URI": "https://x",
            "USERNAME": "u",
            "PASSWORD": "p"
        })
    }

    pub fn tokens() -> AccessTokens {
        AccessTokens::new("read-token", "write-token")
    }

    /// Browser settings with no settle delay and short waits
    pub fn browser_settings() -> BrowserSettings {
        BrowserSettings {
            field_timeout_secs: 1,
            consent_timeout_secs: 1,
            settle_delay_secs: 0,
            ..BrowserSettings::default()
        }
    }
}

/// File fixtures on disk
pub struct Fixtures;

impl Fixtures {
    pub fn write_credentials(dir: &Path) -> PathBuf {
        let path = dir.join("private_creds.json");
        std::fs::write(&path, MockData::credentials_json().to_string()).unwrap();
        path
    }

    /// Pre-populate the token cache for the [`MockData::credentials`] account
    pub fn write_cache(dir: &Path, tokens: &AccessTokens) -> PathBuf {
        let path = dir.join(cache_file_name("abc", "u"));
        std::fs::write(&path, serde_json::to_string(tokens).unwrap()).unwrap();
        path
    }

    /// Config file pointing every endpoint at `base`
    pub fn write_config(dir: &Path, base: &str) -> PathBuf {
        let path = dir.join("config.toml");
        let content = format!(
            r#"
[quizlet]
authorize_url = "{base}/authorize"
token_url = "{base}/oauth/token"
api_base_url = "{base}/2.0"
"#
        );
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// What the scripted browser does
#[derive(Debug, Clone)]
pub enum BrowserScript {
    /// Land on the redirect URI with `code` and the request's own state
    Grant(&'static str),
    /// Land on the redirect URI with `code` and a foreign state
    ForeignState(&'static str),
    /// Time out waiting for the selector
    TimeoutOn(&'static str),
}

/// Launcher handing out [`ScriptedSession`]s that log every step
#[derive(Debug, Clone)]
pub struct ScriptedLauncher {
    pub script: BrowserScript,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn new(script: BrowserScript) -> Self {
        Self {
            script,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn steps(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BrowserLauncher for ScriptedLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
        self.log.lock().unwrap().push("launch".to_string());
        Ok(Box::new(ScriptedSession {
            script: self.script.clone(),
            log: Arc::clone(&self.log),
            state: String::new(),
        }))
    }
}

pub struct ScriptedSession {
    script: BrowserScript,
    log: Arc<Mutex<Vec<String>>>,
    state: String,
}

impl ScriptedSession {
    fn record(&self, step: String) {
        self.log.lock().unwrap().push(step);
    }

    fn check_timeout(&self, selector: &str, timeout: Duration) -> Result<()> {
        match &self.script {
            BrowserScript::TimeoutOn(s) if *s == selector => Err(
                quizlet_api_client::Error::timeout(format!("wait for {}", selector), timeout.as_secs()),
            ),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl BrowserSession for ScriptedSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        let url = Url::parse(url)?;
        self.state = url
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        self.record(format!("goto {}", url.path()));
        Ok(())
    }

    async fn fill(&mut self, selector: &str, text: &str, timeout: Duration) -> Result<()> {
        self.check_timeout(selector, timeout)?;
        self.record(format!("fill {} {}", selector, text));
        Ok(())
    }

    async fn click(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        self.check_timeout(selector, timeout)?;
        self.record(format!("click {}", selector));
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        self.record("current_url".to_string());
        Ok(match &self.script {
            BrowserScript::Grant(code) => format!("https://x/?code={}&state={}", code, self.state),
            BrowserScript::ForeignState(code) => format!("https://x/?code={}&state=other", code),
            BrowserScript::TimeoutOn(_) => "https://quizlet.com/authorize".to_string(),
        })
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.record("close".to_string());
        Ok(())
    }
}

/// Provider answering every request with `{scope}-code`, recording the scopes asked for
#[derive(Debug, Clone, Default)]
pub struct EchoProvider {
    pub scopes: Arc<Mutex<Vec<String>>>,
}

impl EchoProvider {
    pub fn requested(&self) -> Vec<String> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AuthorizationCodeProvider for EchoProvider {
    async fn authorization_code(&self, request: &AuthorizationRequest) -> Result<String> {
        self.scopes.lock().unwrap().push(request.scope().to_string());
        Ok(format!("{}-code", request.scope()))
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
