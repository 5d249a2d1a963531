//! Browser-driven authorization codes
//!
//! Scripts the Quizlet login and consent pages through a WebDriver server.
//! The page structure is a third-party UI contract, so every selector and
//! timeout comes from [`BrowserSettings`].

use super::{AuthorizationCodeProvider, AuthorizationRequest};
use crate::{
    Result,
    config::{Credentials, settings::BrowserSettings},
    error::format_error_for_logging,
};
use fantoccini::{ClientBuilder, Locator, elements::Element, error::CmdError};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// A live browser session
#[async_trait::async_trait]
pub trait BrowserSession: Send {
    /// Navigate to `url`
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Wait up to `timeout` for `selector`, then type `text` into it
    async fn fill(&mut self, selector: &str, text: &str, timeout: Duration) -> Result<()>;

    /// Wait up to `timeout` for `selector`, then click it
    async fn click(&mut self, selector: &str, timeout: Duration) -> Result<()>;

    /// URL of the current page
    async fn current_url(&mut self) -> Result<String>;

    /// End the session and release the browser
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Opens browser sessions
#[async_trait::async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>>;
}

/// Launcher connecting to a WebDriver server (chromedriver, geckodriver, selenium)
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
    webdriver_url: String,
    headless: bool,
}

impl WebDriverLauncher {
    pub fn new(settings: &BrowserSettings) -> Self {
        Self {
            webdriver_url: settings.webdriver_url.clone(),
            headless: settings.headless,
        }
    }

    /// Session capabilities understood by both Chrome and Firefox drivers
    pub fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
        let args: Vec<&str> = if self.headless {
            vec!["--headless"]
        } else {
            Vec::new()
        };

        let mut caps = serde_json::Map::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
        caps
    }
}

#[async_trait::async_trait]
impl BrowserLauncher for WebDriverLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
        debug!("Connecting to WebDriver at {}", self.webdriver_url);

        let mut builder = ClientBuilder::native();
        builder.capabilities(self.capabilities());
        let client = builder
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| crate::Error::browser("launch".to_string(), e.to_string()))?;

        Ok(Box::new(WebDriverSession { client }))
    }
}

/// Session backed by a fantoccini client
pub struct WebDriverSession {
    client: fantoccini::Client,
}

impl WebDriverSession {
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<Element> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .map_err(|e| match e {
                CmdError::WaitTimeout => {
                    crate::Error::timeout(format!("wait for {}", selector), timeout.as_secs())
                }
                other => crate::Error::browser(format!("find {}", selector), other.to_string()),
            })
    }
}

#[async_trait::async_trait]
impl BrowserSession for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .map_err(|e| crate::Error::browser("navigate".to_string(), e.to_string()))
    }

    async fn fill(&mut self, selector: &str, text: &str, timeout: Duration) -> Result<()> {
        let element = self.wait_for(selector, timeout).await?;
        element
            .send_keys(text)
            .await
            .map_err(|e| crate::Error::browser(format!("type into {}", selector), e.to_string()))
    }

    async fn click(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        let element = self.wait_for(selector, timeout).await?;
        element
            .click()
            .await
            .map_err(|e| crate::Error::browser(format!("click {}", selector), e.to_string()))?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        let url = self
            .client
            .current_url()
            .await
            .map_err(|e| crate::Error::browser("current_url".to_string(), e.to_string()))?;
        Ok(url.to_string())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|e| crate::Error::browser("close".to_string(), e.to_string()))
    }
}

/// Provider that logs in and grants consent in a scripted browser
///
/// Automation failures never propagate: they are logged and reported as an
/// empty code. The session is closed on every path once it was opened.
pub struct WebDriverCodeProvider<L: BrowserLauncher = WebDriverLauncher> {
    launcher: L,
    credentials: Credentials,
    settings: BrowserSettings,
}

impl WebDriverCodeProvider<WebDriverLauncher> {
    pub fn new(credentials: Credentials, settings: BrowserSettings) -> Self {
        let launcher = WebDriverLauncher::new(&settings);
        Self::with_launcher(launcher, credentials, settings)
    }
}

impl<L: BrowserLauncher> WebDriverCodeProvider<L> {
    pub fn with_launcher(launcher: L, credentials: Credentials, settings: BrowserSettings) -> Self {
        Self {
            launcher,
            credentials,
            settings,
        }
    }

    async fn run_consent_flow(
        &self,
        session: &mut dyn BrowserSession,
        request: &AuthorizationRequest,
    ) -> Result<String> {
        let field_timeout = self.settings.field_timeout();

        session.goto(request.url().as_str()).await?;
        session
            .fill(
                &self.settings.username_selector,
                &self.credentials.username,
                field_timeout,
            )
            .await?;
        session
            .fill(
                &self.settings.password_selector,
                &self.credentials.password,
                field_timeout,
            )
            .await?;
        session
            .click(&self.settings.login_selector, field_timeout)
            .await?;
        session
            .click(
                &self.settings.allow_selector,
                self.settings.consent_timeout(),
            )
            .await?;

        tokio::time::sleep(self.settings.settle_delay()).await;

        let redirect_url = session.current_url().await?;
        debug!("Consent redirected to {}", redirect_url);
        request.extract_code(&redirect_url)
    }
}

#[async_trait::async_trait]
impl<L: BrowserLauncher> AuthorizationCodeProvider for WebDriverCodeProvider<L> {
    async fn authorization_code(&self, request: &AuthorizationRequest) -> Result<String> {
        info!(
            "Requesting {} authorization code through the browser",
            request.scope()
        );

        let mut session = self.launcher.launch().await?;
        let outcome = self.run_consent_flow(session.as_mut(), request).await;

        if let Err(e) = session.close().await {
            warn!("Failed to close browser session: {}", e);
        }

        match outcome {
            Ok(code) => Ok(code),
            Err(e) => {
                error!(
                    details = %format_error_for_logging(&e),
                    "{} authorization in the browser failed",
                    request.scope()
                );
                Ok(String::new())
            }
        }
    }
}
