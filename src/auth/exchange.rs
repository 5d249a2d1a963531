//! Authorization code → access token exchange

use crate::{Result, config::Credentials, types::Scope};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL};
use reqwest::{Client, Request};
use tracing::{debug, error};

/// Posts authorization-code grants to the token endpoint
#[derive(Debug, Clone)]
pub struct TokenExchanger {
    http: Client,
    token_url: String,
    credentials: Credentials,
}

impl TokenExchanger {
    pub fn new(http: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            credentials,
        }
    }

    /// `Basic base64(client_id:secret)`
    pub fn basic_auth_value(&self) -> String {
        let pair = format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.secret_key
        );
        format!("Basic {}", STANDARD.encode(pair))
    }

    /// Build the grant request for `code`. Identical inputs give identical requests.
    pub fn build_request(&self, code: &str) -> Result<Request> {
        let request = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth_value())
            .header("redirect_uri", &self.credentials.redirect_uri)
            .header(CACHE_CONTROL, "no-cache")
            .form(&[("grant_type", "authorization_code"), ("code", code)])
            .build()?;
        Ok(request)
    }

    /// Exchange `code` for the `access_token` of `scope`.
    ///
    /// An empty code is rejected without contacting the endpoint. The
    /// response status is not inspected; a body without `access_token` is
    /// an error.
    pub async fn exchange(&self, scope: Scope, code: &str) -> Result<String> {
        if code.is_empty() {
            return Err(crate::Error::token_exchange(format!(
                "no {} authorization code to exchange",
                scope
            )));
        }

        debug!("Exchanging {} authorization code at {}", scope, self.token_url);
        let request = self.build_request(code)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        let payload: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!("Token endpoint returned a non-JSON body ({})", status);
            crate::Error::token_exchange(format!("invalid JSON from token endpoint: {}", e))
        })?;

        match payload.get("access_token").and_then(|t| t.as_str()) {
            Some(token) => Ok(token.to_string()),
            None => {
                let detail = payload
                    .get("error_description")
                    .or_else(|| payload.get("error"))
                    .and_then(|d| d.as_str())
                    .unwrap_or("no detail");
                error!("Token endpoint answered {} without an access token", status);
                Err(crate::Error::token_exchange(format!(
                    "response has no access_token ({}: {})",
                    status, detail
                )))
            }
        }
    }
}
