//! Authorization request construction and redirect validation

use crate::{Result, types::Scope};
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

/// One authorization-code request for a single scope
///
/// Each request carries a fresh random `state` value which the redirect
/// must echo back before its code is accepted.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    scope: Scope,
    state: String,
    url: Url,
}

impl AuthorizationRequest {
    /// Build a request with a newly generated state value
    pub fn new(authorize_url: &str, client_id: &str, scope: Scope) -> Result<Self> {
        let state = Uuid::new_v4().simple().to_string();
        Self::with_state(authorize_url, client_id, scope, state)
    }

    /// Build a request with a caller-supplied state value
    pub fn with_state(
        authorize_url: &str,
        client_id: &str,
        scope: Scope,
        state: impl Into<String>,
    ) -> Result<Self> {
        let state = state.into();
        let mut url = Url::parse(authorize_url)?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", client_id)
            .append_pair("scope", scope.as_query_value())
            .append_pair("state", &state);

        Ok(Self { scope, state, url })
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// URL the browser (or the operator) has to open
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Pull the authorization code out of the redirect URL.
    ///
    /// Rejects redirects that carry an `error` parameter, that lack the
    /// `state` parameter or echo a different one, and that have no code.
    pub fn extract_code(&self, redirect_url: &str) -> Result<String> {
        let redirect = Url::parse(redirect_url.trim())?;
        let params: HashMap<String, String> = redirect.query_pairs().into_owned().collect();

        if let Some(error) = params.get("error") {
            let description = params
                .get("error_description")
                .map(|d| format!(": {}", d))
                .unwrap_or_default();
            return Err(crate::Error::authorization(format!(
                "authorization server returned '{}'{}",
                error, description
            )));
        }

        match params.get("state") {
            Some(state) if *state == self.state => {}
            Some(_) => {
                return Err(crate::Error::authorization(
                    "state parameter does not match the request",
                ));
            }
            None => {
                return Err(crate::Error::authorization(
                    "redirect carries no state parameter",
                ));
            }
        }

        params
            .get("code")
            .filter(|code| !code.is_empty())
            .cloned()
            .ok_or_else(|| crate::Error::authorization("redirect carries no authorization code"))
    }
}
