//! Quizlet REST client
//!
//! Each operation sends exactly one request with the bearer token of the
//! scope it needs and hands back the unparsed body. Response status is not
//! checked; only transport failures become errors.

use super::types::{NewSet, Term, term_fields};
use crate::{
    Result,
    types::{AccessTokens, Scope},
};
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// Client for the set, term and user endpoints
#[derive(Debug, Clone)]
pub struct QuizletClient {
    http: Client,
    base_url: String,
    tokens: AccessTokens,
}

impl QuizletClient {
    /// `base_url` is the API root, e.g. `https://api.quizlet.com/2.0`
    pub fn new(http: Client, base_url: impl Into<String>, tokens: AccessTokens) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, scope: Scope) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(self.tokens.token_for(scope))
            .header(CACHE_CONTROL, "no-cache")
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        debug!(
            "{} answered {}",
            response.url().path(),
            response.status()
        );
        Ok(response.text().await?)
    }

    /// `POST /sets`. Quizlet needs at least two terms, so fewer are rejected locally.
    pub async fn create_set(&self, set: &NewSet) -> Result<String> {
        if set.terms.len() < 2 {
            return Err(crate::Error::validation(
                "terms",
                "a new set needs at least two terms",
            ));
        }

        let builder = self
            .request(Method::POST, "/sets", Scope::Write)
            .form(&set.form_fields());
        self.send(builder).await
    }

    /// `GET /sets/{id}/terms`
    pub async fn set_terms(&self, set_id: u64) -> Result<String> {
        let builder = self.request(Method::GET, &format!("/sets/{}/terms", set_id), Scope::Read);
        self.send(builder).await
    }

    /// `GET /sets/{id}`, including all terms
    pub async fn set_details(&self, set_id: u64) -> Result<String> {
        let builder = self.request(Method::GET, &format!("/sets/{}", set_id), Scope::Read);
        self.send(builder).await
    }

    /// `POST /sets/{id}/terms`
    pub async fn add_term(&self, set_id: u64, term: &Term) -> Result<String> {
        let builder = self
            .request(Method::POST, &format!("/sets/{}/terms", set_id), Scope::Write)
            .form(&[
                ("term", term.term.as_str()),
                ("definition", term.definition.as_str()),
            ]);
        self.send(builder).await
    }

    /// `PUT /sets/{id}/terms/{term_id}`
    pub async fn edit_term(&self, set_id: u64, term_id: u64, term: &Term) -> Result<String> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/sets/{}/terms/{}", set_id, term_id),
                Scope::Write,
            )
            .form(&[
                ("term", term.term.as_str()),
                ("definition", term.definition.as_str()),
            ]);
        self.send(builder).await
    }

    /// `DELETE /sets/{id}/terms/{term_id}`
    pub async fn delete_term(&self, set_id: u64, term_id: u64) -> Result<String> {
        let builder = self.request(
            Method::DELETE,
            &format!("/sets/{}/terms/{}", set_id, term_id),
            Scope::Write,
        );
        self.send(builder).await
    }

    /// `PUT /sets/{id}`. Posting terms replaces every term of the set.
    pub async fn edit_set(&self, set_id: u64, title: &str, terms: &[Term]) -> Result<String> {
        let mut fields = vec![("title", title)];
        fields.extend(term_fields(terms));

        let builder = self
            .request(Method::PUT, &format!("/sets/{}", set_id), Scope::Write)
            .form(&fields);
        self.send(builder).await
    }

    /// `GET /users/{username}` with minimal set, class and favorite info
    pub async fn user_details(&self, username: &str) -> Result<String> {
        let builder = self.request(Method::GET, &format!("/users/{}", username), Scope::Read);
        self.send(builder).await
    }

    /// `DELETE /sets/{id}`
    pub async fn delete_set(&self, set_id: u64) -> Result<String> {
        let builder = self.request(Method::DELETE, &format!("/sets/{}", set_id), Scope::Write);
        self.send(builder).await
    }
}
