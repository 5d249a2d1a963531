//! Manual authorization codes
//!
//! The operator opens the authorize URL in any browser and pastes the URL
//! Quizlet redirected to.

use super::{AuthorizationCodeProvider, AuthorizationRequest};
use crate::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

/// Provider that reads the redirect URL from a line-oriented input
pub struct ManualCodeProvider<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl ManualCodeProvider<BufReader<Stdin>> {
    /// Prompt on stderr and read from stdin
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> ManualCodeProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

#[async_trait::async_trait]
impl<R> AuthorizationCodeProvider for ManualCodeProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn authorization_code(&self, request: &AuthorizationRequest) -> Result<String> {
        eprintln!(
            "Open this URL, sign in and allow {} access:\n\n  {}\n\nThen paste the URL you were redirected to:",
            request.scope(),
            request.url()
        );

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Err(crate::Error::authorization("no redirect URL was entered"));
        }

        debug!("Received redirect URL for {} scope", request.scope());
        request.extract_code(line.trim())
    }
}
