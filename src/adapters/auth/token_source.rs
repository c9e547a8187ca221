//! Terminal renditions of the interactive token flow.
//!
//! - `LineTokenProvider` reads one line from any async reader; an empty
//!   line or end of input means the user cancelled
//! - `StaticTokenProvider` hands out a token obtained elsewhere

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::domain::auth::{IdentityToken, TokenGrant};
use crate::ports::{IdentityProvider, ProviderFailure};

/// Reads an identity token from a line-oriented source.
pub struct LineTokenProvider<R> {
    reader: Mutex<R>,
    prompt: Option<String>,
}

impl<R> LineTokenProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
            prompt: None,
        }
    }

    /// Prompt written to stderr before reading.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl LineTokenProvider<BufReader<Stdin>> {
    /// Reads the token from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
            .with_prompt("Paste identity token (empty to cancel): ")
    }
}

#[async_trait]
impl<R> IdentityProvider for LineTokenProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Terminal providers have no supporting services to check.
    async fn ensure_services_available(&self, _prompt_update: bool) -> Result<(), ProviderFailure> {
        Ok(())
    }

    async fn request_token(&self) -> Result<TokenGrant, ProviderFailure> {
        if let Some(prompt) = &self.prompt {
            let mut stderr = tokio::io::stderr();
            stderr
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| ProviderFailure::TokenRequest(e.to_string()))?;
            stderr
                .flush()
                .await
                .map_err(|e| ProviderFailure::TokenRequest(e.to_string()))?;
        }

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| ProviderFailure::TokenRequest(e.to_string()))?;

        let token = line.trim();
        if read == 0 || token.is_empty() {
            return Ok(TokenGrant::Cancelled);
        }
        Ok(TokenGrant::Issued(IdentityToken::new(token)))
    }
}

/// Hands out a pre-issued token, or cancels when none was supplied.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<IdentityToken>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(IdentityToken::new),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenProvider {
    /// Terminal providers have no supporting services to check.
    async fn ensure_services_available(&self, _prompt_update: bool) -> Result<(), ProviderFailure> {
        Ok(())
    }

    async fn request_token(&self) -> Result<TokenGrant, ProviderFailure> {
        Ok(match &self.token {
            Some(token) => TokenGrant::Issued(token.clone()),
            None => TokenGrant::Cancelled,
        })
    }
}
