pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    error::{AppError, Result},
    models::Prompt,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: Prompt,
    pub temperature: f32,
    pub max_tokens: u64,
}

/// Transport or service failure reported by a completion client.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CompletionError(pub String);

/// Single round trip to a text-generation service.
///
/// `Ok(None)` means the service answered without any content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<Option<String>, CompletionError>;
}

/// Completion capability resolved once at startup.
pub enum CompletionBackend<C> {
    Ready(C),
    Unconfigured,
}

impl<C> CompletionBackend<C> {
    pub fn client(&self) -> Result<&C> {
        match self {
            CompletionBackend::Ready(client) => Ok(client),
            CompletionBackend::Unconfigured => Err(AppError::NotConfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, CompletionBackend::Ready(_))
    }
}

impl<C> From<Option<C>> for CompletionBackend<C> {
    fn from(client: Option<C>) -> Self {
        client.map_or(CompletionBackend::Unconfigured, CompletionBackend::Ready)
    }
}
