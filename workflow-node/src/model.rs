use crate::{
    chat::{CompletionRequest, CompletionResponse, StreamChunk},
    error::ModelError,
};
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

/// Boxed stream of completion chunks
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, ModelError>> + Send>>;

/// The "language model" capability contract.
///
/// Any node output wired into a downstream consumer that accepts a language
/// model must satisfy this trait. Implementations hold their full
/// configuration from construction; generation is the only point at which
/// network I/O happens.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete a request (non-streaming)
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, ModelError>;

    /// Get provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get model name (e.g., "gemini-pro")
    fn model_name(&self) -> &str;

    /// Check if streaming is supported
    fn supports_streaming(&self) -> bool {
        false
    }

    /// Stream a completion (optional, returns error if not supported)
    async fn stream(&self, _request: CompletionRequest) -> Result<ChunkStream, ModelError> {
        Err(ModelError::not_supported("Streaming not supported"))
    }
}

impl std::fmt::Debug for dyn LanguageModel + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageModel")
            .field("provider", &self.provider_name())
            .field("model", &self.model_name())
            .finish()
    }
}
