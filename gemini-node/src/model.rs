//! The capability object returned by the node factory.

use crate::{
    config::GeminiModelConfig,
    gemini::{GeminiClient, MessageBuilder},
};
use async_trait::async_trait;
use futures_util::StreamExt;
use workflow_node::{
    ChunkStream, CompletionRequest, CompletionResponse, LanguageModel, ModelError, Role,
    StreamChunk, Usage,
};

/// A Gemini chat model configured for one node invocation.
///
/// Holds the wire client and the resolved configuration; every generation
/// call applies the same five sampling parameters captured at build time.
/// Construction performs no network I/O.
pub struct GeminiLanguageModel {
    client: GeminiClient,
    config: GeminiModelConfig,
}

// the wire client holds the API key; only the configuration is printed
impl std::fmt::Debug for GeminiLanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiLanguageModel")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiLanguageModel {
    pub(crate) fn new(client: GeminiClient, config: GeminiModelConfig) -> Self {
        Self { client, config }
    }

    /// The configuration captured at build time
    pub fn config(&self) -> &GeminiModelConfig {
        &self.config
    }

    /// Redirect the wire client at a different endpoint (tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    #[cfg(test)]
    pub(crate) fn api_key(&self) -> &str {
        self.client.api_key()
    }

    fn request_builder(&self, request: CompletionRequest) -> MessageBuilder<'_> {
        let mut builder = self
            .client
            .message_builder()
            .model(self.config.model.as_str())
            .temperature(self.config.temperature)
            .max_output_tokens(self.config.max_output_tokens)
            .top_k(self.config.top_k)
            .top_p(self.config.top_p);

        let mut system_lines: Vec<String> = Vec::new();
        for message in request.messages {
            match message.role {
                Role::System => system_lines.push(message.content),
                Role::User => builder = builder.user_message(message.content),
                Role::Assistant => builder = builder.model_message(message.content),
            }
        }
        if !system_lines.is_empty() {
            builder = builder.system(system_lines.join("\n\n"));
        }
        if let Some(sequences) = request.stop_sequences {
            builder = builder.stop_sequences(sequences);
        }
        builder
    }
}

#[async_trait]
impl LanguageModel for GeminiLanguageModel {
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, ModelError> {
        let response = self.request_builder(request).send().await?;

        let usage = response.usage_metadata.as_ref().map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        Ok(CompletionResponse {
            content: response.first_candidate_text(),
            stop_reason: response.finish_reason().map(str::to_string),
            usage,
        })
    }

    fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    fn model_name(&self) -> &str {
        self.config.model.as_str()
    }

    fn supports_streaming(&self) -> bool {
        true
    }

    async fn stream(&self, request: CompletionRequest) -> Result<ChunkStream, ModelError> {
        let raw = self.request_builder(request).stream().await?;
        let chunks = raw.map(|item| {
            item.map(|response| StreamChunk {
                content: response.first_candidate_text(),
                is_finished: response.finish_reason().is_some(),
            })
        });
        Ok(Box::pin(chunks))
    }
}
