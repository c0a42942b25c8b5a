use super::client::{GeminiClient, ResponseStream};
use super::types::*;
use workflow_node::ModelError;

pub struct MessageBuilder<'a> {
    client: &'a GeminiClient,
    model: Option<String>,
    contents: Vec<GeminiContent>,
    system_instruction: Option<String>,
    generation_config: GenerationConfig,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self {
            client,
            model: None,
            contents: Vec::new(),
            system_instruction: None,
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn user_message(mut self, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent::user(text));
        self
    }

    pub fn model_message(mut self, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent::model(text));
        self
    }

    pub fn content(mut self, content: GeminiContent) -> Self {
        self.contents.push(content);
        self
    }

    pub fn system(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(text.into());
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.generation_config.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.generation_config.max_output_tokens = Some(tokens);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.generation_config.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.generation_config.top_k = Some(top_k);
        self
    }

    pub fn stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.generation_config.stop_sequences = Some(sequences);
        self
    }

    fn into_request(self) -> Result<(String, &'a GeminiClient, GeminiGenerateContentRequest), ModelError> {
        let model = self
            .model
            .ok_or_else(|| ModelError::invalid_request("Model is required"))?;

        if self.contents.is_empty() {
            return Err(ModelError::invalid_request(
                "At least one message is required",
            ));
        }

        let request = GeminiGenerateContentRequest {
            contents: self.contents,
            system_instruction: self.system_instruction.map(|text| GeminiContent {
                role: GeminiRole::User,
                parts: vec![GeminiPart::text(text)],
            }),
            generation_config: Some(self.generation_config),
        };

        Ok((model, self.client, request))
    }

    pub async fn send(self) -> Result<GeminiGenerateContentResponse, ModelError> {
        let (model, client, request) = self.into_request()?;
        client.generate_content(model, request).await
    }

    pub async fn stream(self) -> Result<ResponseStream, ModelError> {
        let (model, client, request) = self.into_request()?;
        client.stream_generate_content(model, request).await
    }
}
