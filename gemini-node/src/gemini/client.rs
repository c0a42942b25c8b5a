use super::types::*;
use futures_util::{Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::pin::Pin;
use workflow_node::ModelError;

/// Boxed stream of raw response chunks from `streamGenerateContent`
pub type ResponseStream =
    Pin<Box<dyn Stream<Item = Result<GeminiGenerateContentResponse, ModelError>> + Send>>;

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ModelError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| ModelError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            http_client,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    fn headers(&self) -> Result<HeaderMap, ModelError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|e| {
                ModelError::authentication(format!("Invalid API key format: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        request: GeminiGenerateContentRequest,
    ) -> Result<GeminiGenerateContentResponse, ModelError> {
        let model = model.into();
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        tracing::debug!(%model, "sending generateContent request");

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_body) {
                return Err(Self::map_error(
                    error_response.error.code,
                    error_response.error.message,
                ));
            }

            return Err(ModelError::api_error(status.as_u16(), error_body));
        }

        let generate_response = response
            .json::<GeminiGenerateContentResponse>()
            .await
            .map_err(|e| ModelError::internal(format!("Failed to parse response: {}", e)))?;

        Ok(generate_response)
    }

    /// Stream a generation over SSE.
    ///
    /// `alt=sse` makes the endpoint emit one `data:` line per chunk, each a
    /// complete response object, instead of a single JSON array.
    pub async fn stream_generate_content(
        &self,
        model: impl Into<String>,
        request: GeminiGenerateContentRequest,
    ) -> Result<ResponseStream, ModelError> {
        let model = model.into();
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url, model
        );
        tracing::debug!(%model, "sending streamGenerateContent request");

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_body) {
                return Err(Self::map_error(
                    error_response.error.code,
                    error_response.error.message,
                ));
            }

            return Err(ModelError::api_error(status.as_u16(), error_body));
        }

        // `data:` lines may be split across network chunks; buffer until a
        // newline completes each line before parsing. A trailing `None`
        // marks the end of the body so a final unterminated line still
        // gets flushed.
        let parsed = response
            .bytes_stream()
            .map(Some)
            .chain(futures_util::stream::iter([None]))
            .scan(String::new(), |buffer, chunk| {
                let mut out = Vec::new();
                match chunk {
                    Some(Ok(bytes)) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));
                        while let Some(pos) = buffer.find('\n') {
                            let line: String = buffer.drain(..=pos).collect();
                            out.extend(Self::parse_sse_line(&line));
                        }
                    }
                    Some(Err(e)) => out.push(Err(ModelError::Network { source: e })),
                    None => {
                        out.extend(Self::parse_sse_line(buffer));
                        buffer.clear();
                    }
                }
                futures_util::future::ready(Some(futures_util::stream::iter(out)))
            })
            .flatten();

        Ok(Box::pin(parsed))
    }

    fn parse_sse_line(line: &str) -> Option<Result<GeminiGenerateContentResponse, ModelError>> {
        let data = line.trim_end().strip_prefix("data: ")?;
        Some(
            serde_json::from_str::<GeminiGenerateContentResponse>(data).map_err(|e| {
                ModelError::internal(format!("Failed to parse stream chunk: {}", e))
            }),
        )
    }

    fn map_error(status: u16, message: String) -> ModelError {
        match status {
            400 => ModelError::invalid_request(message),
            401 | 403 => ModelError::Authentication { message },
            429 => ModelError::rate_limit(message, None),
            _ => ModelError::api_error(status, message),
        }
    }

    pub fn provider_name(&self) -> &str {
        "google"
    }

    pub fn message_builder(&self) -> super::builder::MessageBuilder<'_> {
        super::builder::MessageBuilder::new(self)
    }
}
