//! HTTP-level tests against a local mock server.

use futures_util::StreamExt;
use gemini_node::{build_model, GeminiModel, GeminiModelConfig};
use workflow_node::{ChatMessage, CompletionRequest, CredentialRecord, LanguageModel, ModelError};

fn credential() -> CredentialRecord {
    CredentialRecord::new().with_field("apiKey", "sk-test")
}

#[tokio::test]
async fn generate_maps_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_header("x-goog-api-key", "sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Four"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 9, "candidatesTokenCount": 1, "totalTokenCount": 10},
                "modelVersion": "gemini-1.5-flash"
            }"#,
        )
        .create_async()
        .await;

    let config = GeminiModelConfig {
        model: GeminiModel::Gemini15Flash,
        ..Default::default()
    };
    let model = build_model(&credential(), &config)
        .unwrap()
        .with_base_url(server.url());

    let response = model
        .generate(CompletionRequest::prompt("What is 2+2, in one word?"))
        .await
        .unwrap();

    assert_eq!(response.content, "Four");
    assert_eq!(response.stop_reason.as_deref(), Some("STOP"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.input_tokens, 9);
    assert_eq!(usage.output_tokens, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_sends_captured_configuration() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "generationConfig": {
                "temperature": 0.5,
                "maxOutputTokens": 512,
                "topK": 20,
                "topP": 0.5
            },
            "systemInstruction": {"parts": [{"text": "Be terse."}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"ok"}]},"finishReason":"STOP"}]}"#)
        .create_async()
        .await;

    let config = GeminiModelConfig {
        model: GeminiModel::Gemini15Pro,
        temperature: 0.5,
        max_output_tokens: 512,
        top_k: 20,
        top_p: 0.5,
    };
    let model = build_model(&credential(), &config)
        .unwrap()
        .with_base_url(server.url());

    let request = CompletionRequest::new(vec![
        ChatMessage::system("Be terse."),
        ChatMessage::user("Hello"),
    ]);
    model.generate(request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn authentication_error_is_mapped() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#,
        )
        .create_async()
        .await;

    let model = build_model(&credential(), &GeminiModelConfig::default())
        .unwrap()
        .with_base_url(server.url());

    let err = model
        .generate(CompletionRequest::prompt("Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Authentication { .. }));
}

#[tokio::test]
async fn rate_limit_error_is_mapped() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#,
        )
        .create_async()
        .await;

    let model = build_model(&credential(), &GeminiModelConfig::default())
        .unwrap()
        .with_base_url(server.url());

    let err = model
        .generate(CompletionRequest::prompt("Hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::RateLimit { .. }));
}

#[tokio::test]
async fn stream_yields_chunks_until_finish() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-pro:streamGenerateContent?alt=sse",
        )
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(concat!(
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"Hel\"}]}}]}\r\n",
            "\r\n",
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"lo\"}]},\"finishReason\":\"STOP\"}]}\r\n",
            "\r\n",
        ))
        .create_async()
        .await;

    let model = build_model(&credential(), &GeminiModelConfig::default())
        .unwrap()
        .with_base_url(server.url());

    let mut stream = model
        .stream(CompletionRequest::prompt("Say hello"))
        .await
        .unwrap();

    let mut text = String::new();
    let mut finished = false;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.unwrap();
        text.push_str(&chunk.content);
        finished = chunk.is_finished;
    }

    assert_eq!(text, "Hello");
    assert!(finished);
}

#[tokio::test]
async fn stream_flushes_unterminated_final_line() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-pro:streamGenerateContent?alt=sse",
        )
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        // the body ends without a trailing newline after the last event
        .with_body(concat!(
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"Hel\"}]}}]}\r\n",
            "\r\n",
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"lo\"}]},\"finishReason\":\"STOP\"}]}",
        ))
        .create_async()
        .await;

    let model = build_model(&credential(), &GeminiModelConfig::default())
        .unwrap()
        .with_base_url(server.url());

    let mut stream = model
        .stream(CompletionRequest::prompt("Say hello"))
        .await
        .unwrap();

    let mut text = String::new();
    let mut finished = false;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.unwrap();
        text.push_str(&chunk.content);
        finished = chunk.is_finished;
    }

    assert_eq!(text, "Hello");
    assert!(finished);
}
