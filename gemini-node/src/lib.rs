//! # Gemini Node
//!
//! Workflow-host plugin supplying a configured Google Gemini chat model.
//! It registers one credential type (`googleGeminiApi`) and one node type
//! (`geminiChatModel`); the node's only operation maps the resolved form
//! values and the decrypted API key onto a client object satisfying the
//! host's language-model capability.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gemini_node::{build_model, GeminiModelConfig};
//! use workflow_node::{CompletionRequest, CredentialRecord, LanguageModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = CredentialRecord::new().with_field("apiKey", "your-api-key");
//!     let model = build_model(&credential, &GeminiModelConfig::default())?;
//!
//!     let response = model
//!         .generate(CompletionRequest::prompt("Hello, Gemini!"))
//!         .await?;
//!     println!("Response: {}", response.content);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod model;
pub mod node;

pub use config::{GeminiModel, GeminiModelConfig};
pub use credentials::{google_gemini_api, API_KEY_FIELD, CREDENTIAL_TYPE};
pub use model::GeminiLanguageModel;
pub use node::{build_model, GeminiChatModel, NODE_TYPE};

use workflow_node::NodeRegistry;

/// Register this plugin's credential type and node type with the host.
///
/// Called explicitly at process startup; registration has no other side
/// effects.
pub fn register(registry: &mut NodeRegistry) {
    registry.register_credential(credentials::google_gemini_api());
    registry.register_node(Box::new(node::GeminiChatModel::new()));
}
