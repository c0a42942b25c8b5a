//! # Workflow Node
//!
//! Host-facing plugin interface for workflow nodes that supply language
//! models. A plugin registers a credential descriptor and a node descriptor
//! at startup; at execution time the host resolves the user's form values
//! and the decrypted credential, then asks the node to build a client
//! object satisfying the [`LanguageModel`] capability.
//!
//! ## Example
//!
//! ```rust
//! use workflow_node::{CredentialRecord, NodeRegistry, ResolvedParameters};
//! use serde_json::json;
//!
//! let registry = NodeRegistry::new();
//! // plugins call registry.register_credential(...) / register_node(...)
//!
//! let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
//! assert_eq!(credential.require("apiKey").unwrap(), "sk-test");
//!
//! let params = ResolvedParameters::new().with_value("temperature", json!(0.2));
//! assert_eq!(params.get_f32("temperature").unwrap(), 0.2);
//! # drop(registry);
//! ```

pub mod chat;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod params;
pub mod registry;

pub use chat::{ChatMessage, CompletionRequest, CompletionResponse, Role, StreamChunk, Usage};
pub use descriptor::{
    ConnectionKind, CredentialDescriptor, CredentialRequirement, NodeDescriptor, NodeProperty,
    PropertyKind, PropertyOption,
};
pub use error::{ModelError, NodeError};
pub use model::{ChunkStream, LanguageModel};
pub use params::{CredentialRecord, ResolvedParameters};
pub use registry::{ModelNode, NodeRegistry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_seeded_from_descriptor_defaults() {
        let descriptor = NodeDescriptor {
            name: "someModel".to_string(),
            display_name: "Some Model".to_string(),
            description: String::new(),
            group: vec!["transform".to_string()],
            version: 1,
            inputs: Vec::new(),
            outputs: vec![ConnectionKind::LanguageModel],
            output_names: vec!["Model".to_string()],
            credentials: Vec::new(),
            properties: vec![
                NodeProperty::number("Temperature", "temperature", 0.7).range(0.0, 1.0),
                NodeProperty::number("Top K", "topK", 40.0).min(1.0),
            ],
        };

        let params = ResolvedParameters::from_descriptor(&descriptor);
        assert_eq!(params.get_f32("temperature").unwrap(), 0.7);
        assert_eq!(params.get_u32("topK").unwrap(), 40);
    }

    #[test]
    fn test_override_replaces_default() {
        let descriptor = NodeDescriptor {
            name: "someModel".to_string(),
            display_name: "Some Model".to_string(),
            description: String::new(),
            group: vec!["transform".to_string()],
            version: 1,
            inputs: Vec::new(),
            outputs: vec![ConnectionKind::LanguageModel],
            output_names: vec!["Model".to_string()],
            credentials: Vec::new(),
            properties: vec![NodeProperty::number("Temperature", "temperature", 0.7)],
        };

        let params = ResolvedParameters::from_descriptor(&descriptor)
            .with_value("temperature", serde_json::json!(0.2));
        assert_eq!(params.get_f32("temperature").unwrap(), 0.2);
    }
}
