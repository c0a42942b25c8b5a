//! The `geminiChatModel` node type.

use crate::{
    config::{GeminiModel, GeminiModelConfig},
    credentials::{API_KEY_FIELD, CREDENTIAL_TYPE},
    gemini::GeminiClient,
    model::GeminiLanguageModel,
};
use workflow_node::{
    ConnectionKind, CredentialRecord, CredentialRequirement, LanguageModel, ModelNode,
    NodeDescriptor, NodeError, NodeProperty, PropertyOption, ResolvedParameters,
};

/// Stable node type name
pub const NODE_TYPE: &str = "geminiChatModel";

/// Build the language-model client for one invocation.
///
/// Pure mapping from (credential, configuration) to client-or-error: the
/// credential is checked first, the configuration is re-validated, and the
/// returned client captures all five parameters plus the key. No network
/// call happens here; generation is lazy.
pub fn build_model(
    credential: &CredentialRecord,
    config: &GeminiModelConfig,
) -> Result<GeminiLanguageModel, NodeError> {
    let api_key = credential.require(API_KEY_FIELD)?;
    config.validate()?;

    let client = GeminiClient::new(api_key)?;
    Ok(GeminiLanguageModel::new(client, config.clone()))
}

/// Node type supplying a configured Gemini chat model to downstream
/// consumers in the workflow graph.
pub struct GeminiChatModel {
    descriptor: NodeDescriptor,
}

impl GeminiChatModel {
    pub fn new() -> Self {
        Self {
            descriptor: NodeDescriptor {
                name: NODE_TYPE.to_string(),
                display_name: "Gemini Chat Model".to_string(),
                description: "Provides a Gemini chat model for AI agent nodes".to_string(),
                group: vec!["transform".to_string()],
                version: 1,
                inputs: Vec::new(),
                outputs: vec![ConnectionKind::LanguageModel],
                output_names: vec!["Model".to_string()],
                credentials: vec![CredentialRequirement {
                    name: CREDENTIAL_TYPE.to_string(),
                    required: true,
                }],
                properties: vec![
                    NodeProperty::options(
                        "Model",
                        "modelName",
                        GeminiModel::ALL
                            .iter()
                            .map(|m| PropertyOption::plain(m.as_str()))
                            .collect(),
                        GeminiModel::GeminiPro.as_str(),
                    )
                    .description("The model which will generate the completion")
                    .required(),
                    NodeProperty::number("Temperature", "temperature", 0.7)
                        .range(0.0, 1.0)
                        .step(0.1)
                        .description(
                            "Controls the randomness of the output. Higher values mean more random.",
                        ),
                    NodeProperty::number("Max Output Tokens", "maxOutputTokens", 1024.0)
                        .min(1.0)
                        .description("The maximum number of tokens to generate in the completion"),
                    NodeProperty::number("Top K", "topK", 40.0)
                        .min(1.0)
                        .description("The maximum number of tokens to consider for each step"),
                    NodeProperty::number("Top P", "topP", 0.9)
                        .range(0.0, 1.0)
                        .step(0.1)
                        .description(
                            "The cumulative probability of tokens to consider for each step",
                        ),
                ],
            },
        }
    }
}

impl Default for GeminiChatModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelNode for GeminiChatModel {
    fn descriptor(&self) -> &NodeDescriptor {
        &self.descriptor
    }

    fn supply_model(
        &self,
        credential: &CredentialRecord,
        params: &ResolvedParameters,
    ) -> Result<Box<dyn LanguageModel>, NodeError> {
        let config = GeminiModelConfig::from_parameters(params)?;
        Ok(Box::new(build_model(credential, &config)?))
    }
}
