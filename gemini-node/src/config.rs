//! Typed model configuration for one node invocation.

use std::str::FromStr;
use workflow_node::{NodeError, ResolvedParameters};

/// Models the node offers, a fixed allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiModel {
    /// Gemini Pro - original general-purpose model
    GeminiPro,
    /// Gemini 1.5 Flash - fast and cost-effective
    Gemini15Flash,
    /// Gemini 1.5 Pro - long-context flagship
    Gemini15Pro,
}

impl GeminiModel {
    pub const ALL: [GeminiModel; 3] = [
        GeminiModel::GeminiPro,
        GeminiModel::Gemini15Flash,
        GeminiModel::Gemini15Pro,
    ];

    /// The provider-side model ID
    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::GeminiPro => "gemini-pro",
            GeminiModel::Gemini15Flash => "gemini-1.5-flash",
            GeminiModel::Gemini15Pro => "gemini-1.5-pro",
        }
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeminiModel {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeminiModel::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                NodeError::invalid_configuration(
                    "modelName",
                    format!("'{}' is not a supported Gemini model", s),
                )
            })
    }
}

/// The resolved parameter set for one invocation.
///
/// Built fresh per workflow execution, immutable once resolved, and
/// discarded after the client object is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiModelConfig {
    pub model: GeminiModel,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GeminiModelConfig {
    fn default() -> Self {
        Self {
            model: GeminiModel::GeminiPro,
            temperature: 0.7,
            max_output_tokens: 1024,
            top_k: 40,
            top_p: 0.9,
        }
    }
}

impl GeminiModelConfig {
    /// Parse the host's resolved parameter bag into a typed configuration.
    pub fn from_parameters(params: &ResolvedParameters) -> Result<Self, NodeError> {
        let config = Self {
            model: params.get_str("modelName")?.parse()?,
            temperature: params.get_f32("temperature")?,
            max_output_tokens: params.get_u32("maxOutputTokens")?,
            top_k: params.get_u32("topK")?,
            top_p: params.get_f32("topP")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the numeric domains the parameter form declares.
    ///
    /// The form already constrains these in the UI, but values delivered
    /// out of range must fail here rather than reach the wire client.
    pub fn validate(&self) -> Result<(), NodeError> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(NodeError::invalid_configuration(
                "temperature",
                format!("must be between 0 and 1, got {}", self.temperature),
            ));
        }
        if self.max_output_tokens < 1 {
            return Err(NodeError::invalid_configuration(
                "maxOutputTokens",
                "must be at least 1",
            ));
        }
        if self.top_k < 1 {
            return Err(NodeError::invalid_configuration("topK", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(NodeError::invalid_configuration(
                "topP",
                format!("must be between 0 and 1, got {}", self.top_p),
            ));
        }
        Ok(())
    }
}
