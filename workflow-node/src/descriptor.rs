//! Declarative descriptors for node types and credential types.
//!
//! Descriptors are pure metadata: the host renders them as a parameter form
//! and serializes them into saved workflows. Nothing here performs I/O.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a fixed allow-list rendered as a dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyOption {
    /// Label shown to the user
    pub name: String,
    /// Value stored in the workflow
    pub value: String,
}

impl PropertyOption {
    /// Create an option whose label equals its stored value
    pub fn plain<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
        }
    }
}

/// Semantic type of a form field, with its per-type constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyKind {
    /// Fixed allow-list
    Options { options: Vec<PropertyOption> },
    /// Numeric field with optional range constraints
    #[serde(rename_all = "camelCase")]
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        step_size: Option<f64>,
    },
    /// Free-form string; `password` masks the input and marks it secret
    String {
        #[serde(default)]
        password: bool,
    },
}

/// A single field in a node or credential parameter form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    /// Human-readable label
    pub display_name: String,
    /// Stable field name used for parameter resolution
    pub name: String,
    #[serde(flatten)]
    pub kind: PropertyKind,
    /// Default value applied when the user supplies no override
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl NodeProperty {
    /// Create an options (dropdown) field
    pub fn options<D, N>(display_name: D, name: N, options: Vec<PropertyOption>, default: &str) -> Self
    where
        D: Into<String>,
        N: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::Options { options },
            default: Value::String(default.to_string()),
            description: None,
            required: false,
        }
    }

    /// Create a numeric field
    pub fn number<D, N>(display_name: D, name: N, default: f64) -> Self
    where
        D: Into<String>,
        N: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::Number {
                min_value: None,
                max_value: None,
                step_size: None,
            },
            // integral defaults are stored as JSON integers
            default: if default.fract() == 0.0 {
                serde_json::json!(default as i64)
            } else {
                serde_json::json!(default)
            },
            description: None,
            required: false,
        }
    }

    /// Create a string field
    pub fn string<D, N>(display_name: D, name: N, password: bool) -> Self
    where
        D: Into<String>,
        N: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::String { password },
            default: Value::String(String::new()),
            description: None,
            required: false,
        }
    }

    /// Set the field description
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrain a numeric field to `[min, max]`
    pub fn range(mut self, min: f64, max: f64) -> Self {
        if let PropertyKind::Number {
            min_value,
            max_value,
            ..
        } = &mut self.kind
        {
            *min_value = Some(min);
            *max_value = Some(max);
        }
        self
    }

    /// Set the minimum of a numeric field
    pub fn min(mut self, min: f64) -> Self {
        if let PropertyKind::Number { min_value, .. } = &mut self.kind {
            *min_value = Some(min);
        }
        self
    }

    /// Set the UI step size of a numeric field
    pub fn step(mut self, step: f64) -> Self {
        if let PropertyKind::Number { step_size, .. } = &mut self.kind {
            *step_size = Some(step);
        }
        self
    }
}

/// Kind of connection a node accepts or produces in the workflow graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionKind {
    /// A configured language-model client
    LanguageModel,
    /// Ordinary item data flowing between nodes
    Main,
}

/// A credential type a node requires, by stable name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CredentialRequirement {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// Declarative schema for a credential type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
    /// Stable type name used for lookup and storage
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    /// Secret/config fields the user fills in
    pub properties: Vec<NodeProperty>,
}

/// Declarative schema for a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    /// Stable type name used for lookup and workflow serialization
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    pub description: String,
    pub group: Vec<String>,
    pub version: u32,
    pub inputs: Vec<ConnectionKind>,
    pub outputs: Vec<ConnectionKind>,
    pub output_names: Vec<String>,
    pub credentials: Vec<CredentialRequirement>,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescriptor {
    /// Look up a form field by stable name
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}
