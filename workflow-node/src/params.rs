//! Resolved runtime inputs for a node invocation.
//!
//! The host decrypts stored credentials and applies user overrides on top of
//! descriptor defaults before invoking a node; these types carry the result.

use crate::{descriptor::NodeDescriptor, error::NodeError};
use serde_json::Value;
use std::collections::HashMap;

/// A decrypted credential record, read-only to the node.
///
/// `Debug` redacts all values; credential material must never reach logs.
#[derive(Clone, Default)]
pub struct CredentialRecord {
    values: HashMap<String, String>,
}

impl CredentialRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, builder style
    pub fn with_field<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get a field value, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get a field value, failing if it is absent or empty
    pub fn require(&self, name: &str) -> Result<&str, NodeError> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(NodeError::missing_credential(name)),
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for name in self.values.keys() {
            map.entry(name, &"***");
        }
        map.finish()
    }
}

/// The resolved parameter set for one node invocation.
///
/// Seeded from the descriptor's defaults, then overridden field by field
/// with the user's values. Immutable from the node's point of view; typed
/// getters fail with an invalid-configuration error naming the field when a
/// value has the wrong shape.
#[derive(Debug, Clone, Default)]
pub struct ResolvedParameters {
    values: HashMap<String, Value>,
}

impl ResolvedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every field with the descriptor's default value
    pub fn from_descriptor(descriptor: &NodeDescriptor) -> Self {
        let values = descriptor
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect();
        Self { values }
    }

    /// Override a field value, builder style
    pub fn with_value<N: Into<String>>(mut self, name: N, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Get the raw value for a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get a string field
    pub fn get_str(&self, name: &str) -> Result<&str, NodeError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| NodeError::invalid_configuration(name, "expected a string value"))
    }

    /// Get a float field; integer JSON values are accepted
    pub fn get_f32(&self, name: &str) -> Result<f32, NodeError> {
        self.require(name)?
            .as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| NodeError::invalid_configuration(name, "expected a numeric value"))
    }

    /// Get a non-negative integer field; integral floats are accepted
    pub fn get_u32(&self, name: &str) -> Result<u32, NodeError> {
        let value = self.require(name)?;
        let integral = match value.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            None => value
                .as_f64()
                .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
                .map(|v| v as u32),
        };
        integral.ok_or_else(|| {
            NodeError::invalid_configuration(name, "expected a non-negative integer value")
        })
    }

    fn require(&self, name: &str) -> Result<&Value, NodeError> {
        self.values
            .get(name)
            .ok_or_else(|| NodeError::invalid_configuration(name, "no value resolved"))
    }
}
