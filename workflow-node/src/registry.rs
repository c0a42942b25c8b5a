//! Explicit plugin registration.
//!
//! Plugins register their credential types and node types at process
//! startup; the host looks both up by stable name when loading a saved
//! workflow. No load-time side effects are involved.

use crate::{
    descriptor::{CredentialDescriptor, NodeDescriptor},
    error::NodeError,
    model::LanguageModel,
    params::{CredentialRecord, ResolvedParameters},
};
use std::collections::HashMap;

/// A registered node type that supplies a language model.
///
/// `supply_model` is the single operation a node exposes: given the
/// decrypted credential and the resolved parameters for one invocation,
/// construct and return the capability object. Construction is synchronous
/// and performs no network I/O; invocations are independent, so the host
/// may call this concurrently.
pub trait ModelNode: Send + Sync {
    /// Declarative schema for this node type
    fn descriptor(&self) -> &NodeDescriptor;

    /// Build the language-model client for one invocation
    fn supply_model(
        &self,
        credential: &CredentialRecord,
        params: &ResolvedParameters,
    ) -> Result<Box<dyn LanguageModel>, NodeError>;
}

/// Registry of credential types and node types, keyed by stable name
#[derive(Default)]
pub struct NodeRegistry {
    credentials: HashMap<String, CredentialDescriptor>,
    nodes: HashMap<String, Box<dyn ModelNode>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential type
    pub fn register_credential(&mut self, descriptor: CredentialDescriptor) {
        tracing::debug!(name = %descriptor.name, "registered credential type");
        self.credentials.insert(descriptor.name.clone(), descriptor);
    }

    /// Register a node type
    pub fn register_node(&mut self, node: Box<dyn ModelNode>) {
        let name = node.descriptor().name.clone();
        tracing::debug!(name = %name, "registered node type");
        self.nodes.insert(name, node);
    }

    /// Look up a credential type by stable name
    pub fn credential(&self, name: &str) -> Result<&CredentialDescriptor, NodeError> {
        self.credentials
            .get(name)
            .ok_or_else(|| NodeError::UnknownCredentialType {
                name: name.to_string(),
            })
    }

    /// Look up a node type by stable name
    pub fn node(&self, name: &str) -> Result<&dyn ModelNode, NodeError> {
        self.nodes
            .get(name)
            .map(|n| n.as_ref())
            .ok_or_else(|| NodeError::UnknownNodeType {
                name: name.to_string(),
            })
    }

    /// Invoke a registered node's factory
    pub fn supply_model(
        &self,
        node_name: &str,
        credential: &CredentialRecord,
        params: &ResolvedParameters,
    ) -> Result<Box<dyn LanguageModel>, NodeError> {
        self.node(node_name)?.supply_model(credential, params)
    }

    /// Names of all registered node types
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }
}
