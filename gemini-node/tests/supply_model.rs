use gemini_node::{GeminiChatModel, CREDENTIAL_TYPE, NODE_TYPE};
use serde_json::json;
use workflow_node::{
    CredentialRecord, LanguageModel, ModelNode, NodeError, NodeRegistry, ResolvedParameters,
};

fn registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();
    gemini_node::register(&mut registry);
    registry
}

fn default_params(registry: &NodeRegistry) -> ResolvedParameters {
    ResolvedParameters::from_descriptor(registry.node(NODE_TYPE).unwrap().descriptor())
}

#[test]
fn supply_with_descriptor_defaults() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");

    let model = registry
        .supply_model(NODE_TYPE, &credential, &default_params(&registry))
        .unwrap();

    assert_eq!(model.model_name(), "gemini-pro");
    assert_eq!(model.provider_name(), "google");
}

#[test]
fn supply_with_overrides() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let params = default_params(&registry)
        .with_value("modelName", json!("gemini-1.5-flash"))
        .with_value("temperature", json!(0.2))
        .with_value("maxOutputTokens", json!(512));

    let model = registry
        .supply_model(NODE_TYPE, &credential, &params)
        .unwrap();
    assert_eq!(model.model_name(), "gemini-1.5-flash");
}

#[test]
fn supply_without_credential_fails() {
    let registry = registry();
    let err = registry
        .supply_model(NODE_TYPE, &CredentialRecord::new(), &default_params(&registry))
        .unwrap_err();
    assert!(matches!(err, NodeError::MissingCredential { ref name } if name == "apiKey"));
}

#[test]
fn supply_with_unlisted_model_fails() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let params = default_params(&registry).with_value("modelName", json!("gpt-4"));

    let err = registry
        .supply_model(NODE_TYPE, &credential, &params)
        .unwrap_err();
    assert!(matches!(err, NodeError::InvalidConfiguration { ref field, .. } if field == "modelName"));
}

#[test]
fn supply_with_out_of_range_temperature_fails() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let params = default_params(&registry).with_value("temperature", json!(1.5));

    let err = registry
        .supply_model(NODE_TYPE, &credential, &params)
        .unwrap_err();
    assert!(matches!(err, NodeError::InvalidConfiguration { ref field, .. } if field == "temperature"));
}

#[test]
fn unknown_node_type_fails() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let err = registry
        .supply_model("someOtherModel", &credential, &ResolvedParameters::new())
        .unwrap_err();
    assert!(matches!(err, NodeError::UnknownNodeType { .. }));
}

#[test]
fn node_implements_model_node_trait() {
    fn assert_implements_trait<T: ModelNode>() {}
    assert_implements_trait::<GeminiChatModel>();
}

#[test]
fn supplied_model_is_a_trait_object() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let model: Box<dyn LanguageModel> = registry
        .supply_model(NODE_TYPE, &credential, &default_params(&registry))
        .unwrap();
    assert!(model.supports_streaming());
}

#[test]
fn supplied_model_debug_redacts_credential() {
    let registry = registry();
    let credential = CredentialRecord::new().with_field("apiKey", "sk-test");
    let model = registry
        .supply_model(NODE_TYPE, &credential, &default_params(&registry))
        .unwrap();

    let rendered = format!("{:?}", model);
    assert!(rendered.contains("google"));
    assert!(rendered.contains("gemini-pro"));
    assert!(!rendered.contains("sk-test"));
}

#[test]
fn registered_credential_matches_node_requirement() {
    let registry = registry();
    let node = registry.node(NODE_TYPE).unwrap();
    let requirement = &node.descriptor().credentials[0];
    assert!(requirement.required);
    assert_eq!(
        registry.credential(&requirement.name).unwrap().name,
        CREDENTIAL_TYPE
    );
}
