//! The `googleGeminiApi` credential type.

use workflow_node::{CredentialDescriptor, NodeProperty};

/// Stable credential type name
pub const CREDENTIAL_TYPE: &str = "googleGeminiApi";

/// Field name of the API key within the credential record
pub const API_KEY_FIELD: &str = "apiKey";

/// Declarative schema: one masked, required API key field.
///
/// Validation and encrypted storage are the host's concern; the empty
/// default is a placeholder only.
pub fn google_gemini_api() -> CredentialDescriptor {
    CredentialDescriptor {
        name: CREDENTIAL_TYPE.to_string(),
        display_name: "Google Gemini API".to_string(),
        properties: vec![NodeProperty::string("API Key", API_KEY_FIELD, true).required()],
    }
}
