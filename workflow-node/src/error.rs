use thiserror::Error;

/// Errors raised by a wrapped model client during generation.
///
/// These surface to whichever consumer invokes the returned model and are
/// never caught or translated by the node layer.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Authentication failed (HTTP 401/403)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// API error with status code (HTTP 4xx/5xx except above)
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Generic error for unexpected cases
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Feature not supported
    #[error("Not supported: {message}")]
    NotSupported { message: String },
}

impl ModelError {
    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit<S: Into<String>>(message: S, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(message: S) -> Self {
        Self::NotSupported {
            message: message.into(),
        }
    }
}

/// Errors raised while resolving a node's credential and configuration.
///
/// These are detected synchronously at construction time, before any model
/// object is returned, so the host can surface the failure at the offending
/// node instead of during downstream execution.
#[derive(Error, Debug)]
pub enum NodeError {
    /// A required credential field is absent or empty
    #[error("Missing credential: '{name}' is absent or empty")]
    MissingCredential { name: String },

    /// A configuration field is outside its declared domain
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },

    /// Registry lookup for an unregistered node type
    #[error("Unknown node type: '{name}'")]
    UnknownNodeType { name: String },

    /// Registry lookup for an unregistered credential type
    #[error("Unknown credential type: '{name}'")]
    UnknownCredentialType { name: String },

    /// The wrapped client failed during construction; propagated unchanged
    #[error(transparent)]
    Upstream(#[from] ModelError),
}

impl NodeError {
    /// Create a missing credential error
    pub fn missing_credential<S: Into<String>>(name: S) -> Self {
        Self::MissingCredential { name: name.into() }
    }

    /// Create an invalid configuration error naming the offending field
    pub fn invalid_configuration<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}
