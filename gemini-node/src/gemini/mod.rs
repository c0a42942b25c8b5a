//! Google Gemini wire client and types.
//!
//! Thin wrapper over the `generateContent` / `streamGenerateContent`
//! endpoints. Holds configuration only; nothing here touches the network
//! until a request is sent.

pub mod builder;
pub mod client;
pub mod types;

pub use builder::MessageBuilder;
pub use client::GeminiClient;
pub use types::*;
