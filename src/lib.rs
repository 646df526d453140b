//! chatwire
//!
//! A thin adaptation layer between a chat client UI and an OpenAI-compatible
//! `chat/completions` endpoint. It normalizes heterogeneous conversation
//! history (text plus inline file attachments, role variants) into the
//! provider's wire shape, issues the HTTP call, and normalizes the reply back
//! into the result and stream shapes the UI consumer expects.
//!
//! The crate intentionally holds no cross-call state: clients are cheap to
//! clone and re-entrant for independent conversations. Rendering, settings
//! persistence, and localization live in the embedding application.
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod transformers;
pub mod types;
pub mod utils;

/// Convenient re-exports for consumers.
pub mod prelude {
    pub use crate::client::ChatClient;
    pub use crate::config::{ChatClientConfig, ChatOptions};
    pub use crate::error::LlmError;
    pub use crate::models::{DEFAULT_MODELS, ModelDirectory, default_models};
    pub use crate::traits::{ChatCapability, ModelListingCapability};
    pub use crate::transformers::stream::{ChatReplyStream, StreamChunk, into_chunk_stream};
    pub use crate::types::{Attachment, ChatMessage, ChatResult, MessageRole, UserPrompt};
}
