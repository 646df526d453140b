//! Capability traits consumed by the UI layer.
//!
//! These are the only contracts the excluded UI, storage, and localization
//! collaborators depend on; implementations are injectable so tests can
//! substitute fakes.

use std::collections::HashSet;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::config::ChatOptions;
use crate::transformers::stream::ChatReplyStream;
use crate::types::{ChatMessage, ChatResult, UserPrompt};

/// Chat completion capability.
///
/// Both methods are infallible at the boundary: every failure below it is
/// converted into a user-facing result value. Overlapping sends for the same
/// conversation are the caller's job to prevent; implementations hold no
/// cross-call state and are re-entrant for independent conversations.
#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// One-shot send of a complete history, already ending in the user's
    /// latest message.
    async fn send_chat(&self, history: &[ChatMessage]) -> ChatResult;

    /// Streaming-shaped send: the trailing prompt is appended after the
    /// history and the reply arrives as a lazy chunk sequence.
    async fn send_chat_stream(
        &self,
        history: &[ChatMessage],
        prompt: &UserPrompt,
        options: &ChatOptions,
    ) -> ChatReplyStream;
}

/// Model listing capability.
#[async_trait]
pub trait ModelListingCapability: Send + Sync {
    /// Resolves the set of selectable model identifiers for the given
    /// credentials. Never fails: individual credential failures are skipped
    /// and the static default list is always included.
    async fn list_models(&self, api_keys: &[SecretString]) -> HashSet<String>;
}
