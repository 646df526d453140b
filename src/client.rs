//! Transport client for the chat-completions endpoint.
//!
//! Exactly one HTTP attempt per send, no retry and no backoff; a caller that
//! wants a retry policy layers it on top. Failures never cross the boundary
//! as errors: they surface as [`ChatResult`] values carrying a short
//! user-facing message, while the underlying status code and body go to the
//! log only.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::{debug, warn};

use crate::config::{ChatClientConfig, ChatOptions};
use crate::error::LlmError;
use crate::traits::ChatCapability;
use crate::transformers::request::build_chat_body;
use crate::transformers::response::extract_reply_text;
use crate::transformers::stream::{ChatReplyStream, into_chunk_stream};
use crate::types::{ChatMessage, ChatResult, UserPrompt};

/// User-facing reply when no API key is configured. Localization of these
/// defaults is the embedding UI's concern.
pub const MISSING_API_KEY_REPLY: &str =
    "There is a problem with the server configuration. No API key is set.";

/// User-facing reply for any transport or provider failure.
pub const REQUEST_FAILED_REPLY: &str =
    "Something went wrong while fetching a reply from the AI. Please try again.";

/// Chat-completions client.
///
/// Cheap to clone; the injected `reqwest::Client` is shared. Process-wide
/// configuration is read-only at call time, so clones are safely re-entrant
/// for independent conversations.
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ChatClientConfig,
    http_client: reqwest::Client,
}

impl ChatClient {
    /// Creates a client with an injected HTTP client.
    pub fn new(config: ChatClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Creates a client with a fresh HTTP client.
    pub fn with_config(config: ChatClientConfig) -> Self {
        Self::new(config, reqwest::Client::new())
    }

    /// The active configuration.
    pub fn config(&self) -> &ChatClientConfig {
        &self.config
    }

    /// Regenerates a persona description by forwarding the conversation
    /// through the ordinary chat path.
    pub async fn generate_persona_update(&self, history: &[ChatMessage]) -> ChatResult {
        self.send_chat(history).await
    }

    /// Single attempt against `POST {base_url}/chat/completions`.
    ///
    /// Short-circuits before any network call when no credential is
    /// configured.
    async fn execute_chat(&self, body: serde_json::Value) -> Result<String, LlmError> {
        let api_key = self.config.primary_key().ok_or(LlmError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(url = %url, model = %body["model"], "sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                code: status.as_u16(),
                details: serde_json::from_str(&body_text).ok(),
                message: body_text,
            });
        }

        let raw: serde_json::Value = response.json().await?;
        Ok(extract_reply_text(&raw))
    }

    /// Maps an internal outcome to the uniform externally-visible shape.
    fn to_result(outcome: Result<String, LlmError>) -> ChatResult {
        match outcome {
            Ok(reply) => ChatResult::ok(reply),
            Err(LlmError::MissingApiKey) => {
                warn!("chat completion requested without a configured API key");
                ChatResult::failure(MISSING_API_KEY_REPLY)
            }
            Err(err) => {
                warn!(error = %err, "chat completion failed");
                ChatResult::failure(REQUEST_FAILED_REPLY)
            }
        }
    }
}

#[async_trait]
impl ChatCapability for ChatClient {
    async fn send_chat(&self, history: &[ChatMessage]) -> ChatResult {
        let body = build_chat_body(&self.config, &ChatOptions::default(), history, None);
        Self::to_result(self.execute_chat(body).await)
    }

    async fn send_chat_stream(
        &self,
        history: &[ChatMessage],
        prompt: &UserPrompt,
        options: &ChatOptions,
    ) -> ChatReplyStream {
        let body = build_chat_body(&self.config, options, history, Some(prompt));
        let result = Self::to_result(self.execute_chat(body).await);
        into_chunk_stream(result)
    }
}
