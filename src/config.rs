//! Client configuration.
//!
//! Configuration is passed explicitly into [`crate::client::ChatClient`] and
//! [`crate::models::ModelDirectory`]; nothing reads ambient process state at
//! call time. `from_env` exists as a convenience constructor for binaries.

use secrecy::SecretString;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Default output token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Environment variable holding one or more comma-separated API keys.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Connection and generation settings for a chat client.
///
/// Credentials are modeled as a list throughout: the chat path uses the first
/// key, the model directory iterates all of them. An empty list is a valid,
/// handled state rather than a construction failure.
#[derive(Debug, Clone)]
pub struct ChatClientConfig {
    /// Bearer credentials, possibly empty.
    pub api_keys: Vec<SecretString>,
    /// Provider base URL without a trailing slash.
    pub base_url: String,
    /// Model identifier sent with every request unless overridden per call.
    pub model: String,
    /// Sampling temperature sent with every request.
    pub temperature: f64,
    /// Maximum output length sent with every request.
    pub max_tokens: u32,
}

impl Default for ChatClientConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatClientConfig {
    /// Creates a configuration with defaults and no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from process environment.
    ///
    /// Reads a comma-separated key list from `OPENAI_API_KEY` and an optional
    /// base URL override from `OPENAI_BASE_URL`. A missing key variable
    /// leaves the credential list empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(API_KEY_ENV) {
            config.api_keys = raw
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| SecretString::from(key.to_string()))
                .collect();
        }
        if let Ok(base) = std::env::var(BASE_URL_ENV)
            && !base.trim().is_empty()
        {
            config.base_url = base.trim().trim_end_matches('/').to_string();
        }
        config
    }

    /// Adds one API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_keys.push(SecretString::from(key.into()));
        self
    }

    /// Replaces the full credential list.
    pub fn with_api_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.api_keys = keys
            .into_iter()
            .map(|key| SecretString::from(key.into()))
            .collect();
        self
    }

    /// Sets the provider base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the default model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the output token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Whether at least one credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_keys.is_empty()
    }

    /// The credential used for chat requests.
    pub(crate) fn primary_key(&self) -> Option<&SecretString> {
        self.api_keys.first()
    }
}

/// Per-call overrides for a single send.
///
/// Unset fields fall back to the [`ChatClientConfig`] values. The system
/// prompt, when present, is prepended as a leading `system` message before
/// the conversation history.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Model identifier override.
    pub model: Option<String>,
    /// Temperature override.
    pub temperature: Option<f64>,
    /// Output token cap override.
    pub max_tokens: Option<u32>,
    /// Global system prompt to prepend.
    pub system_prompt: Option<String>,
}

impl ChatOptions {
    /// Creates empty options; every field falls back to the config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model override.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the temperature override.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the output token cap override.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the system prompt to prepend.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}
