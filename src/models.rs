//! Model directory.
//!
//! Resolves the set of selectable model identifiers: a static default list
//! is always the floor, and each configured credential contributes whatever
//! a `GET {base_url}/models` call returns, filtered to recognized chat model
//! families. Partial success is the steady state: a credential that fails is
//! logged and skipped, never escalated.

use std::collections::HashSet;

use async_trait::async_trait;
use futures::future::join_all;
use lazy_static::lazy_static;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::error::LlmError;
use crate::traits::ModelListingCapability;

/// Models every installation can select, even before any key is configured.
pub const DEFAULT_MODELS: &[&str] = &["gpt-4.1-mini", "gpt-4.1", "o3-mini"];

lazy_static! {
    // gpt-*, chatgpt-*, and o1/o3/o4-style reasoning model ids
    static ref MODEL_FAMILY: Regex = Regex::new(r"^(gpt-|chatgpt-|o\d)").unwrap();
}

/// The static default list as a set.
pub fn default_models() -> HashSet<String> {
    DEFAULT_MODELS.iter().map(|id| id.to_string()).collect()
}

/// Whether an identifier belongs to a recognized chat model family.
pub fn is_recognized_family(id: &str) -> bool {
    MODEL_FAMILY.is_match(id)
}

/// Per-credential model discovery over the models-listing endpoint.
#[derive(Debug, Clone)]
pub struct ModelDirectory {
    base_url: String,
    http_client: reqwest::Client,
}

impl ModelDirectory {
    /// Creates a directory for a provider endpoint. A trailing slash on the
    /// base URL is stripped.
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// One `GET {base_url}/models` call for one credential, filtered to
    /// recognized families.
    async fn fetch_models(&self, api_key: &SecretString) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(api_key.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::ApiError {
                code: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
                details: None,
            });
        }

        let raw: serde_json::Value = response.json().await?;
        let data = raw
            .get("data")
            .and_then(|data| data.as_array())
            .ok_or_else(|| LlmError::ParseError("models response has no data array".to_string()))?;

        Ok(data
            .iter()
            .filter_map(|model| model.get("id").and_then(|id| id.as_str()))
            .filter(|id| is_recognized_family(id))
            .map(str::to_string)
            .collect())
    }
}

#[async_trait]
impl ModelListingCapability for ModelDirectory {
    async fn list_models(&self, api_keys: &[SecretString]) -> HashSet<String> {
        let mut models = default_models();
        if api_keys.is_empty() {
            return models;
        }

        // Per-credential queries are independent; the merge below is a
        // commutative, idempotent set union, so no ordering is needed.
        let queries = api_keys.iter().map(|key| self.fetch_models(key));
        for outcome in join_all(queries).await {
            match outcome {
                Ok(ids) => {
                    debug!(count = ids.len(), "merged models for one credential");
                    models.extend(ids);
                }
                Err(err) => {
                    warn!(error = %err, "skipping model listing for one credential");
                }
            }
        }
        models
    }
}
