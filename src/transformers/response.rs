//! Provider response to reply text conversion.

use serde_json::Value;

/// Extracts the first completion's message text.
///
/// A response that omits any of the expected fields collapses to the empty
/// string rather than an error; the provider replying with nothing is a
/// valid outcome.
pub fn extract_reply_text(raw: &Value) -> String {
    raw.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
