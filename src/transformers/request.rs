//! Conversation history to `chat/completions` body conversion.
//!
//! The conversion is deterministic: identical history, prompt, and
//! attachments yield a byte-identical body. No timestamps or generated ids
//! enter the payload.

use serde_json::{Value, json};

use crate::config::{ChatClientConfig, ChatOptions};
use crate::types::{Attachment, ChatMessage, MessageRole, UserPrompt};

/// Builds the full request body: generation parameters plus the normalized
/// message sequence.
///
/// When `prompt` is present it is always appended as the final `user`
/// message, even if the history already ends in one; the one-shot path passes
/// `None` and sends the history as-is, which must then be non-empty.
pub fn build_chat_body(
    config: &ChatClientConfig,
    options: &ChatOptions,
    history: &[ChatMessage],
    prompt: Option<&UserPrompt>,
) -> Value {
    if prompt.is_none() {
        debug_assert!(!history.is_empty(), "one-shot sends need a non-empty history");
    }
    let model = options.model.as_deref().unwrap_or(&config.model);
    let temperature = options.temperature.unwrap_or(config.temperature);
    let max_tokens = options.max_tokens.unwrap_or(config.max_tokens);
    json!({
        "model": model,
        "temperature": temperature,
        "max_tokens": max_tokens,
        "messages": convert_messages(options.system_prompt.as_deref(), history, prompt),
    })
}

/// Normalizes the message sequence: optional system prefix, history entries
/// in order, then the trailing prompt as the final `user` message.
pub fn convert_messages(
    system_prompt: Option<&str>,
    history: &[ChatMessage],
    prompt: Option<&UserPrompt>,
) -> Vec<Value> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    if let Some(text) = system_prompt
        && !text.trim().is_empty()
    {
        messages.push(json!({ "role": "system", "content": text }));
    }
    for message in history {
        messages.push(convert_message(message));
    }
    if let Some(prompt) = prompt {
        messages.push(json!({
            "role": "user",
            "content": prompt_content(prompt),
        }));
    }
    messages
}

/// Maps one history entry to the wire shape.
///
/// Only user messages expand attachments into multi-part content; the
/// endpoint rejects image parts on other roles, so their attachments stay
/// out of the payload.
fn convert_message(message: &ChatMessage) -> Value {
    if message.role == MessageRole::User && message.has_attachments() {
        json!({
            "role": message.role,
            "content": multipart_content(&message.content, &message.attachments),
        })
    } else {
        json!({ "role": message.role, "content": message.content })
    }
}

fn prompt_content(prompt: &UserPrompt) -> Value {
    if prompt.attachments.is_empty() {
        Value::String(prompt.text.clone())
    } else {
        multipart_content(&prompt.text, &prompt.attachments)
    }
}

/// Multi-part body: a text part first when the text is non-blank, then one
/// image part per attachment in attachment order.
fn multipart_content(text: &str, attachments: &[Attachment]) -> Value {
    let mut parts = Vec::with_capacity(attachments.len() + 1);
    if !text.trim().is_empty() {
        parts.push(json!({ "type": "text", "text": text }));
    }
    for attachment in attachments {
        parts.push(json!({
            "type": "image_url",
            "image_url": { "url": attachment.data_url },
        }));
    }
    Value::Array(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn test_config() -> ChatClientConfig {
        ChatClientConfig::new().with_api_key("test-key")
    }

    fn image_attachment(name: &str) -> Attachment {
        Attachment::from_bytes(name, b"\x89PNG\r\n\x1a\n_pixels_")
    }

    #[test]
    fn identical_input_yields_byte_identical_body() {
        let history = vec![
            ChatMessage::user("first").build(),
            ChatMessage::assistant("second").build(),
        ];
        let prompt = UserPrompt::new("third").with_attachment(image_attachment("x.png"));
        let options = ChatOptions::default();

        let a = build_chat_body(&test_config(), &options, &history, Some(&prompt));
        let b = build_chat_body(&test_config(), &options, &history, Some(&prompt));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn trailing_prompt_is_always_the_last_user_message() {
        let history = vec![
            ChatMessage::user("earlier question").build(),
            ChatMessage::user("unanswered question").build(),
        ];
        let prompt = UserPrompt::new("latest");

        let messages = convert_messages(None, &history, Some(&prompt));
        assert_eq!(messages.len(), 3);
        let last = messages.last().unwrap();
        assert_eq!(last["role"], "user");
        assert_eq!(last["content"], "latest");
    }

    #[test]
    fn user_message_with_attachment_becomes_text_then_image_parts() {
        let history = vec![
            ChatMessage::user("a")
                .with_attachment(image_attachment("img1.png"))
                .build(),
        ];
        let messages = convert_messages(None, &history, None);

        let content = messages[0]["content"].as_array().expect("multi-part");
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], "a");
        assert_eq!(content[1]["type"], "image_url");
        assert!(
            content[1]["image_url"]["url"]
                .as_str()
                .unwrap()
                .starts_with("data:image/png;base64,")
        );
    }

    #[test]
    fn blank_text_is_omitted_from_multipart_content() {
        let history = vec![
            ChatMessage::user("   ")
                .with_attachment(image_attachment("only.png"))
                .build(),
        ];
        let messages = convert_messages(None, &history, None);

        let content = messages[0]["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "image_url");
    }

    #[test]
    fn attachments_keep_their_order() {
        let prompt = UserPrompt::new("both")
            .with_attachment(image_attachment("first.png"))
            .with_attachment(image_attachment("second.png"));
        let messages = convert_messages(None, &[], Some(&prompt));

        let content = messages[0]["content"].as_array().unwrap();
        let urls: Vec<&str> = content[1..]
            .iter()
            .map(|part| part["image_url"]["url"].as_str().unwrap())
            .collect();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn plain_messages_serialize_as_string_content() {
        let history = vec![
            ChatMessage::system("be brief").build(),
            ChatMessage::user("hi").build(),
            ChatMessage::assistant("hello").build(),
        ];
        let messages = convert_messages(None, &history, None);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"].is_string());
        assert!(messages[1]["content"].is_string());
        assert!(messages[2]["content"].is_string());
    }

    #[test]
    fn assistant_attachments_are_not_expanded() {
        let history = vec![
            ChatMessage::assistant("see above")
                .with_attachment(image_attachment("ignored.png"))
                .build(),
        ];
        let messages = convert_messages(None, &history, None);
        assert!(messages[0]["content"].is_string());
    }

    #[test]
    fn system_prompt_is_prepended() {
        let history = vec![ChatMessage::user("hi").build()];
        let messages = convert_messages(Some("always answer in rhyme"), &history, None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "always answer in rhyme");
    }

    #[test]
    fn options_override_config_parameters() {
        let options = ChatOptions::new()
            .with_model("gpt-4.1")
            .with_temperature(0.2)
            .with_max_tokens(64);
        let history = vec![ChatMessage::user("hi").build()];

        let body = build_chat_body(&test_config(), &options, &history, None);
        assert_eq!(body["model"], "gpt-4.1");
        assert_eq!(body["max_tokens"], 64);
    }
}
