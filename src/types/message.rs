//! Chat message types.

use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// Message role.
///
/// The vocabulary is closed; the wire mapping is the lowercase variant name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One entry of a conversation history.
///
/// Immutable once sent: the role is fixed at creation and the adaptation
/// layer only ever reads history entries. Attachments are owned exclusively
/// by their message and serialize into the wire shape in their stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role
    pub role: MessageRole,
    /// Text content, possibly empty when attachments carry the payload
    pub content: String,
    /// Inline file attachments, already encoded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl ChatMessage {
    /// Creates a user message builder.
    pub fn user<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::User, content)
    }

    /// Creates an assistant message builder.
    pub fn assistant<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::Assistant, content)
    }

    /// Creates a system message builder.
    pub fn system<S: Into<String>>(content: S) -> ChatMessageBuilder {
        ChatMessageBuilder::new(MessageRole::System, content)
    }

    /// Whether this message carries at least one attachment.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Chat message builder.
#[derive(Debug, Clone)]
pub struct ChatMessageBuilder {
    role: MessageRole,
    content: String,
    attachments: Vec<Attachment>,
}

impl ChatMessageBuilder {
    fn new<S: Into<String>>(role: MessageRole, content: S) -> Self {
        Self {
            role,
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    /// Appends an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends several attachments, preserving order.
    pub fn with_attachments<I: IntoIterator<Item = Attachment>>(mut self, attachments: I) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Builds the message.
    pub fn build(self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content,
            attachments: self.attachments,
        }
    }
}

/// The trailing prompt of a send: user text plus uploaded files that are not
/// yet part of the conversation history.
#[derive(Debug, Clone, Default)]
pub struct UserPrompt {
    /// Prompt text, possibly blank when files carry the payload
    pub text: String,
    /// Uploaded files, already encoded
    pub attachments: Vec<Attachment>,
}

impl UserPrompt {
    /// Creates a text-only prompt.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Appends an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends several attachments, preserving order.
    pub fn with_attachments<I: IntoIterator<Item = Attachment>>(mut self, attachments: I) -> Self {
        self.attachments.extend(attachments);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&MessageRole::User).unwrap(),
            "\"user\""
        );
        assert_eq!(
            serde_json::to_string(&MessageRole::System).unwrap(),
            "\"system\""
        );
    }

    #[test]
    fn builder_preserves_attachment_order() {
        let first = Attachment::from_bytes("a.png", b"\x89PNG\r\n\x1a\nxxxx");
        let second = Attachment::from_bytes("b.png", b"\x89PNG\r\n\x1a\nyyyy");
        let msg = ChatMessage::user("look")
            .with_attachment(first.clone())
            .with_attachment(second.clone())
            .build();
        assert_eq!(msg.attachments[0].name, "a.png");
        assert_eq!(msg.attachments[1].name, "b.png");
        assert!(msg.has_attachments());
    }

    #[test]
    fn plain_message_has_no_attachments() {
        let msg = ChatMessage::assistant("hi").build();
        assert!(!msg.has_attachments());
        assert_eq!(msg.content, "hi");
    }
}
