//! Data types shared between the UI layer and the adaptation layer.

pub mod attachment;
pub mod message;
pub mod result;

pub use attachment::Attachment;
pub use message::{ChatMessage, ChatMessageBuilder, MessageRole, UserPrompt};
pub use result::ChatResult;
