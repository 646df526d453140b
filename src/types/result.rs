//! Terminal chat outcome.

use serde::{Deserialize, Serialize};

/// Outcome of one chat send as the UI consumes it.
///
/// A failed result always carries a short human-readable reply explaining
/// the failure, never a raw error or provider body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResult {
    /// Whether the provider produced a reply
    pub success: bool,
    /// Reply text on success, user-facing diagnostic on failure
    pub reply: String,
}

impl ChatResult {
    /// Creates a successful result. An empty reply is valid: the provider
    /// may legitimately return no text.
    pub fn ok(reply: impl Into<String>) -> Self {
        Self {
            success: true,
            reply: reply.into(),
        }
    }

    /// Creates a failed result. The reply must be a non-empty user-facing
    /// message.
    pub fn failure(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        debug_assert!(!reply.is_empty(), "failure replies must explain the failure");
        Self {
            success: false,
            reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_allows_empty_reply() {
        let result = ChatResult::ok("");
        assert!(result.success);
        assert!(result.reply.is_empty());
    }

    #[test]
    fn failure_carries_message() {
        let result = ChatResult::failure("something went wrong");
        assert!(!result.success);
        assert!(!result.reply.is_empty());
    }
}
