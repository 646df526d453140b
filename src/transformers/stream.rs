//! Completed result to reply-chunk sequence conversion.
//!
//! The UI's streaming consumer iterates a lazy sequence of partial-text
//! chunks. The transport is not incremental, so the sequence degenerates to
//! length exactly one: the whole reply is materialized before the only chunk
//! is produced, which is why no cancellation is threaded through here. If
//! the transport ever gains real incremental delivery, the contract
//! generalizes to N chunks whose concatenated texts equal the final reply.

use std::pin::Pin;

use futures_util::Stream;
use serde::{Deserialize, Serialize};

use crate::types::ChatResult;

/// One unit of the incremental reply sequence, in the candidates/parts shape
/// the UI consumer reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamChunk {
    pub candidates: Vec<Candidate>,
}

/// A single reply candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub content: CandidateContent,
}

/// Candidate content as an ordered part list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateContent {
    pub parts: Vec<TextPart>,
}

/// A text part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextPart {
    pub text: String,
}

impl StreamChunk {
    /// Wraps reply text as a single-candidate, single-part chunk.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![TextPart { text: text.into() }],
                },
            }],
        }
    }

    /// Concatenated text across all candidates and parts.
    pub fn text(&self) -> String {
        self.candidates
            .iter()
            .flat_map(|candidate| &candidate.content.parts)
            .map(|part| part.text.as_str())
            .collect()
    }
}

/// Finite, non-restartable sequence of reply chunks.
pub type ChatReplyStream = Pin<Box<dyn Stream<Item = StreamChunk> + Send>>;

/// Converts a completed result into a sequence of exactly one chunk.
///
/// A failure carries `Error: ` plus its diagnostic as the chunk text; a
/// success carries the raw reply unmodified.
pub fn into_chunk_stream(result: ChatResult) -> ChatReplyStream {
    let text = if result.success {
        result.reply
    } else {
        format!("Error: {}", result.reply)
    };
    Box::pin(async_stream::stream! {
        yield StreamChunk::from_text(text);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn success_yields_exactly_one_unmodified_chunk() {
        let chunks: Vec<StreamChunk> = into_chunk_stream(ChatResult::ok("hello")).collect().await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "hello");
    }

    #[tokio::test]
    async fn failure_is_prefixed_with_error_marker() {
        let chunks: Vec<StreamChunk> = into_chunk_stream(ChatResult::failure("key missing"))
            .collect()
            .await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "Error: key missing");
    }

    #[tokio::test]
    async fn empty_success_reply_still_yields_one_chunk() {
        let chunks: Vec<StreamChunk> = into_chunk_stream(ChatResult::ok("")).collect().await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "");
    }

    #[test]
    fn chunk_shape_matches_consumer_contract() {
        let chunk = StreamChunk::from_text("hi");
        let raw = serde_json::to_value(&chunk).unwrap();
        assert_eq!(raw["candidates"][0]["content"]["parts"][0]["text"], "hi");
    }
}
