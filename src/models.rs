//! Core data models used throughout docchat.
//!
//! These types represent the chunks and chat messages that flow through
//! the processing and retrieval pipeline.

use serde::Serialize;

/// A bounded, non-overlapping span of document text retained for retrieval.
///
/// Chunks are created by [`chunk_text`](crate::chunk::chunk_text) and are
/// guaranteed to be whitespace-trimmed with a trimmed length above the
/// configured minimum. A chunk carries the name of the file it came from
/// so results can be attributed to a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Name of the originating file.
    pub source: String,
    /// Position among the surviving chunks of this source, starting at 0.
    pub index: usize,
    /// Trimmed chunk text.
    pub text: String,
}

/// A single message in a chat conversation.
///
/// Doubles as the wire shape for the completion API payload, so the
/// `role`/`content` field names match the OpenAI-compatible message
/// object.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role: `"system"`, `"user"`, or `"assistant"`.
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}
