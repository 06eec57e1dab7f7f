//! Chat session state: the document corpus and the visible transcript.
//!
//! A [`Session`] replaces the process-wide mutable state a tool like
//! this would otherwise accumulate: the caller owns the session and
//! passes it into each operation, keeping single-writer semantics
//! explicit. The corpus is replaced wholesale whenever documents are
//! processed and cleared wholesale on reset; there is no per-document
//! lifecycle beyond that.

use std::path::PathBuf;

use crate::chunk::chunk_text;
use crate::config::ChunkingConfig;
use crate::extract::{extract_file, source_name};
use crate::models::{ChatMessage, Chunk};

/// Outcome of a failed session operation.
///
/// A closed taxonomy rendered to user-facing text via `Display`; none
/// of these are fatal and the session survives any of them. `NoMatch`
/// and `EmptyCorpus` are deliberately distinct: the latter indicates a
/// usage-order problem ("process documents first"), not a retrieval
/// miss.
#[derive(Debug)]
pub enum ChatError {
    /// Processing was requested with zero files; the corpus is unchanged.
    NoDocuments,
    /// A question was asked before any documents were processed.
    EmptyCorpus,
    /// No chunk shares a word with the question. A normal outcome,
    /// reported rather than answered.
    NoMatch,
    /// The completion call failed (network, auth, non-success status).
    Upstream(String),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::NoDocuments => write!(f, "No files provided. Nothing was processed."),
            ChatError::EmptyCorpus => {
                write!(f, "No documents loaded. Please process documents first.")
            }
            ChatError::NoMatch => {
                write!(f, "No relevant information found in the processed documents.")
            }
            ChatError::Upstream(e) => write!(f, "Error communicating with the completion API: {}", e),
        }
    }
}

impl std::error::Error for ChatError {}

/// Counts reported after processing a batch of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Files extracted and chunked successfully.
    pub files: usize,
    /// Files skipped because extraction failed.
    pub skipped: usize,
    /// Chunks now in the corpus.
    pub chunks: usize,
}

impl std::fmt::Display for IngestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s) processed, {} text chunk(s) created",
            self.files, self.chunks
        )?;
        if self.skipped > 0 {
            write!(f, ", {} file(s) skipped", self.skipped)?;
        }
        Ok(())
    }
}

/// In-memory chat session: document corpus plus conversation transcript.
#[derive(Debug, Default)]
pub struct Session {
    chunks: Vec<Chunk>,
    transcript: Vec<ChatMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract and chunk the given files, replacing the corpus wholesale.
    ///
    /// Zero paths is an error ([`ChatError::NoDocuments`]) and leaves
    /// the existing corpus untouched. Files whose extraction fails are
    /// skipped and counted; a skipped file never aborts the batch.
    pub fn process_files(
        &mut self,
        paths: &[PathBuf],
        config: &ChunkingConfig,
    ) -> Result<IngestStats, ChatError> {
        if paths.is_empty() {
            return Err(ChatError::NoDocuments);
        }

        let mut new_chunks = Vec::new();
        let mut files = 0;
        let mut skipped = 0;

        for path in paths {
            match extract_file(path) {
                Ok(text) => {
                    let name = source_name(path);
                    new_chunks.extend(chunk_text(
                        &name,
                        &text,
                        config.chunk_size,
                        config.min_chars,
                    ));
                    files += 1;
                }
                Err(e) => {
                    eprintln!("Skipping {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        self.chunks = new_chunks;
        Ok(IngestStats {
            files,
            skipped,
            chunks: self.chunks.len(),
        })
    }

    /// Reset corpus and transcript to empty.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.transcript.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(content));
    }
}
