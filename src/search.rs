//! Keyword-overlap retrieval over the in-memory corpus.
//!
//! Retrieval is deliberately simple: both the query and every chunk are
//! normalized into sets of lowercase alphanumeric tokens, and chunks are
//! scored by the number of distinct tokens they share with the query.
//! There is no index and no early termination; every query is a full
//! linear scan. That is acceptable because the corpus is small and held
//! entirely in memory.

use std::collections::HashSet;

use crate::models::Chunk;

/// A chunk paired with its overlap score, used to rank and select the
/// top-k before being discarded.
#[derive(Debug, Clone)]
pub struct ScoredChunk<'a> {
    /// Count of distinct normalized words shared with the query.
    pub score: usize,
    pub chunk: &'a Chunk,
}

/// Normalize text into a set of lowercase alphanumeric word tokens.
///
/// Lowercases the input, replaces every character that is not an ASCII
/// lowercase letter, ASCII digit, or whitespace with a space, then
/// splits on whitespace. Duplicates collapse. Empty or whitespace-only
/// input yields an empty set.
pub fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

/// Return at most `top_k` chunks from `corpus`, highest overlap first.
///
/// An empty query word set short-circuits to an empty result rather
/// than scoring everything as zero. Zero-overlap chunks are excluded
/// entirely. The sort is stable on score alone, so chunks with equal
/// scores keep their corpus order; results are deterministic for a
/// given corpus and query.
pub fn retrieve<'a>(query: &str, corpus: &'a [Chunk], top_k: usize) -> Vec<ScoredChunk<'a>> {
    let query_words = word_set(query);
    if query_words.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredChunk<'a>> = corpus
        .iter()
        .filter_map(|chunk| {
            let chunk_words = word_set(&chunk.text);
            let score = query_words.intersection(&chunk_words).count();
            if score > 0 {
                Some(ScoredChunk { score, chunk })
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_k);
    scored
}
