//! Fixed-window text chunker.
//!
//! Splits extracted document text into non-overlapping windows of
//! `chunk_size` characters (the final window may be shorter). Each
//! window is whitespace-trimmed, and windows whose trimmed length is at
//! or below `min_chars` are discarded as too short to carry retrievable
//! signal. Surviving windows keep their left-to-right order.
//!
//! Windows are counted in characters, not bytes, so window boundaries
//! always land on valid UTF-8 char boundaries. Because windows never
//! overlap, a concept spanning a window boundary may be split across
//! two chunks; that is an accepted limitation of this chunker.

use crate::models::Chunk;

/// Split `text` into chunks of at most `chunk_size` characters.
///
/// Returns surviving chunks with contiguous indices starting at 0.
/// Empty input, or input where every window trims to `min_chars`
/// characters or fewer, yields an empty vec.
pub fn chunk_text(source: &str, text: &str, chunk_size: usize, min_chars: usize) -> Vec<Chunk> {
    if chunk_size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut index = 0;
    let mut rest = text;

    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(chunk_size)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (window, tail) = rest.split_at(split);
        let trimmed = window.trim();
        if trimmed.chars().count() > min_chars {
            chunks.push(Chunk {
                source: source.to_string(),
                index,
                text: trimmed.to_string(),
            });
            index += 1;
        }
        rest = tail;
    }

    chunks
}
