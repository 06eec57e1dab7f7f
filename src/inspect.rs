//! Extraction and chunking dry-run.
//!
//! Reports what processing *would* load, without touching a session or
//! calling the completion API: per-file character and chunk counts,
//! plus a total. Useful for checking that a document extracts cleanly
//! and for tuning `[chunking]` settings.

use std::path::PathBuf;

use anyhow::Result;

use crate::chunk::chunk_text;
use crate::config::Config;
use crate::extract::{extract_file, source_name};
use crate::session::ChatError;

/// Print per-file extraction and chunking counts for the given files.
pub fn run_inspect(config: &Config, files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        println!("{}", ChatError::NoDocuments);
        return Ok(());
    }

    let mut total = 0;
    for path in files {
        match extract_file(path) {
            Ok(text) => {
                let name = source_name(path);
                let chunks = chunk_text(
                    &name,
                    &text,
                    config.chunking.chunk_size,
                    config.chunking.min_chars,
                );
                println!(
                    "{}: {} chars extracted, {} chunk(s)",
                    name,
                    text.chars().count(),
                    chunks.len()
                );
                total += chunks.len();
            }
            Err(e) => {
                println!("{}: skipped ({})", path.display(), e);
            }
        }
    }

    println!("Total: {} chunk(s)", total);
    Ok(())
}
