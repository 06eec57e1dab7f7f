//! Text extraction from local document files.
//!
//! Extraction is per-file: callers supply a path and get back plain
//! UTF-8 text. PDF parsing is delegated to the `pdf-extract` crate;
//! `.txt` and `.md` files are read as-is. Unsupported extensions are an
//! error so the caller can skip the file and keep going.

use std::path::Path;

/// Extraction error. Failures never panic; the processing pipeline
/// skips the file and reports it.
#[derive(Debug)]
pub enum ExtractError {
    UnsupportedExtension(String),
    Pdf(String),
    Io(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnsupportedExtension(ext) => {
                write!(f, "unsupported file extension: {}", ext)
            }
            ExtractError::Pdf(e) => write!(f, "PDF extraction failed: {}", e),
            ExtractError::Io(e) => write!(f, "failed to read file: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extract plain text from a document file, dispatching on extension.
///
/// Supported: `.pdf` (via pdf-extract), `.txt` and `.md` (read
/// directly). The extension match is case-insensitive.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        "txt" | "md" => {
            std::fs::read_to_string(path).map_err(|e| ExtractError::Io(e.to_string()))
        }
        other => Err(ExtractError::UnsupportedExtension(other.to_string())),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Display name for a source file: the file name when available,
/// otherwise the full path.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unsupported_extension() {
        let err = extract_file(Path::new("report.docx")).unwrap_err();
        match err {
            ExtractError::UnsupportedExtension(ext) => assert_eq!(ext, "docx"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_file(Path::new("/nonexistent/notes.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_extension_case_insensitive() {
        // Dispatch happens before I/O, so a missing .PDF must fail as
        // an I/O error, not an unsupported extension.
        let err = extract_file(Path::new("/nonexistent/REPORT.PDF")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(&PathBuf::from("/tmp/docs/a.pdf")), "a.pdf");
        assert_eq!(source_name(&PathBuf::from("b.txt")), "b.txt");
    }
}
