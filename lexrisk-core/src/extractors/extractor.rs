// Extractor abstraction for document intake
//
// Implementations own format parsing; the shared clean-up below is applied
// to whatever text they produce so the analyzer always sees the same shape.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Largest accepted document, matching the upload limit of the service layer
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static CONTROL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x09\x0B\x0C\x0E-\x1F\x7F]").unwrap());

/// Extractor trait - converts a document into plain text
pub trait TextExtractor {
    /// Convert raw document bytes into text
    fn extract(&self, bytes: &[u8]) -> Result<String>;

    /// Convenience method: read the file, check its size, and extract
    fn extract_file(&self, input: &Path) -> Result<String> {
        if !self.supports_file_type(input) {
            return Err(anyhow!(
                "{} does not support file type of {}",
                self.name(),
                input.display()
            ));
        }

        let bytes = std::fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        if bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(anyhow!(
                "File size exceeds maximum allowed size of {} bytes",
                MAX_DOCUMENT_BYTES
            ));
        }

        self.extract(&bytes)
    }

    /// Get extractor name for debugging/logging
    fn name(&self) -> &str;

    /// Check if extractor supports the given file type
    fn supports_file_type(&self, path: &Path) -> bool;
}

/// Normalize extracted text and reject documents with no text at all.
///
/// Whitespace runs, line breaks included, collapse to one space. The
/// analyzer sees a single line of text.
pub fn clean_extracted_text(text: &str) -> Result<String> {
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(text, " ");
    let stripped = CONTROL_CHAR_REGEX.replace_all(&collapsed, "");
    let cleaned = stripped.trim();

    if cleaned.is_empty() {
        return Err(anyhow!("No text could be extracted from the document"));
    }
    Ok(cleaned.to_string())
}
