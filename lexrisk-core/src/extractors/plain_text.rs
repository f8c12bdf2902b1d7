use super::extractor::{clean_extracted_text, TextExtractor};
use anyhow::{Context, Result};
use std::path::Path;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

/// Extractor for documents that are already UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).context("document is not valid UTF-8")?;
        let cleaned = clean_extracted_text(text)?;
        tracing::info!(chars = cleaned.chars().count(), "text extraction completed");
        Ok(cleaned)
    }

    fn name(&self) -> &str {
        "PlainText"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
