//! Text Extractors
//!
//! The boundary between raw documents and the analysis engine. Extractors turn
//! a document blob into one plain-text string; everything after this point
//! works with text only and is format-agnostic.
//!
//! ```text
//! Document (TXT, and upstream PDF/DOC/DOCX services)
//!     ↓
//! [TextExtractor]
//!     ↓
//! String
//!     ↓
//! [RiskAnalyzer]
//!     ↓
//! AnalysisResult
//! ```
//!
//! Binary formats are handled by external services that implement
//! `TextExtractor`; this crate ships `PlainTextExtractor` only.

pub mod extractor;
pub mod plain_text;

pub use extractor::{clean_extracted_text, TextExtractor, MAX_DOCUMENT_BYTES};
pub use plain_text::PlainTextExtractor;
