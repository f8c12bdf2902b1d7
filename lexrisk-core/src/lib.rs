// Lexrisk Core Library
//
// Deterministic clause-risk analysis for legal document text.
// Main interface: RiskAnalyzer turns extracted text into an AnalysisResult.

pub mod types;
pub mod error;
pub mod config;
pub mod extractors;
pub mod rules;
pub mod processor;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::AnalysisError;
pub use config::{AnalyzerConfig, OffsetMode};
pub use extractors::{PlainTextExtractor, TextExtractor};
pub use processor::{PipelineStages, RiskAnalyzer, StepProfiler};
pub use rules::prioritized;
