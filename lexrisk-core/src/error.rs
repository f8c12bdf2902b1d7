use crate::types::ClauseType;
use thiserror::Error;

/// Failures raised by the analysis engine itself.
///
/// Extraction and config loading report through `anyhow` instead; those
/// belong to the collaborators around the engine.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Text cannot be empty for analysis")]
    EmptyInput,

    #[error("invalid analyzer config: {0}")]
    InvalidConfig(String),

    #[error("invalid {clause_type} pattern '{pattern}': {source}")]
    InvalidPattern {
        clause_type: ClauseType,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
