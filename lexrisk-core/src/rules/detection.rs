use super::assessment::{assess_clause_risk, explain};
use super::patterns::PatternLibrary;
use crate::config::OffsetMode;
use crate::types::{DetectedClause, Sentence};

/// Matches segmented fragments against the pattern library.
pub struct ClauseDetector<'a> {
    library: &'a PatternLibrary,
    offset_mode: OffsetMode,
}

impl<'a> ClauseDetector<'a> {
    pub fn new(library: &'a PatternLibrary, offset_mode: OffsetMode) -> Self {
        Self {
            library,
            offset_mode,
        }
    }

    /// One clause per (fragment, clause type) pair that matches.
    ///
    /// Types are tried in library order and, within a type, the first
    /// matching pattern ends the search for that type. Other types are still
    /// tried against the same fragment.
    pub fn detect(&self, sentences: &[Sentence]) -> Vec<DetectedClause> {
        let mut clauses = Vec::new();
        let mut running_offset = 0;

        for sentence in sentences {
            let fragment_len = sentence.char_len();
            let (start_position, end_position) = match self.offset_mode {
                OffsetMode::Fragment => (running_offset, running_offset + fragment_len),
                OffsetMode::Source => (sentence.source_start, sentence.source_end),
            };

            for entry in self.library.entries() {
                if let Some(pattern) = entry.first_match(&sentence.text) {
                    let risk_level = assess_clause_risk(&sentence.text, entry.clause_type);
                    tracing::debug!(
                        clause_type = %entry.clause_type,
                        risk_level = %risk_level,
                        pattern = pattern.as_str(),
                        "clause detected"
                    );

                    clauses.push(DetectedClause {
                        clause_type: entry.clause_type,
                        risk_level,
                        content: sentence.text.clone(),
                        explanation: explain(entry.clause_type, risk_level),
                        start_position,
                        end_position,
                    });
                }
            }

            running_offset += fragment_len;
        }

        clauses
    }
}
