use crate::error::AnalysisError;
use crate::types::ClauseType;
use regex::{Regex, RegexBuilder};

/// Built-in clause detectors, in canonical detection order.
///
/// Order matters twice: types are tried in this order for every fragment, and
/// within a type the first matching pattern wins.
pub const CLAUSE_PATTERNS: &[(ClauseType, &[&str])] = &[
    (
        ClauseType::NonCompete,
        &[
            r"non[- ]compete|covenant not to compete",
            r"restrict.*compet(e|ing|ition)",
            r"prohibit.*similar business",
        ],
    ),
    (
        ClauseType::Indemnity,
        &[
            r"indemnif(y|ication)|hold harmless",
            r"defend.*against.*claim",
            r"reimburse.*loss(es)?",
        ],
    ),
    (
        ClauseType::Confidentiality,
        &[
            r"confidential(ity)?|proprietary information",
            r"non[- ]disclosure",
            r"trade secret",
        ],
    ),
    (
        ClauseType::PaymentTerms,
        &[
            r"payment.*due|amount payable",
            r"late fee|interest.*overdue",
            r"invoice|billing",
        ],
    ),
    (
        ClauseType::Termination,
        &[
            r"terminat(e|ion)|cancel(lation)?",
            r"end.*agreement|conclude.*contract",
            r"notice period|advance notice",
        ],
    ),
    (
        ClauseType::LiabilityLimitation,
        &[
            r"limit(ation)? of liability",
            r"exclude.*liability|not liable for",
            r"maximum liability",
        ],
    ),
];

/// Compiled detectors for one clause type.
#[derive(Debug, Clone)]
pub struct ClausePatterns {
    pub clause_type: ClauseType,
    pub patterns: Vec<Regex>,
}

impl ClausePatterns {
    /// First pattern (in list order) that matches anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<&Regex> {
        self.patterns.iter().find(|pattern| pattern.is_match(text))
    }
}

/// Read-only catalog of clause detectors.
///
/// An ordered `Vec`, never a map: detection order must not depend on hashing.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    entries: Vec<ClausePatterns>,
}

impl PatternLibrary {
    /// Compile the built-in catalog.
    pub fn standard() -> Result<Self, AnalysisError> {
        Self::from_table(CLAUSE_PATTERNS)
    }

    pub fn from_table(table: &[(ClauseType, &[&str])]) -> Result<Self, AnalysisError> {
        let mut entries = Vec::with_capacity(table.len());
        for (clause_type, sources) in table {
            let mut patterns = Vec::with_capacity(sources.len());
            for source in sources.iter() {
                let pattern = RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| AnalysisError::InvalidPattern {
                        clause_type: *clause_type,
                        pattern: source.to_string(),
                        source: e,
                    })?;
                patterns.push(pattern);
            }
            entries.push(ClausePatterns {
                clause_type: *clause_type,
                patterns,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ClausePatterns] {
        &self.entries
    }

    pub fn clause_types(&self) -> impl Iterator<Item = ClauseType> + '_ {
        self.entries.iter().map(|entry| entry.clause_type)
    }

    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.patterns.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_is_in_canonical_order() {
        let library = PatternLibrary::standard().unwrap();
        let types: Vec<ClauseType> = library.clause_types().collect();
        assert_eq!(types, ClauseType::ALL.to_vec());
        assert_eq!(library.pattern_count(), 18);
        assert!(library.entries().iter().all(|e| e.patterns.len() == 3));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let library = PatternLibrary::standard().unwrap();
        let non_compete = &library.entries()[0];
        assert!(non_compete.first_match("A COVENANT NOT TO COMPETE applies").is_some());
        assert!(non_compete.first_match("Non Compete obligations").is_some());
    }

    #[test]
    fn test_first_match_respects_list_order() {
        let library = PatternLibrary::standard().unwrap();
        let termination = &library.entries()[4];
        let hit = termination
            .first_match("Either party may terminate with advance notice")
            .unwrap();
        assert_eq!(hit.as_str(), r"terminat(e|ion)|cancel(lation)?");
    }

    #[test]
    fn test_invalid_pattern_is_reported_not_panicked() {
        let table: &[(ClauseType, &[&str])] = &[(ClauseType::Indemnity, &["indemnif(y"])];
        let err = PatternLibrary::from_table(table).unwrap_err();
        match err {
            AnalysisError::InvalidPattern { clause_type, pattern, .. } => {
                assert_eq!(clause_type, ClauseType::Indemnity);
                assert_eq!(pattern, "indemnif(y");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
