// Main rules module - one file per analysis stage, in pipeline order:
// - segmentation.rs: Sentence splitting and input validation
// - patterns.rs: Ordered clause pattern library
// - detection.rs: Clause detection over segmented fragments
// - assessment.rs: Per-clause risk points and keyword heuristics
// - scoring.rs: Clause-count estimate and document score aggregation
// - recommendations.rs: Remediation advice
// - summary.rs: Templated synopsis

pub mod segmentation;
pub mod patterns;
pub mod detection;
pub mod assessment;
pub mod scoring;
pub mod recommendations;
pub mod summary;

pub use assessment::{assess_clause_risk, HIGH_RISK_KEYWORDS};
pub use detection::ClauseDetector;
pub use patterns::{ClausePatterns, PatternLibrary, CLAUSE_PATTERNS};
pub use recommendations::{generate_recommendations, prioritized};
pub use scoring::{aggregate, estimate_total_clauses, ScoreCard};
pub use segmentation::split_into_sentences;
pub use summary::generate_summary;
