use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The schema version stamped on every serialized analysis.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

// ===== CLASSIFICATION ENUMS =====
// Variant order is significant: ClauseType order drives detection order,
// RiskLevel and Priority order drive comparisons.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseType {
    NonCompete,
    Indemnity,
    Confidentiality,
    PaymentTerms,
    Termination,
    LiabilityLimitation,
}

impl ClauseType {
    /// All clause types in canonical detection order.
    pub const ALL: [ClauseType; 6] = [
        ClauseType::NonCompete,
        ClauseType::Indemnity,
        ClauseType::Confidentiality,
        ClauseType::PaymentTerms,
        ClauseType::Termination,
        ClauseType::LiabilityLimitation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::NonCompete => "NON_COMPETE",
            ClauseType::Indemnity => "INDEMNITY",
            ClauseType::Confidentiality => "CONFIDENTIALITY",
            ClauseType::PaymentTerms => "PAYMENT_TERMS",
            ClauseType::Termination => "TERMINATION",
            ClauseType::LiabilityLimitation => "LIABILITY_LIMITATION",
        }
    }

    /// Human-readable label used in generated explanations ("non compete").
    pub fn label(&self) -> String {
        self.as_str().to_lowercase().replace('_', " ")
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// HIGH and CRITICAL are the levels that trigger recommendations and review.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }

    /// Phrase used in clause explanations.
    pub fn risk_phrase(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical risk",
            RiskLevel::High => "high risk",
            RiskLevel::Medium => "moderate risk",
            RiskLevel::Low => "low risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    ClauseModification,
    ClauseAddition,
    ClauseRemoval,
    RiskMitigation,
    ComplianceImprovement,
    LegalReviewRequired,
}

// ===== PIPELINE RECORDS =====

/// A candidate clause fragment produced by the sentence segmenter.
///
/// `source_start`/`source_end` are character offsets of the trimmed fragment
/// inside the original input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub source_start: usize,
    pub source_end: usize,
}

impl Sentence {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedClause {
    pub clause_type: ClauseType,
    pub risk_level: RiskLevel,
    /// The matched fragment text
    pub content: String,
    pub explanation: String,
    pub start_position: usize,
    pub end_position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub suggested_action: String,
}

/// Output of a single analysis call. Built once and handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0.00 - 100.00, two fractional digits
    pub risk_score: Decimal,
    pub total_clauses: usize,
    pub risky_clauses: usize,
    /// Always `100.00 - risk_score`
    pub compliance_score: Decimal,
    pub overall_risk_level: RiskLevel,
    pub summary: String,
    pub detected_clauses: Vec<DetectedClause>,
    pub recommendations: Vec<Recommendation>,
}
