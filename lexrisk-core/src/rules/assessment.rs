use crate::types::{ClauseType, RiskLevel};

/// Phrases that raise risk wherever they appear.
pub const HIGH_RISK_KEYWORDS: [&str; 12] = [
    "unlimited liability",
    "perpetual",
    "irrevocable",
    "unrestricted",
    "sole discretion",
    "without limitation",
    "any and all",
    "in perpetuity",
    "automatically renew",
    "mandatory arbitration",
    "waive",
    "forfeit",
];

/// Vague wording. Plain substring match, so "may" also hits "mayor".
pub const VAGUE_TERMS: [&str; 4] = ["reasonable", "appropriate", "may", "should"];

const KEYWORD_POINTS: u32 = 2;
const VAGUE_LANGUAGE_POINTS: u32 = 1;

/// High-risk keywords present in `text`, in catalog order, each at most once.
pub fn keywords_present(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    HIGH_RISK_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

pub fn has_vague_language(text: &str) -> bool {
    let lower = text.to_lowercase();
    VAGUE_TERMS.iter().any(|term| lower.contains(term))
}

/// Inherent risk of the clause kind, independent of wording.
pub fn clause_type_points(clause_type: ClauseType) -> u32 {
    match clause_type {
        ClauseType::NonCompete | ClauseType::Indemnity => 2,
        ClauseType::LiabilityLimitation => 1,
        ClauseType::Confidentiality | ClauseType::PaymentTerms | ClauseType::Termination => 0,
    }
}

pub fn risk_points(fragment: &str, clause_type: ClauseType) -> u32 {
    let mut points = keywords_present(fragment).len() as u32 * KEYWORD_POINTS;
    if has_vague_language(fragment) {
        points += VAGUE_LANGUAGE_POINTS;
    }
    points + clause_type_points(clause_type)
}

pub fn level_for_points(points: u32) -> RiskLevel {
    match points {
        p if p >= 4 => RiskLevel::Critical,
        3 => RiskLevel::High,
        2 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

pub fn assess_clause_risk(fragment: &str, clause_type: ClauseType) -> RiskLevel {
    level_for_points(risk_points(fragment, clause_type))
}

pub fn explain(clause_type: ClauseType, risk_level: RiskLevel) -> String {
    format!(
        "This {} clause presents {} and should be carefully reviewed by legal counsel.",
        clause_type.label(),
        risk_level.risk_phrase()
    )
}
