use super::assessment::keywords_present;
use crate::config::ScoringConfig;
use crate::types::{DetectedClause, RiskLevel};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;

// Numbered sub-clause markers such as "1. " or "4.2 ". ASCII digits and
// ASCII whitespace only.
static NUMBERED_CLAUSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\.[0-9]*[\t\n\x0B\x0C\r ]").unwrap());

const SCORE_SCALE: u32 = 2;

/// Overall scores for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub risk_score: Decimal,
    pub compliance_score: Decimal,
    pub overall_risk_level: RiskLevel,
}

/// Rough structural proxy for the number of clauses in the document.
///
/// Counts numbered markers; without any, falls back to a third of the
/// sentence count. Never below `minimum`.
pub fn estimate_total_clauses(text: &str, sentence_count: usize, minimum: usize) -> usize {
    let numbered = NUMBERED_CLAUSE_REGEX.find_iter(text).count();
    if numbered == 0 {
        (sentence_count / 3).max(minimum)
    } else {
        numbered.max(minimum)
    }
}

fn level_weight(level: RiskLevel, config: &ScoringConfig) -> u32 {
    let weights = &config.level_weights;
    match level {
        RiskLevel::Critical => weights.critical,
        RiskLevel::High => weights.high,
        RiskLevel::Medium => weights.medium,
        RiskLevel::Low => weights.low,
    }
}

/// Uncapped raw points before rounding.
pub fn raw_risk_points(text: &str, clauses: &[DetectedClause], config: &ScoringConfig) -> u64 {
    let clause_points = clauses.len() as u64 * u64::from(config.clause_weight);
    let level_points: u64 = clauses
        .iter()
        .map(|clause| u64::from(level_weight(clause.risk_level, config)))
        .sum();
    let keyword_points = keywords_present(text).len() as u64 * u64::from(config.keyword_weight);

    clause_points + level_points + keyword_points
}

/// Round half-up to two places and pin the scale so "15" renders as "15.00".
pub fn to_score(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCORE_SCALE);
    rounded
}

/// Thresholds apply to the capped, rounded score.
pub fn overall_level(risk_score: Decimal) -> RiskLevel {
    if risk_score >= Decimal::from(75) {
        RiskLevel::Critical
    } else if risk_score >= Decimal::from(50) {
        RiskLevel::High
    } else if risk_score >= Decimal::from(25) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn compliance_from_risk(risk_score: Decimal) -> Decimal {
    to_score(Decimal::ONE_HUNDRED - risk_score)
}

pub fn aggregate(text: &str, clauses: &[DetectedClause], config: &ScoringConfig) -> ScoreCard {
    let raw = raw_risk_points(text, clauses, config);
    let capped = raw.min(u64::from(config.score_cap));
    let risk_score = to_score(Decimal::from(capped));

    ScoreCard {
        risk_score,
        compliance_score: compliance_from_risk(risk_score),
        overall_risk_level: overall_level(risk_score),
    }
}
