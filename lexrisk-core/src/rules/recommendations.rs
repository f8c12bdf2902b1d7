use crate::types::{ClauseType, DetectedClause, Priority, Recommendation, RecommendationType, RiskLevel};

/// Fixed advice attached to a clause type.
#[derive(Debug, Clone, Copy)]
struct RecommendationTemplate {
    recommendation_type: RecommendationType,
    /// `None` means the priority follows the clause risk level
    fixed_priority: Option<Priority>,
    title: &'static str,
    description: &'static str,
    suggested_action: &'static str,
}

impl RecommendationTemplate {
    fn render(&self, clause_risk: RiskLevel) -> Recommendation {
        let priority = self.fixed_priority.unwrap_or(match clause_risk {
            RiskLevel::Critical => Priority::Critical,
            _ => Priority::High,
        });

        Recommendation {
            recommendation_type: self.recommendation_type,
            priority,
            title: self.title.to_string(),
            description: self.description.to_string(),
            suggested_action: self.suggested_action.to_string(),
        }
    }
}

fn template_for(clause_type: ClauseType) -> Option<RecommendationTemplate> {
    match clause_type {
        ClauseType::NonCompete => Some(RecommendationTemplate {
            recommendation_type: RecommendationType::ClauseModification,
            fixed_priority: None,
            title: "Review Non-Compete Restrictions",
            description: "Non-compete clause may be overly restrictive.",
            suggested_action: "Negotiate time period, geographic scope, and industry limitations.",
        }),
        ClauseType::Indemnity => Some(RecommendationTemplate {
            recommendation_type: RecommendationType::RiskMitigation,
            fixed_priority: None,
            title: "Limit Indemnification Exposure",
            description: "Indemnity clause may expose you to unlimited liability.",
            suggested_action: "Add caps on liability and exclude indirect damages.",
        }),
        ClauseType::LiabilityLimitation => Some(RecommendationTemplate {
            recommendation_type: RecommendationType::ClauseModification,
            fixed_priority: None,
            title: "Clarify Liability Limitations",
            description: "Liability limitations may be one-sided or unclear.",
            suggested_action: "Ensure mutual limitations and clearly define exceptions.",
        }),
        ClauseType::PaymentTerms => Some(RecommendationTemplate {
            recommendation_type: RecommendationType::ClauseModification,
            fixed_priority: Some(Priority::Medium),
            title: "Clarify Payment Terms",
            description: "Payment terms may be ambiguous or unfavorable.",
            suggested_action: "Specify exact amounts, due dates, and late payment penalties.",
        }),
        ClauseType::Confidentiality | ClauseType::Termination => None,
    }
}

/// Document-wide advice appended once when overall risk is elevated.
pub fn legal_review_recommendation() -> Recommendation {
    Recommendation {
        recommendation_type: RecommendationType::LegalReviewRequired,
        priority: Priority::Critical,
        title: "Comprehensive Legal Review Required".to_string(),
        description: "This document contains multiple high-risk provisions that require immediate attention from legal counsel.".to_string(),
        suggested_action: "Consult with a qualified attorney before signing or executing this agreement.".to_string(),
    }
}

/// Per-clause recommendations in clause order, then at most one legal review.
pub fn generate_recommendations(
    clauses: &[DetectedClause],
    overall_risk_level: RiskLevel,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = clauses
        .iter()
        .filter(|clause| clause.risk_level.is_elevated())
        .filter_map(|clause| {
            template_for(clause.clause_type).map(|template| template.render(clause.risk_level))
        })
        .collect();

    if overall_risk_level.is_elevated() {
        recommendations.push(legal_review_recommendation());
    }

    recommendations
}

/// Highest priority first; ties keep their original order.
///
/// Presentation helper for callers; the engine's own output stays in
/// generation order.
pub fn prioritized(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}
