use crate::types::RiskLevel;

pub fn generate_summary(total_clauses: usize, risky_clauses: usize, overall_risk_level: RiskLevel) -> String {
    let review = if overall_risk_level.is_elevated() {
        "strongly recommended"
    } else {
        "recommended for high-value transactions"
    };

    format!(
        "Document analysis identified {} clauses, with {} potentially risky provisions. \
         The overall risk level is assessed as {}. \
         Immediate legal review is {}.",
        total_clauses,
        risky_clauses,
        overall_risk_level.as_str().to_lowercase(),
        review
    )
}
