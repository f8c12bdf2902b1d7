//! End-to-end pipeline tests: text in, AnalysisResult out.
//!
//! Organised by concern:
//!
//! - scenarios: fixed documents with known expected assessments
//! - invariants: properties that hold for every document in a small corpus
//! - offsets: the two position modes
//! - serialization: the output contract seen by the persistence layer

use lexrisk_core::{
    AnalysisError, AnalysisResult, AnalyzerConfig, ClauseType, OffsetMode, Priority,
    RecommendationType, RiskAnalyzer, RiskLevel,
};
use rust_decimal::Decimal;

// ============================================================================
// Fixture helpers
// ============================================================================

const SCENARIO_A: &str = "This is fine. Nothing special here at all.";

const SCENARIO_B: &str = "Employee agrees to a non-compete covenant not to compete for an unlimited liability perpetual period.";

const SCENARIO_C: &str = "This license is perpetual, irrevocable and the holder can waive renewal rights.";

const SCENARIO_D: &str = "The Employee shall not compete and is subject to a covenant not to compete in perpetuity. \
    The Employee shall indemnify and hold harmless the Company against any and all claims.";

const SERVICES_AGREEMENT: &str = "1. Services. The Provider will deliver the services described in Schedule A. \
    2. Fees. Payment is due within thirty days of each invoice. A late fee of two percent applies to overdue balances. \
    3. Confidentiality. Each party shall keep the other party's proprietary information confidential. \
    4. Term. Either party may terminate this agreement with thirty days advance notice. \
    5. Liability. The limitation of liability in this section applies to all claims. \
    6. Indemnity. The Provider shall defend the Client against any third-party claim.";

fn analyze(text: &str) -> AnalysisResult {
    RiskAnalyzer::new()
        .expect("standard library compiles")
        .analyze(text)
        .expect("analysis succeeds")
}

fn corpus() -> Vec<&'static str> {
    vec![
        SCENARIO_A,
        SCENARIO_B,
        SCENARIO_C,
        SCENARIO_D,
        SERVICES_AGREEMENT,
        "Short.",
        "No sentence terminators but the vendor can invoice monthly and waive fees",
    ]
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn benign_text_scores_zero() {
        let result = analyze(SCENARIO_A);
        assert!(result.detected_clauses.is_empty());
        assert_eq!(result.risky_clauses, 0);
        assert_eq!(result.risk_score, Decimal::ZERO);
        assert_eq!(result.risk_score.to_string(), "0.00");
        assert_eq!(result.compliance_score.to_string(), "100.00");
        assert_eq!(result.overall_risk_level, RiskLevel::Low);
        assert_eq!(result.total_clauses, 5);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn aggressive_non_compete_is_critical() {
        let result = analyze(SCENARIO_B);
        assert_eq!(result.detected_clauses.len(), 1);

        let clause = &result.detected_clauses[0];
        assert_eq!(clause.clause_type, ClauseType::NonCompete);
        assert_eq!(clause.risk_level, RiskLevel::Critical);
        assert_eq!(
            clause.explanation,
            "This non compete clause presents critical risk and should be carefully reviewed by legal counsel."
        );

        // 10 + 25 + 2 keywords * 5
        assert_eq!(result.risk_score.to_string(), "45.00");
        assert_eq!(result.overall_risk_level, RiskLevel::Medium);

        assert_eq!(result.recommendations.len(), 1);
        let rec = &result.recommendations[0];
        assert_eq!(rec.recommendation_type, RecommendationType::ClauseModification);
        assert_eq!(rec.priority, Priority::Critical);
        assert_eq!(rec.title, "Review Non-Compete Restrictions");
    }

    #[test]
    fn keywords_without_clauses() {
        let result = analyze(SCENARIO_C);
        assert!(result.detected_clauses.is_empty());
        assert_eq!(result.risk_score.to_string(), "15.00");
        assert_eq!(result.compliance_score.to_string(), "85.00");
        assert_eq!(result.overall_risk_level, RiskLevel::Low);
    }

    #[test]
    fn elevated_document_gets_one_legal_review_last() {
        let result = analyze(SCENARIO_D);
        assert_eq!(result.detected_clauses.len(), 2);
        assert_eq!(result.risk_score.to_string(), "80.00");
        assert_eq!(result.overall_risk_level, RiskLevel::Critical);

        let types: Vec<RecommendationType> = result
            .recommendations
            .iter()
            .map(|r| r.recommendation_type)
            .collect();
        assert_eq!(
            types,
            vec![
                RecommendationType::ClauseModification,
                RecommendationType::RiskMitigation,
                RecommendationType::LegalReviewRequired,
            ]
        );
        assert!(result.summary.ends_with("Immediate legal review is strongly recommended."));
    }

    #[test]
    fn numbered_agreement_counts_sections() {
        let result = analyze(SERVICES_AGREEMENT);
        assert_eq!(result.total_clauses, 6);

        let types: Vec<ClauseType> = result.detected_clauses.iter().map(|c| c.clause_type).collect();
        assert!(types.contains(&ClauseType::PaymentTerms));
        assert!(types.contains(&ClauseType::Confidentiality));
        assert!(types.contains(&ClauseType::Termination));
        assert!(types.contains(&ClauseType::LiabilityLimitation));
        assert!(types.contains(&ClauseType::Indemnity));
        assert!(!types.contains(&ClauseType::NonCompete));
        assert!(result.summary.starts_with("Document analysis identified 6 clauses"));
    }

    #[test]
    fn blank_text_is_rejected() {
        let analyzer = RiskAnalyzer::new().unwrap();
        assert!(matches!(analyzer.analyze(""), Err(AnalysisError::EmptyInput)));
        assert!(matches!(analyzer.analyze("\n \t"), Err(AnalysisError::EmptyInput)));
    }
}

// ============================================================================
// Invariants
// ============================================================================

mod invariants {
    use super::*;

    #[test]
    fn scores_are_bounded_and_complementary() {
        for text in corpus() {
            let result = analyze(text);
            assert!(result.risk_score >= Decimal::ZERO, "{text}");
            assert!(result.risk_score <= Decimal::ONE_HUNDRED, "{text}");
            assert_eq!(
                result.risk_score + result.compliance_score,
                Decimal::ONE_HUNDRED,
                "{text}"
            );
            assert_eq!(result.risk_score.scale(), 2);
            assert_eq!(result.compliance_score.scale(), 2);
        }
    }

    #[test]
    fn counts_are_consistent() {
        for text in corpus() {
            let result = analyze(text);
            assert!(result.total_clauses >= 5, "{text}");
            assert_eq!(result.risky_clauses, result.detected_clauses.len(), "{text}");
        }
    }

    #[test]
    fn level_follows_score_thresholds() {
        for text in corpus() {
            let result = analyze(text);
            let score = result.risk_score;
            let expected = if score >= Decimal::from(75) {
                RiskLevel::Critical
            } else if score >= Decimal::from(50) {
                RiskLevel::High
            } else if score >= Decimal::from(25) {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            assert_eq!(result.overall_risk_level, expected, "{text}");
        }
    }

    #[test]
    fn legal_review_only_when_elevated() {
        for text in corpus() {
            let result = analyze(text);
            let reviews = result
                .recommendations
                .iter()
                .filter(|r| r.recommendation_type == RecommendationType::LegalReviewRequired)
                .count();
            let expected = usize::from(result.overall_risk_level >= RiskLevel::High);
            assert_eq!(reviews, expected, "{text}");
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let analyzer = RiskAnalyzer::new().unwrap();
        for text in corpus() {
            let first = analyzer.analyze(text).unwrap();
            let second = analyzer.analyze(text).unwrap();
            assert_eq!(first, second);
        }

        // A separately constructed analyzer agrees too
        let other = RiskAnalyzer::new().unwrap();
        assert_eq!(
            analyzer.analyze(SERVICES_AGREEMENT).unwrap(),
            other.analyze(SERVICES_AGREEMENT).unwrap()
        );
    }

    #[test]
    fn concurrent_callers_share_one_analyzer() {
        let analyzer = std::sync::Arc::new(RiskAnalyzer::new().unwrap());
        let expected = analyzer.analyze(SCENARIO_D).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = std::sync::Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.analyze(SCENARIO_D).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

// ============================================================================
// Offsets
// ============================================================================

mod offsets {
    use super::*;

    fn analyze_with(mode: OffsetMode, text: &str) -> AnalysisResult {
        let config = AnalyzerConfig::default().with_offset_mode(mode);
        RiskAnalyzer::with_config(config).unwrap().analyze(text).unwrap()
    }

    #[test]
    fn fragment_mode_is_the_default() {
        assert_eq!(AnalyzerConfig::default().offsets.mode, OffsetMode::Fragment);
        assert_eq!(
            analyze(SERVICES_AGREEMENT),
            analyze_with(OffsetMode::Fragment, SERVICES_AGREEMENT)
        );
    }

    #[test]
    fn source_mode_spans_slice_back_to_content() {
        let result = analyze_with(OffsetMode::Source, SERVICES_AGREEMENT);
        assert!(!result.detected_clauses.is_empty());
        for clause in &result.detected_clauses {
            let slice: String = SERVICES_AGREEMENT
                .chars()
                .skip(clause.start_position)
                .take(clause.end_position - clause.start_position)
                .collect();
            assert_eq!(slice, clause.content);
        }
    }

    #[test]
    fn modes_only_differ_in_positions() {
        let fragment = analyze_with(OffsetMode::Fragment, SERVICES_AGREEMENT);
        let source = analyze_with(OffsetMode::Source, SERVICES_AGREEMENT);
        assert_eq!(fragment.risk_score, source.risk_score);
        assert_eq!(fragment.recommendations, source.recommendations);
        let fragment_content: Vec<&str> =
            fragment.detected_clauses.iter().map(|c| c.content.as_str()).collect();
        let source_content: Vec<&str> =
            source.detected_clauses.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(fragment_content, source_content);
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialization {
    use super::*;
    use serde_json::Value;

    #[test]
    fn result_serializes_with_stable_field_names() {
        let result = analyze(SCENARIO_D);
        let json: Value = serde_json::to_value(&result).unwrap();

        assert_eq!(json["risk_score"], "80.00");
        assert_eq!(json["compliance_score"], "20.00");
        assert_eq!(json["overall_risk_level"], "CRITICAL");
        assert_eq!(json["detected_clauses"][0]["clause_type"], "NON_COMPETE");
        assert_eq!(json["detected_clauses"][1]["clause_type"], "INDEMNITY");
        assert_eq!(
            json["recommendations"][2]["recommendation_type"],
            "LEGAL_REVIEW_REQUIRED"
        );
    }

    #[test]
    fn result_roundtrips_through_json() {
        let result = analyze(SERVICES_AGREEMENT);
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
