use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::rules::{
    aggregate, estimate_total_clauses, generate_recommendations, generate_summary,
    split_into_sentences, ClauseDetector, PatternLibrary,
};
use crate::types::*;
use std::time::{Duration, Instant};

/// Captured intermediate outputs from each pipeline stage.
/// Used for testing and diagnostics to inspect each stage boundary.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStages {
    pub sentences: Vec<Sentence>,
    pub detected_clauses: Vec<DetectedClause>,
    pub result: AnalysisResult,
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        tracing::debug!(step = step_name, elapsed_us = elapsed.as_micros() as u64, "step finished");

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn log_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();
        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            tracing::info!(
                "{:.<35} {}us ({:.1}%)",
                step,
                duration.as_micros(),
                percentage
            );
        }
        tracing::info!("{:.<35} {}us", "Total", total.as_micros());
    }
}

/// Runs the full clause-risk pipeline over extracted document text.
///
/// Holds only read-only state, so one analyzer can serve many threads.
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    library: PatternLibrary,
    config: AnalyzerConfig,
}

impl RiskAnalyzer {
    pub fn new() -> Result<Self, AnalysisError> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Rejects configs that could push scores outside 0..=100 or the
    /// clause estimate below its floor.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config
            .validate()
            .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            library: PatternLibrary::standard()?,
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Analyze text and return the assessment.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.run(text, &mut StepProfiler::new(false))
            .map(|stages| stages.result)
    }

    /// Analyze text, timing each stage and logging the breakdown.
    pub fn analyze_with_profiling(
        &self,
        text: &str,
        enable_profiling: bool,
    ) -> Result<(AnalysisResult, StepProfiler), AnalysisError> {
        let mut profiler = StepProfiler::new(enable_profiling);
        let stages = self.run(text, &mut profiler)?;
        profiler.log_summary();
        Ok((stages.result, profiler))
    }

    /// Analyze text and keep every intermediate output.
    pub fn analyze_capture_stages(&self, text: &str) -> Result<PipelineStages, AnalysisError> {
        self.run(text, &mut StepProfiler::new(false))
    }

    fn run(&self, text: &str, profiler: &mut StepProfiler) -> Result<PipelineStages, AnalysisError> {
        tracing::info!(chars = text.chars().count(), "starting risk analysis");

        // Stage 1: Segmentation (text → fragments)
        let min_chars = self.config.segmentation.min_fragment_chars;
        let sentences = profiler.time_step("Sentence Segmentation", || {
            split_into_sentences(text, min_chars)
        })?;

        // Stage 2: Detection + per-clause assessment (fragments → clauses)
        let detector = ClauseDetector::new(&self.library, self.config.offsets.mode);
        let detected_clauses = profiler.time_step("Clause Detection", || detector.detect(&sentences));

        // Stage 3: Scoring (clauses + full text → scores)
        let scoring = &self.config.scoring;
        let total_clauses = profiler.time_step("Clause Count Estimate", || {
            estimate_total_clauses(text, sentences.len(), scoring.minimum_clause_count)
        });
        let score_card = profiler.time_step("Score Aggregation", || {
            aggregate(text, &detected_clauses, scoring)
        });

        // Stage 4: Advice and synopsis
        let recommendations = profiler.time_step("Recommendations", || {
            generate_recommendations(&detected_clauses, score_card.overall_risk_level)
        });
        let risky_clauses = detected_clauses.len();
        let summary = profiler.time_step("Summary", || {
            generate_summary(total_clauses, risky_clauses, score_card.overall_risk_level)
        });

        tracing::info!(
            risk_score = %score_card.risk_score,
            risk_level = %score_card.overall_risk_level,
            risky_clauses,
            "risk analysis completed"
        );

        let result = AnalysisResult {
            risk_score: score_card.risk_score,
            total_clauses,
            risky_clauses,
            compliance_score: score_card.compliance_score,
            overall_risk_level: score_card.overall_risk_level,
            summary,
            detected_clauses: detected_clauses.clone(),
            recommendations,
        };

        Ok(PipelineStages {
            sentences,
            detected_clauses,
            result,
        })
    }
}
