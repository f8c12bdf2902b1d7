use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use lexrisk_core::{
    config::config_fingerprint, prioritized, AnalysisResult, AnalyzerConfig, SCHEMA_VERSION,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Supported report renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "summary" | "text" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Summary => "summary",
        }
    }
}

/// One analysis run, wrapped with provenance for storage or hand-off.
///
/// Recommendations are stored highest priority first; the detected clauses
/// keep document order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub schema_version: String,
    pub report_id: Uuid,
    pub source: String,
    pub content_sha256: String,
    pub config_sha256: String,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl AnalysisReport {
    pub fn new(
        source: &str,
        text: &str,
        mut result: AnalysisResult,
        config: &AnalyzerConfig,
    ) -> Result<Self> {
        result.recommendations = prioritized(&result.recommendations);

        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            report_id: Uuid::new_v4(),
            source: source.to_string(),
            content_sha256: content_hash(text),
            config_sha256: config_fingerprint(config)?,
            analyzed_at: Utc::now(),
            result,
        })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| anyhow!("Failed to serialize report as JSON: {}", e)),
            OutputFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| anyhow!("Failed to serialize report as YAML: {}", e)),
            OutputFormat::Summary => Ok(self.render_summary()),
        }
    }

    fn render_summary(&self) -> String {
        let result = &self.result;
        let mut lines = vec![
            format!("Report {} ({})", self.report_id, self.source),
            format!(
                "Risk score: {} ({}) | Compliance score: {}",
                result.risk_score, result.overall_risk_level, result.compliance_score
            ),
            format!(
                "Clauses: {} estimated, {} flagged",
                result.total_clauses, result.risky_clauses
            ),
            String::new(),
            result.summary.clone(),
        ];

        if !result.detected_clauses.is_empty() {
            lines.push(String::new());
            lines.push("Detected clauses:".to_string());
            for clause in &result.detected_clauses {
                lines.push(format!(
                    "  [{}] {} @ {}..{}: {}",
                    clause.risk_level,
                    clause.clause_type,
                    clause.start_position,
                    clause.end_position,
                    clause.content
                ));
            }
        }

        if !result.recommendations.is_empty() {
            lines.push(String::new());
            lines.push("Recommendations:".to_string());
            for rec in &result.recommendations {
                lines.push(format!("  [{}] {}", rec.priority.as_str(), rec.title));
                lines.push(format!("      {}", rec.suggested_action));
            }
        }

        lines.join("\n") + "\n"
    }

    pub fn save_with_format(&self, output_path: &str, format: OutputFormat) -> Result<()> {
        let rendered = self.render(format)?;
        std::fs::write(output_path, rendered)
            .with_context(|| format!("failed to write report to {}", output_path))
    }
}
