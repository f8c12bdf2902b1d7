use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// Default value functions for serde
fn default_min_fragment_chars() -> usize {
    10
}

fn default_clause_weight() -> u32 {
    10
}

fn default_keyword_weight() -> u32 {
    5
}

fn default_score_cap() -> u32 {
    100
}

/// Lowest clause estimate any document may report
pub const MIN_TOTAL_CLAUSES: usize = 5;

fn default_minimum_clause_count() -> usize {
    MIN_TOTAL_CLAUSES
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Sentence segmentation parameters
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    /// How clause start/end positions are computed
    #[serde(default)]
    pub offsets: OffsetConfig,
    /// Score aggregation weights
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Fragments whose trimmed length (in chars) is at or below this are discarded
    #[serde(default = "default_min_fragment_chars")]
    pub min_fragment_chars: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_fragment_chars: default_min_fragment_chars(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetMode {
    /// Running offset over the concatenation of surviving, trimmed fragments.
    /// Does not line up with the source text.
    #[default]
    Fragment,
    /// True character offsets of each fragment in the original input.
    Source,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetConfig {
    #[serde(default)]
    pub mode: OffsetMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per detected clause
    #[serde(default = "default_clause_weight")]
    pub clause_weight: u32,
    /// Points per distinct high-risk keyword found anywhere in the text
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: u32,
    /// Additional points per clause, keyed by the clause's risk level
    #[serde(default)]
    pub level_weights: LevelWeights,
    /// Upper bound for the risk score
    #[serde(default = "default_score_cap")]
    pub score_cap: u32,
    /// Floor for the estimated total clause count, never below `MIN_TOTAL_CLAUSES`
    #[serde(default = "default_minimum_clause_count")]
    pub minimum_clause_count: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            clause_weight: default_clause_weight(),
            keyword_weight: default_keyword_weight(),
            level_weights: LevelWeights::default(),
            score_cap: default_score_cap(),
            minimum_clause_count: default_minimum_clause_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelWeights {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for LevelWeights {
    fn default() -> Self {
        Self {
            critical: 25,
            high: 15,
            medium: 10,
            low: 5,
        }
    }
}

impl AnalyzerConfig {
    /// Load config from a YAML file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AnalyzerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("failed to load config from {p}: {e:#}; using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.score_cap == 0 || self.scoring.score_cap > 100 {
            return Err(anyhow!(
                "scoring.score_cap must be within 1..=100, got {}",
                self.scoring.score_cap
            ));
        }
        if self.scoring.minimum_clause_count < MIN_TOTAL_CLAUSES {
            return Err(anyhow!(
                "scoring.minimum_clause_count must be at least {}, got {}",
                MIN_TOTAL_CLAUSES,
                self.scoring.minimum_clause_count
            ));
        }
        Ok(())
    }

    pub fn with_offset_mode(mut self, mode: OffsetMode) -> Self {
        self.offsets.mode = mode;
        self
    }
}

/// SHA-256 over the JSON form of the config, used to tag reports
pub fn config_fingerprint(config: &AnalyzerConfig) -> Result<String> {
    let config_json = serde_json::to_string(config)
        .map_err(|e| anyhow!("Failed to serialize config for hashing: {}", e))?;

    let mut hasher = Sha256::new();
    hasher.update(config_json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
