use lexrisk_core::AnalyzerConfig;

/// Where the active analyzer config came from.
#[derive(Debug)]
pub enum ConfigSource {
    Default,
    File(String),
    /// The file was given but could not be used; defaults are active instead.
    Fallback { path: String, error: anyhow::Error },
}

/// Load the `--config` file if one was given, falling back to defaults
/// when it cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> (AnalyzerConfig, ConfigSource) {
    let Some(path) = path else {
        return (AnalyzerConfig::default(), ConfigSource::Default);
    };

    match AnalyzerConfig::load_from_file(path) {
        Ok(config) => (config, ConfigSource::File(path.to_string())),
        Err(error) => {
            tracing::warn!("failed to load config from {path}: {error:#}; using defaults");
            (
                AnalyzerConfig::default(),
                ConfigSource::Fallback {
                    path: path.to_string(),
                    error,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lexrisk_{}_{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let (config, source) = load_config(None);
        assert_eq!(config, AnalyzerConfig::default());
        assert!(matches!(source, ConfigSource::Default));
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let path = write_temp("valid.yaml", "scoring:\n  keyword_weight: 7\n");
        let (config, source) = load_config(path.to_str());
        assert_eq!(config.scoring.keyword_weight, 7);
        assert!(matches!(source, ConfigSource::File(ref p) if p == path.to_str().unwrap()));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_file_reports_fallback() {
        let path = write_temp("invalid.yaml", "scoring:\n  minimum_clause_count: 0\n");
        let (config, source) = load_config(path.to_str());
        assert_eq!(config, AnalyzerConfig::default());
        match source {
            ConfigSource::Fallback { path: reported, error } => {
                assert_eq!(reported, path.to_str().unwrap());
                assert!(format!("{error:#}").contains("minimum_clause_count"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_reports_fallback() {
        let (_, source) = load_config(Some("/nonexistent/lexrisk.yaml"));
        assert!(matches!(source, ConfigSource::Fallback { .. }));
    }
}
