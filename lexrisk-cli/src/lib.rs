// All analysis functionality is in lexrisk-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod config_loader;
pub mod report;
pub mod telemetry;

// Re-export core types for convenience
pub use lexrisk_core::*;

// Re-export CLI utilities
pub use config_loader::{load_config, ConfigSource};
pub use report::{AnalysisReport, OutputFormat};
