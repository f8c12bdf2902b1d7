use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Import from lexrisk-core
use lexrisk_core::{
    OffsetMode, PipelineStages, PlainTextExtractor, RiskAnalyzer, TextExtractor,
};

// Import CLI utilities
use lexrisk_cli::{load_config, telemetry, AnalysisReport, ConfigSource, OutputFormat};

#[derive(Parser)]
#[command(name = "lexrisk")]
#[command(about = "Flags risky clauses in legal documents and scores overall risk")]
struct Args {
    /// Path to the text document to analyze
    #[arg(short, long)]
    input: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: json, yaml, or summary
    #[arg(short = 'f', long, default_value = "json")]
    output_format: String,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Output file path (if not specified, auto-generated based on input)
    #[arg(short, long)]
    output: Option<String>,

    /// Report clause positions as offsets into the source text
    /// instead of the default running fragment offsets
    #[arg(long)]
    source_offsets: bool,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Dump all intermediate pipeline stage outputs to a directory
    /// Captures: sentences, detected clauses, and the final result as separate files
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output (default: test_outputs/stages)
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: String,

    /// Log filter passed to tracing (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = telemetry::init(&args.log_level) {
        eprintln!("⚠️  Logging disabled: {e}");
    }

    println!("⚖️  Lexrisk Clause Risk Analyzer");

    if args.show_configs {
        show_help();
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        println!("⚠️  No input document given. Use --input <path> or --show-configs.");
        return Ok(());
    };

    // Check if input file exists
    if !Path::new(input).exists() {
        println!("⚠️  Input document not found at: {}", input);
        println!("   Please check the file path.");
        return Ok(());
    }

    let format = match OutputFormat::from_name(&args.output_format) {
        Some(format) => format,
        None => {
            println!(
                "⚠️  Unknown output format '{}', using default json format",
                args.output_format
            );
            OutputFormat::Json
        }
    };

    let (mut config, config_source) = load_config(args.config.as_deref());

    match &config_source {
        ConfigSource::File(path) => println!("📋 Loaded config from: {}", path),
        ConfigSource::Default => println!("📋 Using default config"),
        ConfigSource::Fallback { path, error } => {
            println!("⚠️  Could not use config {}: {:#}", path, error);
            println!("📋 Using default config");
        }
    }

    // Apply CLI overrides to config
    if args.source_offsets {
        config = config.with_offset_mode(OffsetMode::Source);
    }

    println!("📄 Analyzing: {}", input);

    let extractor = PlainTextExtractor::new();
    let text = match extractor.extract_file(Path::new(input)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("❌ Extraction failed: {e:#}");
            std::process::exit(1);
        }
    };

    let analyzer = RiskAnalyzer::with_config(config)?;

    // Stage dump mode: capture and save all intermediates
    if args.dump_stages {
        println!("\n🔬 Pipeline stage dump mode");
        match analyzer.analyze_capture_stages(&text) {
            Ok(stages) => {
                save_stages(&stages, input, &args.stages_dir)?;
                println!("\n✅ All stages dumped to: {}", args.stages_dir);
            }
            Err(e) => {
                eprintln!("❌ Stage dump failed: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    match analyzer.analyze_with_profiling(&text, args.profile) {
        Ok((result, _profiler)) => {
            println!("✅ Successfully analyzed document");
            println!("📊 Risk metrics:");
            println!(
                "   - Risk score: {} ({})",
                result.risk_score, result.overall_risk_level
            );
            println!("   - Compliance score: {}", result.compliance_score);
            println!(
                "   - Clauses: {} estimated, {} flagged",
                result.total_clauses, result.risky_clauses
            );
            println!("   - Recommendations: {}", result.recommendations.len());

            let report = AnalysisReport::new(input, &text, result, analyzer.config())?;

            // Generate output path
            let output_path = if let Some(output) = &args.output {
                output.clone()
            } else {
                let input_name = Path::new(input)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let extension = match format {
                    OutputFormat::Json => "json",
                    OutputFormat::Yaml => "yaml",
                    OutputFormat::Summary => "txt",
                };
                format!("{input_name}_lexrisk.{extension}")
            };

            report.save_with_format(&output_path, format)?;
            tracing::debug!(report_id = %report.report_id, output = %output_path, "report written");
            println!(
                "💾 {} report saved to: {}",
                format.as_str(),
                output_path
            );
        }
        Err(e) => {
            eprintln!("❌ Analysis failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file");
    println!("  --input <path>          Text document to analyze (.txt, .text, .md)");
    println!("  --output <path>         Output file path (auto-generated if not specified)");
    println!("  --output-format <fmt>   Output format: json, yaml, or summary");
    println!("  --source-offsets        Report clause offsets into the source text");
    println!("  --profile               Time each pipeline stage");
    println!("  --dump-stages           Write every intermediate stage to --stages-dir");
    println!("  --log-level <filter>    Tracing filter, e.g. info or lexrisk_core=debug");

    println!("\n📄 Output Formats:");
    println!("  json     - Full report with provenance and result fields (default)");
    println!("  yaml     - Same report as YAML");
    println!("  summary  - Human-readable digest of scores, clauses and advice");

    println!("\n📁 Config file keys (all optional):");
    println!("  segmentation.min_fragment_chars   Shortest fragment kept (default 10)");
    println!("  offsets.mode                      fragment | source (default fragment)");
    println!("  scoring.clause_weight             Points per detected clause (default 10)");
    println!("  scoring.keyword_weight            Points per high-risk keyword (default 5)");
    println!("  scoring.level_weights.*           critical/high/medium/low (25/15/10/5)");
    println!("  scoring.score_cap                 Upper bound of the risk score (default 100)");
    println!("  scoring.minimum_clause_count      Floor for the clause estimate (default 5)");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i contract.txt");
    println!("  cargo run -- -i contract.txt -o /path/to/report.json");
    println!("  cargo run -- -i contract.txt -c config.yaml -f summary");
}

fn save_stages(stages: &PipelineStages, input: &str, output_dir: &str) -> Result<()> {
    use std::fs;
    fs::create_dir_all(output_dir)?;

    // Stage 1: Sentences
    let sentences_path = format!("{}/stage1_sentences.json", output_dir);
    fs::write(&sentences_path, serde_json::to_string_pretty(&stages.sentences)?)?;
    println!("  💾 {} ({} fragments)", sentences_path, stages.sentences.len());

    // Stage 2: Detected clauses
    let clauses_path = format!("{}/stage2_detected_clauses.json", output_dir);
    fs::write(&clauses_path, serde_json::to_string_pretty(&stages.detected_clauses)?)?;
    println!("  💾 {} ({} clauses)", clauses_path, stages.detected_clauses.len());

    // Stage 3: Final result
    let result_path = format!("{}/stage3_result.json", output_dir);
    fs::write(&result_path, serde_json::to_string_pretty(&stages.result)?)?;
    println!(
        "  💾 {} ({} recommendations)",
        result_path,
        stages.result.recommendations.len()
    );

    // Summary file: quick reference for validation scripts
    let summary = serde_json::json!({
        "input": input,
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "stage_counts": {
            "sentences": stages.sentences.len(),
            "detected_clauses": stages.detected_clauses.len(),
            "recommendations": stages.result.recommendations.len(),
        },
        "risk_score": stages.result.risk_score.to_string(),
        "overall_risk_level": stages.result.overall_risk_level,
    });
    let summary_path = format!("{}/summary.json", output_dir);
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  💾 {}", summary_path);

    Ok(())
}
