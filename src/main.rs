use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, LevelFilter};
use std::path::PathBuf;

use topogen::config_loader::{self, CliOverrides};
use topogen::orchestrator::{generate_artifacts, ExportFormat};

/// O-RAN topology generator producing TAPI network descriptions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network configuration (YAML, or JSON by extension)
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory for the generated artifacts
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Artifacts to write; may be given more than once
    #[arg(short, long = "format", value_enum, default_values_t = [ExportFormat::Json])]
    formats: Vec<ExportFormat>,

    /// Seed for reproducible identifiers, overriding `general.seed`
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Without RUST_LOG the logger passes everything and the max level gates it,
    // starting at info until the configuration names its own level
    let from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    if !from_env {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Starting topology generator");
    info!("Configuration file: {:?}", args.config);
    info!("Output directory: {:?}", args.output);

    let mut config = config_loader::load_config(&args.config)?;
    if let Some(level) = config.general.log_filter().filter(|_| !from_env) {
        log::set_max_level(level);
    }

    config_loader::apply_overrides(&mut config, &CliOverrides { seed: args.seed })?;

    let summary = generate_artifacts(&config, &args.output, &args.formats)?;
    for file in &summary.files {
        info!("  - {}", file.display());
    }

    info!("Generation completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["topogen", "--config", "network.yaml"]);

        assert_eq!(args.config, PathBuf::from("network.yaml"));
        assert_eq!(args.output, PathBuf::from("output"));
        assert_eq!(args.formats, vec![ExportFormat::Json]);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_repeated_formats() {
        let args = Args::parse_from([
            "topogen",
            "--config",
            "network.json",
            "--format",
            "cytoscape",
            "--format",
            "svg",
            "--seed",
            "42",
        ]);

        assert_eq!(args.formats, vec![ExportFormat::Cytoscape, ExportFormat::Svg]);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Args::try_parse_from(["topogen", "--config", "network.yaml", "--format", "png"]);
        assert!(result.is_err());
    }
}
