use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use adperf_core::{load_config, load_config_from_env, validate_config, Config};

/// Aggregate an ad-performance CSV log into top-10 CTR and CPA reports.
#[derive(Debug, Parser)]
#[command(name = "ad-aggregator", version, about)]
pub struct Args {
    /// Path to input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for result files [default: results/]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(long, env = "ADPERF_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Loads configuration and applies command line overrides on top of it.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => load_config_from_env().context("Failed to load config from environment")?,
        };

        if let Some(dir) = &self.output {
            config.output.dir = dir.clone();
        }

        validate_config(&config).context("Configuration validation failed")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["ad-aggregator", "-i", "data.csv", "-o", "out"]).unwrap();
        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["ad-aggregator", "--output", "out"]).is_err());
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let args = Args {
            input: PathBuf::from("data.csv"),
            output: Some(PathBuf::from("elsewhere")),
            config: None,
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.output.dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = Args {
            input: PathBuf::from("data.csv"),
            output: None,
            config: Some(PathBuf::from("/nonexistent/adperf.toml")),
        };
        assert!(args.resolve_config().is_err());
    }
}
