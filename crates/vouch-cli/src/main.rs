// crates/vouch-cli/src/main.rs
//
// CLI entrypoint for the Vouch reputation engine.
//
// Loads attestations from a JSON file and options from a TOML config, then
// scores addresses, lists trust paths, or summarizes the attestation graph.

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::paths::PathsCmd;
use commands::score::ScoreCmd;
use commands::Context;
use config::CliConfig;
use output::OutputFormat;
use vouch_core::MemorySource;

/// Vouch: evidence-based trust scores from peer attestations.
#[derive(Parser, Debug)]
#[command(
    name = "vouch",
    version = "0.1.0",
    about = "Vouch CLI: uncertainty-aware reputation scores from peer attestations"
)]
struct Cli {
    /// JSON file holding an array of attestations.
    #[arg(long, global = true, default_value = "attestations.json")]
    attestations: PathBuf,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "vouch.toml")]
    config: PathBuf,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Reputation score and summary for an address.
    Score(ScoreCmd),

    /// Trust paths from an observer to a target.
    Paths(PathsCmd),

    /// Attesters in the attestation graph and what they issued.
    Graph,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration is read before tracing starts so its log level can seed
    // the filter; the outcome is reported once the subscriber is installed.
    let loaded = CliConfig::load(&cli.config);
    let log_level = loaded
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| CliConfig::default().log_level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    let config = match loaded {
        Ok(cfg) => {
            tracing::info!("Loaded configuration from {}", cli.config.display());
            cfg
        }
        Err(e) => {
            tracing::warn!(
                "Could not load config from {}: {}. Using defaults.",
                cli.config.display(),
                e
            );
            CliConfig::default()
        }
    };

    let source = MemorySource::load_json(&cli.attestations)?;
    tracing::info!(
        "Loaded {} attestations from {}",
        source.len(),
        cli.attestations.display()
    );

    // --json overrides the configured output format.
    let format = if cli.json { OutputFormat::Json } else { config.output };
    let ctx = Context {
        source,
        options: config.reputation,
        format,
    };

    match &cli.command {
        Commands::Score(cmd) => commands::score::run(cmd, &ctx)?,
        Commands::Paths(cmd) => commands::paths::run(cmd, &ctx)?,
        Commands::Graph => commands::graph::run(&ctx)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_attestations_flag_defaults_to_local_file() {
        let cli = Cli::try_parse_from(["vouch", "graph"]).unwrap();
        assert_eq!(cli.attestations, PathBuf::from("attestations.json"));
        assert_eq!(cli.config, PathBuf::from("vouch.toml"));
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "vouch",
            "score",
            "0xAbC",
            "--observer",
            "0xdef",
            "--attestations",
            "data/feed.json",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.attestations, PathBuf::from("data/feed.json"));
        assert!(cli.json);
        match cli.command {
            Commands::Score(cmd) => {
                assert_eq!(cmd.target, "0xAbC");
                assert_eq!(cmd.observer.as_deref(), Some("0xdef"));
            }
            other => panic!("expected score, got {:?}", other),
        }
    }
}
