//! Main entry point for the parlor-rating command-line tool
//!
//! Reads match results or team line-ups as JSON, runs the configured rating
//! model or the predictor, and writes JSON to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parlor_rating::config::{validate_config, AppConfig};
use parlor_rating::rating::{ModelKind, RatingCalculator};
use parlor_rating::types::{MatchInput, PredictionInput};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parlor Rating - Bayesian skill ratings for team-based matches
#[derive(Parser)]
#[command(
    name = "parlor-rating",
    version,
    about = "Rate finished matches and predict outcomes with OpenSkill-style models",
    long_about = "Parlor Rating updates Gaussian player ratings after a match using one of five \
                 models (Bradley-Terry, Plackett-Luce, Thurstone-Mosteller) and predicts win, \
                 draw and placement probabilities for upcoming matches."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Rating model override
    #[arg(short, long, value_enum, value_name = "KIND")]
    model: Option<ModelKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate a finished match and print the updated teams
    Rate {
        /// Match JSON file, or - for stdin
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Predict win, draw and placement probabilities
    Predict {
        /// Teams JSON file, or - for stdin
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Validate the configuration, print it and exit
    Check,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(model) = args.model {
        config.model.kind = model;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Parse JSON from a file, or from stdin when the path is `-`
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON input in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

fn run(args: Args, config: AppConfig) -> Result<()> {
    match &args.command {
        Command::Rate { input } => {
            let input: MatchInput = read_json(input)?;
            let model = config.rating_model();
            info!(
                model = %model.kind(),
                teams = input.teams.len(),
                "Rating match"
            );

            let updated = model.rate(
                &input.teams,
                input.ranks.as_deref(),
                input.scores.as_deref(),
                input.weights.as_deref(),
            )?;
            print_json(&updated)
        }
        Command::Predict { input } => {
            let input: PredictionInput = read_json(input)?;
            let predictor = config.predictor();
            info!(teams = input.teams.len(), "Predicting outcome");

            let report = predictor.report(&input.teams)?;
            print_json(&report)
        }
        Command::Check => {
            info!("Configuration validation successful");
            debug!(?config, "Loaded configuration");
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        service = %config.service.name,
        version = parlor_rating::VERSION,
        "Starting"
    );

    run(args, config)
}
