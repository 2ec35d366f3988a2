//! Standings CLI
//!
//! Single-match deltas, CSV → standings table, request schemas.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use standings_core::{MatchScore, StandingsCalculator, StandingsConfig, StandingsTable};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Compute league standings from match results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Standings delta for a single finished match
    Delta {
        /// Sport name (e.g. "football", "Ice Hockey")
        #[arg(long)]
        sport: String,

        /// Home score (sets for volleyball)
        #[arg(long)]
        home: u32,

        /// Away score (sets for volleyball)
        #[arg(long)]
        away: u32,

        /// Match was decided in overtime
        #[arg(long, default_value = "false")]
        overtime: bool,

        /// Match was decided by a penalty shootout
        #[arg(long, default_value = "false")]
        penalties: bool,

        /// Config JSON file (falls back to STANDINGS_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Build a standings table from a CSV of fixtures
    Table {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Sport name
        #[arg(long)]
        sport: String,

        /// Config JSON file (falls back to STANDINGS_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a text table
        #[arg(long, default_value = "false")]
        json: bool,

        /// Write the output to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the JSON Schema of the API requests
    Schema,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Delta {
            sport,
            home,
            away,
            overtime,
            penalties,
            config,
        } => {
            let calculator = StandingsCalculator::new(load_config(config.as_ref())?);
            let score = MatchScore {
                home_score: home,
                away_score: away,
                has_overtime: overtime,
                has_penalties: penalties,
            };

            let delta = calculator
                .calculate(&sport, &score)
                .with_context(|| format!("Failed to score {} {}-{}", sport, home, away))?;
            println!("{}", serde_json::to_string_pretty(&delta)?);
        }

        Commands::Table {
            csv,
            sport,
            config,
            json,
            out,
        } => {
            let calculator = StandingsCalculator::new(load_config(config.as_ref())?);
            let fixtures = standings_cli::load_fixtures_csv(&csv)?;
            let table = StandingsTable::from_fixtures(&sport, calculator, &fixtures)
                .with_context(|| format!("Failed to build {} table", sport))?;

            let rendered = if json {
                serde_json::to_string_pretty(&table.rows())?
            } else {
                standings_cli::render_text_table(&table.rows(), table.rule())
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, rendered).with_context(|| {
                        format!("Failed to write output file: {}", path.display())
                    })?;
                    log::info!("Table written to {}", path.display());
                }
                None => print!("{}", ensure_trailing_newline(rendered)),
            }
        }

        Commands::Schema => {
            let schema = standings_core::request_schema_json().map_err(anyhow::Error::msg)?;
            println!("{}", schema);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the command output
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

#[cfg(feature = "cli")]
fn load_config(path: Option<&PathBuf>) -> Result<StandingsConfig> {
    match path {
        Some(path) => StandingsConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => StandingsConfig::from_env().context("Failed to load config from environment"),
    }
}

#[cfg(feature = "cli")]
fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("standings CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
