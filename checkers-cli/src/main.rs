//! Checkers CLI - console front end for the rules engine
//!
//! Commands:
//! - play: Play a game on the console (or from a script)
//! - rules: Write the default rule set as JSON

mod input;
mod play;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkers_core::RuleSet;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "8x8 checkers on the console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play(play::PlayArgs),
    /// Write the default rule set as JSON
    Rules {
        /// Output file (stdout if omitted)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Rules { output } => write_rules(output),
    }
}

fn write_rules(output: Option<PathBuf>) -> Result<()> {
    let rules = RuleSet::default();
    match output {
        Some(path) => {
            rules
                .save(&path)
                .with_context(|| format!("Failed to write rules: {}", path.display()))?;
            tracing::info!("Wrote rules to {}", path.display());
        }
        None => println!("{}", rules.to_json()?),
    }
    Ok(())
}
