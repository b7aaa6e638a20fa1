//! CLI for untrack.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use untrack_core::config;
use untrack_core::Untracker;

use commands::{run_resolve, run_rules, run_trackers};

/// Top-level CLI for untrack.
#[derive(Debug, Parser)]
#[command(name = "untrack")]
#[command(about = "Resolve tracking links and strip tracking parameters", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/untrack/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Follow each URL to its destination and print the cleaned result.
    Resolve {
        /// Tracking or shortened URLs; a missing scheme is allowed.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print one JSON object per URL instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// List hosts with a custom extractor.
    Trackers,

    /// List hosts with a cleanup rule.
    Rules,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let untracker = Untracker::from_config(&cfg)?;

        match cli.command {
            CliCommand::Resolve { urls, json } => run_resolve(&untracker, &urls, json)?,
            CliCommand::Trackers => run_trackers(&untracker),
            CliCommand::Rules => run_rules(&untracker),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
