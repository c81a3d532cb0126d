//! CLI for the SMD simulated downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use smd_core::config;

use commands::{run_completions, run_detect, run_fetch, run_man, run_session};

/// Top-level CLI for the SMD simulated downloader.
#[derive(Debug, Parser)]
#[command(name = "smd")]
#[command(about = "SMD: simulated social media downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch metadata for a link and show its mock download options.
    Fetch {
        /// Social media link (YouTube, Instagram or TikTok).
        url: String,

        /// Emit the metadata and options as JSON instead of a card.
        #[arg(long)]
        json: bool,

        /// Watermark text stamped on the pretend download.
        #[arg(long, value_name = "TEXT")]
        watermark: Option<String>,

        /// Override the simulated lookup delay in milliseconds.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Classify a link without the simulated wait.
    Detect {
        /// Link to classify.
        url: String,
    },

    /// Interactive page session: fetch, edit the watermark, undo/redo.
    Session {
        /// Override the simulated lookup delay in milliseconds.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                json,
                watermark,
                delay_ms,
            } => run_fetch(&cfg, &url, json, watermark.as_deref(), delay_ms).await?,
            CliCommand::Detect { url } => run_detect(&url)?,
            CliCommand::Session { delay_ms } => run_session(&cfg, delay_ms).await?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
