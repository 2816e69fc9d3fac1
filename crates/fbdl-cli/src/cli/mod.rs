//! CLI for the fbdl link resolver.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fbdl_core::config;
use fbdl_core::QualityTag;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_get, run_info, run_man};

/// Top-level CLI for fbdl.
#[derive(Debug, Parser)]
#[command(name = "fbdl")]
#[command(about = "fbdl: resolve Facebook video links and save them", long_about = None)]
pub struct Cli {
    /// Extraction API endpoint (overrides the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a URL looks like a Facebook video URL (no network).
    Check {
        /// Candidate URL.
        url: String,
    },

    /// Resolve a video URL and show the available qualities.
    Info {
        /// Facebook video URL.
        url: String,
        /// Print the session state and result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a video URL and save one quality to disk.
    Get {
        /// Facebook video URL.
        url: String,
        /// Quality to save: hd or sd.
        #[arg(long, short, default_value = "hd", value_name = "QUALITY")]
        quality: QualityTag,
        /// Directory to save into (default: config download_dir, else current dir).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Check { url } => return run_check(url),
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let mut cfg = config::load_or_init()?;
        if let Some(endpoint) = cli.endpoint {
            cfg.endpoint = endpoint;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Info { url, json } => run_info(&cfg, &url, json).await?,
            CliCommand::Get {
                url,
                quality,
                download_dir,
            } => run_get(&cfg, &url, quality, download_dir).await?,
            CliCommand::Check { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
