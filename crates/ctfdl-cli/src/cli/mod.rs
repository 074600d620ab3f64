//! CLI for ctfdl.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ctfdl_core::config;
use std::path::PathBuf;

use commands::{run_download, run_format};

/// Mirror a CTFd instance into a local Markdown tree.
#[derive(Debug, Parser)]
#[command(name = "ctfdl")]
#[command(about = "ctfdl: mirror CTFd challenges, files and descriptions", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every visible challenge, its files and an index.
    Download(DownloadArgs),

    /// Mark solved challenges in the index and optionally link images.
    Format {
        /// Directory produced by `ctfdl download`.
        writeup_dir: PathBuf,

        /// Rewrite (((image.png))) into links to <writeup_dir>/images/.
        #[arg(long)]
        link_images: bool,
    },
}

#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// CTF base URL (e.g. http://myctf.ctfd.io/).
    #[arg(short, long)]
    pub url: String,

    /// CTF name, used as the index title.
    #[arg(short, long)]
    pub name: String,

    /// API token or session cookie ("session=..." is sent as a cookie).
    #[arg(
        short = 't',
        long = "session",
        visible_short_aliases = ['c', 's'],
        visible_aliases = ["token", "cookie"],
        value_name = "CRED"
    )]
    pub credential: String,

    /// Output directory.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Leave challenges that already have a metadata file alone.
    #[arg(long)]
    pub update: bool,

    /// Parallel file downloads per challenge (overrides config).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// No progress bars; log lines only.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Download(args) => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_download(&args, &cfg)?;
            }
            CliCommand::Format {
                writeup_dir,
                link_images,
            } => run_format(&writeup_dir, link_images)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
