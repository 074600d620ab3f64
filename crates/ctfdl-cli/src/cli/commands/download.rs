//! `ctfdl download`: one sync pass against a CTFd instance.

use anyhow::{Context, Result};
use ctfdl_core::api::ApiClient;
use ctfdl_core::auth::Credential;
use ctfdl_core::config::CtfdlConfig;
use ctfdl_core::http::{CurlOptions, HttpClient};
use ctfdl_core::progress::{QuietProgress, TerminalProgress};
use ctfdl_core::sync::{self, SyncOptions, SyncReport};

use crate::cli::DownloadArgs;

pub fn run_download(args: &DownloadArgs, cfg: &CtfdlConfig) -> Result<()> {
    let credential = Credential::parse(&args.credential);
    let http = HttpClient::new(CurlOptions::from_config(cfg));
    let api = ApiClient::new(http, &args.url, &credential)
        .with_context(|| format!("invalid CTF URL {:?}", args.url))?;
    tracing::info!(api = %api.api_base(), credential = ?credential, "starting sync");

    let opts = SyncOptions {
        ctf_name: args.name.clone(),
        output_dir: args.output.clone(),
        challenges_folder: cfg.challenges_folder.clone(),
        update: args.update,
        max_parallel_downloads: args
            .jobs
            .map(usize::from)
            .unwrap_or(cfg.max_parallel_downloads)
            .max(1),
    };

    let report = if args.quiet {
        sync::run(&api, &opts, &mut QuietProgress::new())?
    } else {
        sync::run(&api, &opts, &mut TerminalProgress::new())?
    };

    print_summary(&report);
    println!("Download completed!");
    Ok(())
}

fn print_summary(report: &SyncReport) {
    println!(
        "{} challenge(s): {} degraded, {} skipped, {} failed; {} file(s) downloaded, {} failed",
        report.challenges,
        report.degraded,
        report.skipped,
        report.failed,
        report.files_downloaded,
        report.files_failed
    );
    println!("Index: {}", report.index_path.display());
}
