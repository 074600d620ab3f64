//! One challenge: detail fetch, stub, assets, link scan.

use anyhow::{Context as _, Result};
use std::collections::{HashMap, HashSet};

use super::OutputLayout;
use crate::api::{ApiClient, ChallengeDetail, ChallengeSummary};
use crate::downloader::{download_all, DownloadEvent, FileJob};
use crate::links::LinkScanner;
use crate::metadata::write_metadata;
use crate::naming::asset_base_name;
use crate::progress::{
    ProgressSink, TaskId, TaskSize, CHALLENGE_UNITS, DETAIL_UNITS, FILES_UNITS, METADATA_UNITS,
};

/// Shared, read-only state for every challenge of a run.
pub(super) struct Context<'a> {
    pub api: &'a ApiClient,
    pub layout: &'a OutputLayout,
    pub scanner: &'a LinkScanner,
    pub update: bool,
    pub max_parallel_downloads: usize,
}

#[derive(Debug, Default)]
pub(super) struct ChallengeOutcome {
    pub skipped: bool,
    pub degraded: bool,
    pub files_downloaded: usize,
    pub files_failed: usize,
    pub links: Vec<String>,
}

/// Runs every step for `summary`. An `Err` means the metadata stub could not
/// be written; the caller logs it and moves on.
pub(super) fn process(
    ctx: &Context<'_>,
    summary: &ChallengeSummary,
    sink: &mut dyn ProgressSink,
) -> Result<ChallengeOutcome> {
    let task = sink.add_task(
        &format!("Processing Challenge: {}", summary.name),
        TaskSize::Units(CHALLENGE_UNITS),
    );
    let result = process_steps(ctx, summary, task, sink);
    sink.finish(task);
    result
}

fn process_steps(
    ctx: &Context<'_>,
    summary: &ChallengeSummary,
    task: TaskId,
    sink: &mut dyn ProgressSink,
) -> Result<ChallengeOutcome> {
    if ctx.update && ctx.layout.metadata_path(summary).exists() {
        tracing::info!(id = summary.id, "metadata present, skipping in update mode");
        sink.record(&format!("Skipped existing challenge: {}", summary.name));
        sink.advance(task, CHALLENGE_UNITS);
        return Ok(ChallengeOutcome {
            skipped: true,
            ..Default::default()
        });
    }

    sink.advance(task, DETAIL_UNITS);
    let detail = match ctx.api.get_challenge_detail(summary.id) {
        Ok(detail) => detail.with_identity_of(summary),
        Err(e) => {
            tracing::warn!(id = summary.id, "detail fetch failed, using list entry: {}", e);
            sink.warn(&format!(
                "Failed to retrieve details for challenge ID {}: {}",
                summary.id, e
            ));
            ChallengeDetail::degraded(summary)
        }
    };

    let saved = write_metadata(&detail, ctx.layout.challenges_dir())
        .with_context(|| format!("failed to write metadata for {:?}", summary.name))?;
    sink.record(&format!("Saved challenge file: {}", saved.display()));
    sink.advance(task, METADATA_UNITS);

    let (files_downloaded, files_failed) = download_files(ctx, summary, &detail, sink);
    let links = ctx.scanner.extract(&detail.description);
    sink.advance(task, FILES_UNITS);

    Ok(ChallengeOutcome {
        skipped: false,
        degraded: detail.degraded,
        files_downloaded,
        files_failed,
        links,
    })
}

/// Downloads every attached file; returns (downloaded, failed).
fn download_files(
    ctx: &Context<'_>,
    summary: &ChallengeSummary,
    detail: &ChallengeDetail,
    sink: &mut dyn ProgressSink,
) -> (usize, usize) {
    let mut failed = 0usize;
    let mut jobs: Vec<FileJob> = Vec::with_capacity(detail.files.len());
    let mut destinations = HashSet::new();

    for reference in &detail.files {
        let url = match ctx.api.resolve(reference) {
            Ok(url) => url,
            Err(e) => {
                failed += 1;
                tracing::warn!(id = summary.id, reference = %reference, "bad file reference: {}", e);
                sink.warn(&format!("Cannot resolve file reference {:?}: {}", reference, e));
                continue;
            }
        };
        let destination = ctx.layout.asset_path(summary, &url);
        if !destinations.insert(destination.clone()) {
            // Two references with the same base name would race for one path.
            sink.warn(&format!(
                "Duplicate file name {} in {}; keeping the first",
                destination.display(),
                summary.name
            ));
            continue;
        }
        jobs.push(FileJob {
            headers: ctx.api.asset_headers(&url),
            label: asset_base_name(&url),
            url,
            destination,
        });
    }

    let mut downloaded = 0usize;
    let mut tasks: HashMap<usize, TaskId> = HashMap::new();
    download_all(ctx.api.http(), &jobs, ctx.max_parallel_downloads, |event| match event {
        DownloadEvent::Started { index, total } => {
            let task = sink.add_task(
                &format!("Downloading File: {}", jobs[index].label),
                TaskSize::Bytes(total),
            );
            tasks.insert(index, task);
        }
        DownloadEvent::Progress { index, bytes } => {
            if let Some(task) = tasks.get(&index) {
                sink.advance(*task, bytes);
            }
        }
        DownloadEvent::Finished {
            index,
            destination,
            bytes,
        } => {
            if let Some(task) = tasks.remove(&index) {
                sink.finish(task);
            }
            downloaded += 1;
            tracing::info!(id = summary.id, bytes, path = %destination.display(), "asset downloaded");
            sink.record(&format!(
                "Downloaded {} to {}",
                jobs[index].label,
                destination.display()
            ));
        }
        DownloadEvent::Failed { index, error } => {
            if let Some(task) = tasks.remove(&index) {
                sink.finish(task);
            }
            failed += 1;
            tracing::warn!(id = summary.id, file = %jobs[index].label, "download failed: {}", error);
            sink.warn(&format!("Failed to download {}: {}", jobs[index].label, error));
        }
    });

    (downloaded, failed)
}
