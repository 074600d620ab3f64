//! One synchronization pass.
//!
//! Fetch the challenge list (the only fatal step), then for each entry in
//! list order: detail fetch, metadata stub, asset downloads, link scan. The
//! index is regenerated from the full list at the end, whatever happened to
//! individual challenges.

mod challenge;
mod layout;

pub use layout::OutputLayout;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::api::{ApiClient, ChallengeSummary};
use crate::index::write_index;
use crate::links::LinkScanner;
use crate::naming::metadata_file_name;
use crate::progress::ProgressSink;
use challenge::ChallengeOutcome;

pub const EXTERNAL_LINKS_ADVISORY: &str =
    "External links found in descriptions; check for manual download needs.";

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Title written at the top of the index.
    pub ctf_name: String,
    pub output_dir: PathBuf,
    pub challenges_folder: String,
    /// Skip challenges whose metadata file already exists.
    pub update: bool,
    /// Worker-pool size for the files of one challenge.
    pub max_parallel_downloads: usize,
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries in the challenge list (and in the index).
    pub challenges: usize,
    /// Written from list data because the detail fetch failed.
    pub degraded: usize,
    /// Left alone in update mode.
    pub skipped: usize,
    /// Metadata stub could not be written.
    pub failed: usize,
    pub files_downloaded: usize,
    pub files_failed: usize,
    /// URLs found in descriptions, in order, duplicates kept.
    pub external_links: Vec<String>,
    pub index_path: PathBuf,
}

impl SyncReport {
    fn absorb(&mut self, outcome: ChallengeOutcome) {
        if outcome.skipped {
            self.skipped += 1;
        }
        if outcome.degraded {
            self.degraded += 1;
        }
        self.files_downloaded += outcome.files_downloaded;
        self.files_failed += outcome.files_failed;
        self.external_links.extend(outcome.links);
    }
}

/// Runs one pass. Returns `Err` only when the challenge list cannot be
/// fetched or the output tree/index cannot be written.
pub fn run(api: &ApiClient, opts: &SyncOptions, sink: &mut dyn ProgressSink) -> Result<SyncReport> {
    let summaries = api
        .list_challenges()
        .context("failed to retrieve challenges")?;
    tracing::info!(count = summaries.len(), "retrieved challenge list");

    let layout = OutputLayout::new(&opts.output_dir, &opts.challenges_folder);
    layout.create_dirs()?;
    warn_on_collisions(&summaries, sink);

    let scanner = LinkScanner::new()?;
    let ctx = challenge::Context {
        api,
        layout: &layout,
        scanner: &scanner,
        update: opts.update,
        max_parallel_downloads: opts.max_parallel_downloads,
    };

    let mut report = SyncReport {
        challenges: summaries.len(),
        ..Default::default()
    };
    for summary in &summaries {
        match challenge::process(&ctx, summary, sink) {
            Ok(outcome) => report.absorb(outcome),
            Err(e) => {
                report.failed += 1;
                tracing::error!(id = summary.id, "challenge failed: {:#}", e);
                sink.warn(&format!("{:#}", e));
            }
        }
    }

    report.index_path = write_index(
        layout.root(),
        &opts.ctf_name,
        &opts.challenges_folder,
        &summaries,
    )
    .context("failed to write index")?;

    if !report.external_links.is_empty() {
        sink.warn(EXTERNAL_LINKS_ADVISORY);
    }
    Ok(report)
}

/// Distinct challenges that map to one metadata file overwrite each other;
/// say so rather than renaming.
fn warn_on_collisions(summaries: &[ChallengeSummary], sink: &mut dyn ProgressSink) {
    let mut seen: HashMap<String, &ChallengeSummary> = HashMap::new();
    for s in summaries {
        let file = metadata_file_name(&s.category, &s.name);
        if let Some(first) = seen.get(&file) {
            tracing::warn!(first = first.id, second = s.id, file = %file, "slug collision");
            sink.warn(&format!(
                "Challenges {:?} (#{}) and {:?} (#{}) share {}; the later one wins",
                first.name, first.id, s.name, s.id, file
            ));
        } else {
            seen.insert(file, s);
        }
    }
}
