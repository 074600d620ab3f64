//! Where a sync run puts things.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ChallengeSummary;
use crate::naming::{asset_file_name, metadata_file_name};

/// `<output>/README.md`, `<output>/<folder>/<category>_<slug>.md`,
/// `<output>/<folder>/<slug>_<file>`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    challenges_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(output_dir: &Path, challenges_folder: &str) -> Self {
        Self {
            root: output_dir.to_path_buf(),
            challenges_dir: output_dir.join(challenges_folder),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn challenges_dir(&self) -> &Path {
        &self.challenges_dir
    }

    pub fn create_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.challenges_dir)
            .with_context(|| format!("failed to create {}", self.challenges_dir.display()))
    }

    pub fn metadata_path(&self, summary: &ChallengeSummary) -> PathBuf {
        self.challenges_dir
            .join(metadata_file_name(&summary.category, &summary.name))
    }

    pub fn asset_path(&self, summary: &ChallengeSummary, url: &url::Url) -> PathBuf {
        self.challenges_dir.join(asset_file_name(&summary.name, url))
    }
}
