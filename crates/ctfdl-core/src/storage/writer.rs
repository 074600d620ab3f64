//! Sequential writer for a `.part` file that becomes visible only when complete.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::temp_path;

/// A download in progress. Bytes go to `<final>.part`; [`PartFile::finalize`]
/// syncs and renames it over the final path, [`PartFile::discard`] removes it.
#[derive(Debug)]
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Create (or truncate) the temp file next to `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(PartFile {
            file,
            temp_path,
            final_path: final_path.to_path_buf(),
            written: 0,
        })
    }

    /// Append `data` at the current end.
    pub fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Sync and atomically rename the temp file to the final path. On failure
    /// the temp file is removed and the final path is left as it was.
    pub fn finalize(self) -> io::Result<PathBuf> {
        let PartFile {
            file,
            temp_path,
            final_path,
            ..
        } = self;
        let synced = file.sync_all();
        drop(file);
        if let Err(e) = synced.and_then(|()| std::fs::rename(&temp_path, &final_path)) {
            remove_temp(&temp_path);
            return Err(e);
        }
        Ok(final_path)
    }

    /// Drop the temp file; the final path is left untouched.
    pub fn discard(self) {
        drop(self.file);
        remove_temp(&self.temp_path);
    }
}

fn remove_temp(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::debug!(path = %path.display(), "could not remove temp file: {}", e);
    }
}
