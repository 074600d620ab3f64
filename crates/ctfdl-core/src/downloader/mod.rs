//! Asset downloader.
//!
//! Streams one remote file per call into `<destination>.part` and renames it
//! into place when complete. [`download_all`] runs the files of one challenge
//! either inline (sequential) or on a bounded worker pool; in both cases
//! progress leaves the downloader as [`DownloadEvent`] values only.

mod error;
mod pool;
mod single;

pub use error::DownloadError;
pub use pool::{download_all, DownloadEvent, FileJob};
pub use single::download;

use std::path::Path;

/// Receives byte-level progress for one transfer.
pub trait TransferObserver {
    /// Called once before the first chunk. `None` means the size is unknown.
    fn on_length(&mut self, total: Option<u64>);
    /// Called for every chunk written to disk.
    fn on_chunk(&mut self, bytes: u64);
    /// Called after the file has been renamed into place.
    fn on_complete(&mut self, _destination: &Path, _bytes: u64) {}
}

