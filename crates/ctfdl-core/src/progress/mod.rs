//! Reporting context for a sync run.
//!
//! The orchestrator owns one [`ProgressSink`] and is the only caller; download
//! workers report through events instead (see `downloader::DownloadEvent`).
//! A challenge is one task of [`CHALLENGE_UNITS`]; each file is its own task
//! sized in bytes, or unsized when the server gives no length.

mod quiet;
mod terminal;

pub use quiet::QuietProgress;
pub use terminal::TerminalProgress;

/// Units in one challenge task.
pub const CHALLENGE_UNITS: u64 = 100;
/// Share of a challenge task for the detail fetch.
pub const DETAIL_UNITS: u64 = 10;
/// Share of a challenge task for the metadata write.
pub const METADATA_UNITS: u64 = 40;
/// Share of a challenge task for downloads and the link scan.
pub const FILES_UNITS: u64 = 50;

/// Handle for a task created by [`ProgressSink::add_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Size of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSize {
    /// Abstract work units (a challenge).
    Units(u64),
    /// Byte count of a transfer; `None` when the server sent no length.
    Bytes(Option<u64>),
}

/// Where progress and human-readable records go.
pub trait ProgressSink {
    fn add_task(&mut self, label: &str, size: TaskSize) -> TaskId;
    fn advance(&mut self, task: TaskId, delta: u64);
    fn finish(&mut self, task: TaskId);
    /// One-line record of something done (saved file, downloaded asset).
    fn record(&mut self, line: &str);
    /// One-line advisory or per-item failure; never aborts the run.
    fn warn(&mut self, line: &str);
}
