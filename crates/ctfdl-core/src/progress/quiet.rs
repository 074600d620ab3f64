//! Sink without bars: records go to the log.

use super::{ProgressSink, TaskId, TaskSize};

/// Drops progress; forwards records and warnings to `tracing`.
#[derive(Debug, Default)]
pub struct QuietProgress {
    next_id: u64,
}

impl QuietProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for QuietProgress {
    fn add_task(&mut self, _label: &str, _size: TaskSize) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    fn advance(&mut self, _task: TaskId, _delta: u64) {}

    fn finish(&mut self, _task: TaskId) {}

    fn record(&mut self, line: &str) {
        tracing::info!("{}", line);
    }

    fn warn(&mut self, line: &str) {
        tracing::warn!("{}", line);
    }
}
