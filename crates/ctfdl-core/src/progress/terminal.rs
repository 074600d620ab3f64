//! Terminal bars via indicatif.

use std::collections::HashMap;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::{ProgressSink, TaskId, TaskSize};

const BAR_TEMPLATE: &str = "{msg} {wide_bar} {percent:>3}% • {eta}";
const BYTES_TEMPLATE: &str = "{msg} {wide_bar} {bytes}/{total_bytes} • {eta}";
const SPINNER_TEMPLATE: &str = "{spinner} {msg} {bytes} ({binary_bytes_per_sec})";

/// Live bars on stderr; records print above them.
pub struct TerminalProgress {
    multi: MultiProgress,
    bars: HashMap<TaskId, ProgressBar>,
    next_id: u64,
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: HashMap::new(),
            next_id: 0,
        }
    }

    fn style(template: &str) -> ProgressStyle {
        ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn print(&self, line: &str) {
        if self.multi.println(line).is_err() {
            eprintln!("{}", line);
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn add_task(&mut self, label: &str, size: TaskSize) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let bar = match size {
            TaskSize::Units(len) => ProgressBar::new(len).with_style(Self::style(BAR_TEMPLATE)),
            TaskSize::Bytes(Some(len)) => {
                ProgressBar::new(len).with_style(Self::style(BYTES_TEMPLATE))
            }
            TaskSize::Bytes(None) => {
                let pb = ProgressBar::new_spinner().with_style(Self::style(SPINNER_TEMPLATE));
                pb.enable_steady_tick(Duration::from_millis(120));
                pb
            }
        };
        let bar = self.multi.add(bar);
        bar.set_message(label.to_string());
        self.bars.insert(id, bar);
        id
    }

    fn advance(&mut self, task: TaskId, delta: u64) {
        if let Some(bar) = self.bars.get(&task) {
            bar.inc(delta);
        }
    }

    fn finish(&mut self, task: TaskId) {
        if let Some(bar) = self.bars.remove(&task) {
            bar.finish();
        }
    }

    fn record(&mut self, line: &str) {
        self.print(line);
    }

    fn warn(&mut self, line: &str) {
        self.print(&format!("warning: {}", line));
    }
}
