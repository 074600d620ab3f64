//! Progress sink that remembers everything it was told.

use std::collections::HashMap;

use ctfdl_core::progress::{ProgressSink, TaskId, TaskSize};

#[derive(Debug, Default)]
pub struct RecordingSink {
    next_id: u64,
    pub tasks: Vec<(TaskId, String, TaskSize)>,
    pub advanced: HashMap<TaskId, u64>,
    pub finished: Vec<TaskId>,
    pub records: Vec<String>,
    pub warnings: Vec<String>,
}

impl RecordingSink {
    pub fn tasks_named(&self, prefix: &str) -> Vec<&(TaskId, String, TaskSize)> {
        self.tasks
            .iter()
            .filter(|(_, label, _)| label.starts_with(prefix))
            .collect()
    }

    pub fn advanced_by(&self, task: TaskId) -> u64 {
        self.advanced.get(&task).copied().unwrap_or(0)
    }

    pub fn is_finished(&self, task: TaskId) -> bool {
        self.finished.contains(&task)
    }
}

impl ProgressSink for RecordingSink {
    fn add_task(&mut self, label: &str, size: TaskSize) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push((id, label.to_string(), size));
        id
    }

    fn advance(&mut self, task: TaskId, delta: u64) {
        *self.advanced.entry(task).or_default() += delta;
    }

    fn finish(&mut self, task: TaskId) {
        self.finished.push(task);
    }

    fn record(&mut self, line: &str) {
        self.records.push(line.to_string());
    }

    fn warn(&mut self, line: &str) {
        self.warnings.push(line.to_string());
    }
}
