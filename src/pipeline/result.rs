//! Pipeline result types.
//!
//! Contains types for representing the outcome of pipeline runs.

use crate::pipeline::graph::TaskKind;
use std::time::Duration;

/// Status of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task succeeded
    Success,
    /// Task skipped (dry run)
    Skipped,
    /// Task failed with error
    Failed(String),
}

impl TaskStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, TaskStatus::Success | TaskStatus::Skipped)
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, TaskStatus::Failed(_))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Success => write!(f, "success"),
            TaskStatus::Skipped => write!(f, "skipped"),
            TaskStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of running a single task.
#[derive(Debug, Clone)]
pub struct TaskResult {
    /// Which task ran
    pub kind: TaskKind,
    /// Task status
    pub status: TaskStatus,
    /// Number of files the task processed
    pub files_processed: usize,
    /// Task duration
    pub duration: Duration,
}

impl TaskResult {
    /// Create a successful result.
    pub fn success(kind: TaskKind, files_processed: usize, duration: Duration) -> Self {
        Self { kind, status: TaskStatus::Success, files_processed, duration }
    }

    /// Create a skipped result.
    pub fn skipped(kind: TaskKind) -> Self {
        Self { kind, status: TaskStatus::Skipped, files_processed: 0, duration: Duration::ZERO }
    }

    /// Create a failed result.
    pub fn failed(kind: TaskKind, error: String, duration: Duration) -> Self {
        Self { kind, status: TaskStatus::Failed(error), files_processed: 0, duration }
    }

    /// Check if this result is successful.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Result of a complete pipeline run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Results for each task that ran
    pub tasks: Vec<TaskResult>,
    /// Total run duration
    pub total_duration: Duration,
}

impl RunResult {
    /// Create a new empty run result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task result.
    pub fn add_result(&mut self, result: TaskResult) {
        self.tasks.push(result);
    }

    /// Get the number of successful tasks.
    pub fn success_count(&self) -> usize {
        self.tasks.iter().filter(|r| matches!(r.status, TaskStatus::Success)).count()
    }

    /// Get the number of skipped tasks.
    pub fn skipped_count(&self) -> usize {
        self.tasks.iter().filter(|r| matches!(r.status, TaskStatus::Skipped)).count()
    }

    /// Get the number of failed tasks.
    pub fn failed_count(&self) -> usize {
        self.tasks.iter().filter(|r| r.status.is_failure()).count()
    }

    /// Get the total number of files processed.
    pub fn files_processed(&self) -> usize {
        self.tasks.iter().map(|r| r.files_processed).sum()
    }

    /// Check if the overall run succeeded (no failures).
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Get failed task results.
    pub fn failures(&self) -> Vec<&TaskResult> {
        self.tasks.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// Format a summary of the run.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        let success = self.success_count();
        let skipped = self.skipped_count();
        let failed = self.failed_count();
        let total = self.tasks.len();

        if failed > 0 {
            lines.push(format!(
                "Build failed: {} succeeded, {} skipped, {} failed ({} total)",
                success, skipped, failed, total
            ));
            for task in self.failures() {
                lines.push(format!("  - {}: {}", task.kind, task.status));
            }
        } else {
            lines.push(format!(
                "Build succeeded: {} tasks, {} files in {:?}",
                total,
                self.files_processed(),
                self.total_duration
            ));
        }

        lines.join("\n")
    }
}
