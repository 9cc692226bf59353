//! Task graph execution.
//!
//! Series nodes run sequentially and fail fast; parallel nodes run every
//! child to completion on a bounded pool of scoped threads, so one task's
//! failure never aborts a concurrently running sibling.

use crate::pipeline::{RunResult, TaskContext, TaskGraph, TaskKind, TaskResult};
use crate::tasks;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

/// Error during graph execution.
#[derive(Debug)]
pub enum RunnerError {
    /// IO error preparing the run
    Io(std::io::Error),
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<std::io::Error> for RunnerError {
    fn from(e: std::io::Error) -> Self {
        RunnerError::Io(e)
    }
}

/// Executes task graphs against a context.
pub struct Runner {
    /// Run context
    context: TaskContext,
    /// Whether to do a dry run (report steps without executing)
    dry_run: bool,
}

impl Runner {
    /// Create a new runner.
    pub fn new(context: TaskContext) -> Self {
        Self { context, dry_run: false }
    }

    /// Set dry-run mode (don't actually execute tasks).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get the run context.
    pub fn context(&self) -> &TaskContext {
        &self.context
    }

    /// Run a task graph to completion.
    pub fn run(&self, graph: &TaskGraph) -> Result<RunResult, RunnerError> {
        let start = Instant::now();

        if self.context.is_verbose() {
            let steps = graph.steps();
            println!("Pipeline: {} tasks", steps.len());
            for step in &steps {
                println!("  - {}", step);
            }
        }

        if !self.dry_run {
            std::fs::create_dir_all(self.context.out_dir())?;
        }

        let mut result = RunResult::new();
        self.execute_node(graph, &mut result);
        result.total_duration = start.elapsed();

        Ok(result)
    }

    /// Execute a graph node. Returns whether every task in it succeeded.
    fn execute_node(&self, node: &TaskGraph, result: &mut RunResult) -> bool {
        match node {
            TaskGraph::Step(kind) => {
                let task_result = self.execute_task(*kind);
                let ok = task_result.is_success();
                result.add_result(task_result);
                ok
            }
            TaskGraph::Series(children) => {
                for child in children {
                    if !self.execute_node(child, result) {
                        return false;
                    }
                }
                true
            }
            TaskGraph::Parallel(children) => self.execute_parallel(children, result),
        }
    }

    /// Execute the children of a parallel node.
    ///
    /// Every child runs to completion regardless of sibling failures;
    /// results are appended in definition order.
    fn execute_parallel(&self, children: &[TaskGraph], result: &mut RunResult) -> bool {
        if children.is_empty() {
            return true;
        }

        // A single worker or a single child degenerates to sequential
        // execution, still join-all.
        if self.context.jobs() == 1 || children.len() == 1 {
            let mut all_ok = true;
            for child in children {
                if !self.execute_node(child, result) {
                    all_ok = false;
                }
            }
            return all_ok;
        }

        let collected: Mutex<Vec<(usize, Vec<TaskResult>, bool)>> = Mutex::new(Vec::new());
        let next_idx = AtomicUsize::new(0);

        std::thread::scope(|s| {
            let num_workers = self.context.jobs().min(children.len());

            for _ in 0..num_workers {
                let collected = &collected;
                let next_idx = &next_idx;

                s.spawn(move || loop {
                    let idx = next_idx.fetch_add(1, Ordering::SeqCst);
                    if idx >= children.len() {
                        break;
                    }

                    let mut sub = RunResult::new();
                    let ok = self.execute_node(&children[idx], &mut sub);
                    collected.lock().unwrap().push((idx, sub.tasks, ok));
                });
            }
        });

        // Restore definition order for deterministic reporting
        let mut items = collected.into_inner().unwrap();
        items.sort_by_key(|(idx, _, _)| *idx);

        let mut all_ok = true;
        for (_, tasks, ok) in items {
            if !ok {
                all_ok = false;
            }
            for task in tasks {
                result.add_result(task);
            }
        }
        all_ok
    }

    /// Execute a single task.
    fn execute_task(&self, kind: TaskKind) -> TaskResult {
        let start = Instant::now();

        if self.context.is_verbose() {
            println!("Running: {} ...", kind);
        }

        if self.dry_run {
            return TaskResult::skipped(kind);
        }

        match tasks::run_task(kind, &self.context) {
            Ok(report) => {
                let duration = start.elapsed();
                if self.context.is_verbose() {
                    println!("  Done in {:?}", duration);
                }
                TaskResult::success(kind, report.files_processed, duration)
            }
            Err(e) => {
                let duration = start.elapsed();
                if self.context.is_verbose() {
                    println!("  Failed: {}", e);
                }
                TaskResult::failed(kind, e, duration)
            }
        }
    }
}
