//! Watch mode for automatic rebuilds on file changes
//!
//! Provides file system watching with debouncing for the `skit watch`
//! command. Changed files are classified by asset kind and only the
//! mapped tasks re-run; a fonts change also regenerates the font-face
//! fragment.

use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::paths::AssetKind;
use crate::pipeline::{build_graph, change_graph, RunResult, Runner, TaskContext, TaskGraph};

/// Error during watch mode
#[derive(Debug)]
pub enum WatchError {
    /// Failed to initialize file watcher
    WatcherInit(notify::Error),
    /// Failed to add watch path
    WatchPath(notify::Error),
    /// Channel receive error
    ChannelError(String),
    /// Failed to prepare a rebuild
    Runner(String),
    /// Source directory not found
    SourceNotFound(PathBuf),
}

impl std::fmt::Display for WatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchError::WatcherInit(e) => write!(f, "Failed to initialize file watcher: {}", e),
            WatchError::WatchPath(e) => write!(f, "Failed to watch path: {}", e),
            WatchError::ChannelError(msg) => write!(f, "Watch channel error: {}", msg),
            WatchError::Runner(msg) => write!(f, "Rebuild error: {}", msg),
            WatchError::SourceNotFound(path) => {
                write!(f, "Source directory not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for WatchError {}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape code to clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
}

/// Format duration for display
fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Get current timestamp for logging
fn timestamp() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
    let secs = now.as_secs() % 86400; // seconds since midnight
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Stable task order for rebuild graphs. Styles run last so a freshly
/// regenerated font-face fragment is picked up in the same pass.
const REBUILD_ORDER: [AssetKind; 7] = [
    AssetKind::Pages,
    AssetKind::Scripts,
    AssetKind::Images,
    AssetKind::Fonts,
    AssetKind::Icons,
    AssetKind::Media,
    AssetKind::Styles,
];

/// Build the graph covering a set of changed asset kinds.
///
/// Kinds run in series in the fixed [`REBUILD_ORDER`]; each kind
/// contributes its change graph (fonts changes pull in fragment
/// regeneration).
fn graph_for_changes(kinds: &HashSet<AssetKind>) -> TaskGraph {
    let nodes: Vec<TaskGraph> = REBUILD_ORDER
        .iter()
        .filter(|kind| kinds.contains(kind))
        .map(|kind| change_graph(*kind))
        .collect();
    TaskGraph::series(nodes)
}

/// Watch for file changes and rebuild automatically.
///
/// Runs one full build first, then blocks until interrupted (Ctrl+C).
/// Watcher setup failures are fatal; task failures during a rebuild are
/// reported and watching continues.
pub fn watch_and_rebuild(context: TaskContext) -> Result<(), WatchError> {
    let src_dir = context.src_dir();
    if !src_dir.exists() {
        return Err(WatchError::SourceNotFound(src_dir));
    }

    let watch_config = context.config().watch.clone();
    let paths = context.paths();
    let runner = Runner::new(context);

    // Create channel for debounced events
    let (tx, rx) = channel();

    let debounce_duration = Duration::from_millis(watch_config.debounce_ms as u64);
    let mut debouncer = new_debouncer(debounce_duration, tx).map_err(WatchError::WatcherInit)?;

    debouncer
        .watcher()
        .watch(&src_dir, RecursiveMode::Recursive)
        .map_err(WatchError::WatchPath)?;

    // Initial full build
    if watch_config.clear_screen {
        clear_screen();
    }
    println!("[{}] Building...", timestamp());
    let result = runner.run(&build_graph()).map_err(|e| WatchError::Runner(e.to_string()))?;
    print_run_result(&result);
    println!("[{}] Watching {} for changes...", timestamp(), src_dir.display());

    // Watch loop
    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                // Classify the changed files by asset kind
                let mut changed: HashSet<AssetKind> = HashSet::new();
                for event in events
                    .iter()
                    .filter(|e| matches!(e.kind, DebouncedEventKind::Any))
                {
                    if let Some(kind) = paths.kind_for_change(&event.path) {
                        if let Some(name) = event.path.file_name() {
                            println!(
                                "[{}] Changed: {} ({})",
                                timestamp(),
                                name.to_string_lossy(),
                                kind
                            );
                        }
                        changed.insert(kind);
                    }
                }

                if !changed.is_empty() {
                    if watch_config.clear_screen {
                        clear_screen();
                    }

                    let mut names: Vec<String> = changed.iter().map(|k| k.to_string()).collect();
                    names.sort();
                    println!("[{}] Rebuilding: {}", timestamp(), names.join(", "));
                    let graph = graph_for_changes(&changed);
                    match runner.run(&graph) {
                        Ok(result) => print_run_result(&result),
                        Err(e) => eprintln!("[{}] Rebuild error: {}", timestamp(), e),
                    }

                    println!(
                        "[{}] Watching {} for changes...",
                        timestamp(),
                        src_dir.display()
                    );
                }
            }
            Ok(Err(error)) => {
                // Watch error (non-fatal) - log but continue watching
                eprintln!("[{}] Watch error: {:?}", timestamp(), error);
                eprintln!("[{}] Continuing to watch...", timestamp());
            }
            Err(e) => {
                return Err(WatchError::ChannelError(e.to_string()));
            }
        }
    }
}

/// Print a run result to the console.
fn print_run_result(result: &RunResult) {
    if result.is_success() {
        println!(
            "[{}] Build complete ({}) - Tasks: {} | Files: {}",
            timestamp(),
            format_duration(result.total_duration),
            result.tasks.len(),
            result.files_processed()
        );
    } else {
        let failed = result.failed_count();
        println!(
            "[{}] Build failed ({}) - {} error{}",
            timestamp(),
            format_duration(result.total_duration),
            failed,
            if failed == 1 { "" } else { "s" }
        );
        for task in result.failures() {
            eprintln!("[{}] Error in {}: {}", timestamp(), task.kind, task.status);
        }
    }
}
