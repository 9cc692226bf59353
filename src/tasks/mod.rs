//! Concrete task implementations.
//!
//! Each [`TaskKind`] maps to one function taking the run context and
//! returning a [`TaskReport`] or an error message. Errors are plain
//! strings; the runner turns them into per-task failure statuses so a
//! failing task never takes down the rest of the pipeline.

pub mod styles;

use crate::fonts::FontStyleGenerator;
use crate::paths::{is_partial, AssetKind, AssetPaths};
use crate::pipeline::{TaskContext, TaskKind};
use glob::glob;
use std::fs;
use std::path::PathBuf;

/// Outcome of a single task.
#[derive(Debug, Clone, Default)]
pub struct TaskReport {
    /// Number of files the task processed
    pub files_processed: usize,
    /// Output files produced
    pub outputs: Vec<PathBuf>,
}

/// Dispatch a task by kind.
pub fn run_task(kind: TaskKind, ctx: &TaskContext) -> Result<TaskReport, String> {
    match kind {
        TaskKind::Clean => clean(ctx),
        TaskKind::Pages => copy_assets(ctx, AssetKind::Pages),
        TaskKind::Styles => styles::compile(ctx),
        TaskKind::Scripts => copy_assets(ctx, AssetKind::Scripts),
        TaskKind::Images => copy_assets(ctx, AssetKind::Images),
        TaskKind::Fonts => copy_assets(ctx, AssetKind::Fonts),
        TaskKind::FontsStyle => fonts_style(ctx),
        TaskKind::Icons => copy_assets(ctx, AssetKind::Icons),
        TaskKind::Media => copy_assets(ctx, AssetKind::Media),
    }
}

/// Remove the output directory. A missing directory is a success.
fn clean(ctx: &TaskContext) -> Result<TaskReport, String> {
    let out = ctx.out_dir();
    if out.exists() {
        fs::remove_dir_all(&out)
            .map_err(|e| format!("Failed to remove {}: {}", out.display(), e))?;
    }
    Ok(TaskReport::default())
}

/// Generate the font-face stylesheet fragment from the converted fonts in
/// the output directory.
fn fonts_style(ctx: &TaskContext) -> Result<TaskReport, String> {
    let generator = FontStyleGenerator::new(ctx.fonts_out_dir(), ctx.fragment_path());
    let report = generator.generate().map_err(|e| e.to_string())?;

    Ok(TaskReport {
        files_processed: report.directives_written,
        outputs: vec![generator.fragment().to_path_buf()],
    })
}

/// Copy every file matching an asset kind's source patterns into its
/// output directory, preserving the structure below the pattern base.
fn copy_assets(ctx: &TaskContext, kind: AssetKind) -> Result<TaskReport, String> {
    let paths = ctx.paths();
    let entry = paths.for_kind(kind);

    let mut report = TaskReport::default();
    for source in discover_sources(entry) {
        // Partials are watched but never copied
        if kind == AssetKind::Pages && is_partial(&source) {
            continue;
        }

        let rel = source
            .strip_prefix(&entry.base)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| PathBuf::from(source.file_name().unwrap_or_default()));
        let dest = entry.out.join(rel);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        fs::copy(&source, &dest).map_err(|e| {
            format!("Failed to copy {} -> {}: {}", source.display(), dest.display(), e)
        })?;

        report.files_processed += 1;
        report.outputs.push(dest);
    }

    Ok(report)
}

/// Expand an asset entry's glob patterns into existing files.
///
/// Patterns over a missing source directory simply match nothing.
fn discover_sources(entry: &AssetPaths) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = entry
        .sources
        .iter()
        .filter_map(|pattern| glob(pattern).ok())
        .flat_map(|paths| paths.filter_map(Result::ok))
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}
