//! Command implementations for build, watch, clean, and fonts-style

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::{find_config, load_config, merge_cli_overrides, CliOverrides, SiteConfig};
use crate::pipeline::{build_graph, Runner, TaskContext};

/// Load config and resolve the project root, applying CLI overrides.
///
/// The project root is the directory containing site.toml, or the current
/// directory when no config file exists.
fn load_context(
    src: Option<&Path>,
    out: Option<&Path>,
    verbose: bool,
) -> Result<TaskContext, ExitCode> {
    let (config, project_root) = match find_config() {
        Some(config_path) => {
            if verbose {
                println!("Using config: {}", config_path.display());
            }
            let cfg = match load_config(Some(&config_path)) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Error loading config: {}", e);
                    return Err(ExitCode::from(EXIT_ERROR));
                }
            };
            let root = config_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
            (cfg, root)
        }
        None => {
            if verbose {
                println!("No site.toml found, using defaults");
            }
            let root = std::env::current_dir().unwrap_or_default();
            (crate::config::default_config(), root)
        }
    };

    let mut config: SiteConfig = config;
    let overrides = CliOverrides {
        out: out.map(|p| p.to_path_buf()),
        src: src.map(|p| p.to_path_buf()),
    };
    merge_cli_overrides(&mut config, &overrides);

    Ok(TaskContext::new(config, project_root).with_verbose(verbose))
}

/// Apply profile and jobs flags to a context.
fn apply_flags(
    context: TaskContext,
    prod: bool,
    jobs: Option<usize>,
) -> Result<TaskContext, ExitCode> {
    let context = if prod {
        context.with_profile(crate::config::BuildProfile::Prod)
    } else {
        context
    };

    match jobs {
        Some(0) => {
            eprintln!("Error: --jobs must be at least 1");
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
        Some(n) => Ok(context.with_jobs(n)),
        None => Ok(context),
    }
}

/// Run the build command
pub fn run_build(
    prod: bool,
    src: Option<&Path>,
    out: Option<&Path>,
    jobs: Option<usize>,
    dry_run: bool,
    verbose: bool,
) -> ExitCode {
    let context = match load_context(src, out, verbose).and_then(|c| apply_flags(c, prod, jobs)) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let src_dir = context.src_dir();
    if !src_dir.exists() {
        eprintln!("Error: Source directory not found: {}", src_dir.display());
        eprintln!("Create the directory or specify a different path with --src");
        return ExitCode::from(EXIT_ERROR);
    }

    let graph = build_graph();

    if dry_run {
        println!("Dry run - would build:");
        println!("  Source: {}", src_dir.display());
        println!("  Output: {}", context.out_dir().display());
        println!("  Tasks:");
        for step in graph.steps() {
            println!("    - {}", step);
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    println!("Building ({})...", context.profile());

    let runner = Runner::new(context);
    match runner.run(&graph) {
        Ok(result) => {
            if result.is_success() {
                println!("{}", result.summary());
                ExitCode::from(EXIT_SUCCESS)
            } else {
                eprintln!("{}", result.summary());
                for task in result.failures() {
                    eprintln!("  {} failed: {}", task.kind, task.status);
                }
                ExitCode::from(EXIT_ERROR)
            }
        }
        Err(e) => {
            eprintln!("Build error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the watch command
pub fn run_watch(
    prod: bool,
    src: Option<&Path>,
    out: Option<&Path>,
    jobs: Option<usize>,
    verbose: bool,
) -> ExitCode {
    let context = match load_context(src, out, verbose).and_then(|c| apply_flags(c, prod, jobs)) {
        Ok(c) => c,
        Err(code) => return code,
    };

    println!("Starting watch mode...");
    println!("Press Ctrl+C to stop");
    println!();

    match crate::watch::watch_and_rebuild(context) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Watch error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the clean command
pub fn run_clean() -> ExitCode {
    let context = match load_context(None, None, false) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let out_dir = context.out_dir();
    if !out_dir.exists() {
        println!("Nothing to clean");
        return ExitCode::from(EXIT_SUCCESS);
    }

    match std::fs::remove_dir_all(&out_dir) {
        Ok(()) => {
            println!("Removed {}", out_dir.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error removing {}: {}", out_dir.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the fonts-style command
///
/// Generates the font-face fragment directly, outside the full pipeline.
/// Useful after dropping new font files into the output directory by hand.
pub fn run_fonts_style(fonts_dir: Option<&Path>, out: Option<&Path>) -> ExitCode {
    use crate::fonts::FontStyleGenerator;

    let context = match load_context(None, None, false) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let fonts_dir = match fonts_dir {
        Some(p) => context.resolve_path(p),
        None => context.fonts_out_dir(),
    };
    let fragment = match out {
        Some(p) => context.resolve_path(p),
        None => context.fragment_path(),
    };

    let generator = FontStyleGenerator::new(fonts_dir, fragment);
    match generator.generate() {
        Ok(report) => {
            println!(
                "Wrote {} directive{} ({} font file{} scanned) to {}",
                report.directives_written,
                if report.directives_written == 1 { "" } else { "s" },
                report.files_seen,
                if report.files_seen == 1 { "" } else { "s" },
                generator.fragment().display()
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
