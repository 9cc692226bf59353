//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod init;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Sitekit - Build static-site assets
#[derive(Parser)]
#[command(name = "skit")]
#[command(about = "Sitekit - Build static-site assets (pages, styles, fonts, images)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full build pipeline
    Build {
        /// Production build (compressed CSS, .min.css naming)
        #[arg(long)]
        prod: bool,

        /// Override the source directory
        #[arg(long)]
        src: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of parallel workers for parallel pipeline stages
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Show the pipeline without executing it
        #[arg(long)]
        dry_run: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build once, then rebuild on source changes
    Watch {
        /// Production build (compressed CSS, .min.css naming)
        #[arg(long)]
        prod: bool,

        /// Override the source directory
        #[arg(long)]
        src: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of parallel workers for parallel pipeline stages
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Remove the output directory
    Clean,

    /// Generate the font-face stylesheet fragment directly
    FontsStyle {
        /// Directory of converted font files (default: <out>/fonts)
        #[arg(long)]
        fonts_dir: Option<PathBuf>,

        /// Target fragment file (default: <src>/scss/_fonts.scss)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Scaffold a new project (site.toml and source tree)
    Init {
        /// Project name (default: current directory name)
        name: Option<String>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { prod, src, out, jobs, dry_run, verbose } => {
            build::run_build(prod, src.as_deref(), out.as_deref(), jobs, dry_run, verbose)
        }
        Commands::Watch { prod, src, out, jobs, verbose } => {
            build::run_watch(prod, src.as_deref(), out.as_deref(), jobs, verbose)
        }
        Commands::Clean => build::run_clean(),
        Commands::FontsStyle { fonts_dir, out } => {
            build::run_fonts_style(fonts_dir.as_deref(), out.as_deref())
        }
        Commands::Init { name } => init::run_init(name.as_deref()),
    }
}
