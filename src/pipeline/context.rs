//! Task context containing configuration and state for a pipeline run.

use crate::config::{BuildProfile, SiteConfig};
use crate::paths::SitePaths;
use std::path::{Path, PathBuf};

/// Default number of parallel jobs (uses available parallelism).
fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Context for one pipeline run.
///
/// Carries everything a task needs: the configuration, the project root,
/// the build profile, and the resolved path table. The profile is fixed
/// when the context is created and read-only thereafter.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// The loaded configuration
    config: SiteConfig,
    /// Project root directory (where site.toml is located)
    project_root: PathBuf,
    /// Build profile for this run
    profile: BuildProfile,
    /// Whether to run in verbose mode
    verbose: bool,
    /// Number of parallel workers for parallel graph nodes
    jobs: usize,
}

impl TaskContext {
    /// Create a new task context.
    ///
    /// # Arguments
    /// - `config` - The loaded configuration
    /// - `project_root` - The project root directory
    pub fn new(config: SiteConfig, project_root: PathBuf) -> Self {
        Self { config, project_root, profile: BuildProfile::Dev, verbose: false, jobs: default_jobs() }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the source directory (resolved to absolute path).
    pub fn src_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.src)
    }

    /// Get the output directory (resolved to absolute path).
    pub fn out_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.out)
    }

    /// Get the directory of converted fonts under the output root.
    pub fn fonts_out_dir(&self) -> PathBuf {
        self.out_dir().join(&self.config.fonts.out)
    }

    /// Get the font-face fragment path under the source root.
    pub fn fragment_path(&self) -> PathBuf {
        self.src_dir().join(&self.config.fonts.style_fragment)
    }

    /// Build the asset path table for this run.
    pub fn paths(&self) -> SitePaths {
        SitePaths::new(&self.src_dir(), &self.out_dir())
    }

    /// The build profile for this run.
    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    /// Whether verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Number of parallel workers.
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Set the build profile.
    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the number of parallel workers (at least 1).
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Resolve a path relative to the project root.
    ///
    /// If the path is absolute, returns it unchanged.
    /// If relative, joins it with the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}
