//! Configuration schema types for `site.toml`
//!
//! Defines the structure and validation rules for sitekit project
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build profile selecting output fidelity.
///
/// The profile is set once per top-level invocation and passed into each
/// task through the context; tasks never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Development build: expanded CSS
    #[default]
    Dev,
    /// Production build: compressed CSS with `.min.css` naming
    Prod,
}

impl BuildProfile {
    /// Whether this is a production build.
    pub fn is_prod(&self) -> bool {
        matches!(self, BuildProfile::Prod)
    }
}

impl std::fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildProfile::Dev => write!(f, "dev"),
            BuildProfile::Prod => write!(f, "prod"),
        }
    }
}

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required)
    pub name: String,
    /// Source directory for site assets
    #[serde(default = "default_src")]
    pub src: PathBuf,
    /// Build output directory
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

fn default_src() -> PathBuf {
    PathBuf::from("src/site")
}

fn default_out() -> PathBuf {
    PathBuf::from("dist")
}

/// Font handling section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontsConfig {
    /// Subdirectory of the output root holding converted fonts
    #[serde(default = "default_fonts_out")]
    pub out: PathBuf,
    /// Generated fragment path, relative to the source directory
    #[serde(default = "default_style_fragment")]
    pub style_fragment: PathBuf,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self { out: default_fonts_out(), style_fragment: default_style_fragment() }
    }
}

fn default_fonts_out() -> PathBuf {
    PathBuf::from("fonts")
}

fn default_style_fragment() -> PathBuf {
    PathBuf::from("scss/_fonts.scss")
}

/// Watch mode section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Debounce interval for change events, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    /// Clear the terminal before each rebuild
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: default_debounce_ms(), clear_screen: default_clear_screen() }
    }
}

fn default_debounce_ms() -> u32 {
    100
}

fn default_clear_screen() -> bool {
    true
}

/// Top-level `site.toml` configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project metadata
    pub project: ProjectConfig,
    /// Font handling
    #[serde(default)]
    pub fonts: FontsConfig,
    /// Watch mode
    #[serde(default)]
    pub watch: WatchConfig,
}

impl SiteConfig {
    /// Validate the configuration, returning all problems found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.project.name.trim().is_empty() {
            errors.push("project.name must not be empty".to_string());
        }
        if self.project.src == self.project.out {
            errors.push("project.src and project.out must differ".to_string());
        }
        if self.watch.debounce_ms == 0 {
            errors.push("watch.debounce_ms must be greater than zero".to_string());
        }
        if self.fonts.style_fragment.is_absolute() {
            errors.push("fonts.style_fragment must be relative to the source directory".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SiteConfig {
        SiteConfig {
            project: ProjectConfig {
                name: "demo".to_string(),
                src: default_src(),
                out: default_out(),
            },
            fonts: FontsConfig::default(),
            watch: WatchConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = valid_config();
        config.project.name = "  ".to_string();
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn test_src_equals_out_rejected() {
        let mut config = valid_config();
        config.project.out = config.project.src.clone();
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let mut config = valid_config();
        config.watch.debounce_ms = 0;
        assert!(!config.validate().is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = valid_config();
        assert_eq!(config.project.src, PathBuf::from("src/site"));
        assert_eq!(config.project.out, PathBuf::from("dist"));
        assert_eq!(config.fonts.out, PathBuf::from("fonts"));
        assert_eq!(config.fonts.style_fragment, PathBuf::from("scss/_fonts.scss"));
        assert_eq!(config.watch.debounce_ms, 100);
        assert!(config.watch.clear_screen);
    }

    #[test]
    fn test_profile_default_and_display() {
        assert_eq!(BuildProfile::default(), BuildProfile::Dev);
        assert!(!BuildProfile::Dev.is_prod());
        assert!(BuildProfile::Prod.is_prod());
        assert_eq!(BuildProfile::Prod.to_string(), "prod");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: SiteConfig = toml::from_str("[project]\nname = \"demo\"\n").unwrap();
        assert_eq!(config.project.name, "demo");
        assert_eq!(config.project.out, PathBuf::from("dist"));
        assert_eq!(config.watch.debounce_ms, 100);
    }
}
