//! Asset path tables.
//!
//! Maps each asset kind to its source glob patterns, output directory,
//! and the source subtree watched for changes. All paths are derived from
//! the configured source and output roots.

use std::path::{Path, PathBuf};

/// The kinds of assets the pipeline moves or generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Page markup files (partials excluded from copying)
    Pages,
    /// SCSS stylesheets compiled to CSS
    Styles,
    /// Script files
    Scripts,
    /// Raster and vector images
    Images,
    /// Converted web font files
    Fonts,
    /// Icon sources destined for the sprite directory
    Icons,
    /// Video and audio files
    Media,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Pages => write!(f, "pages"),
            AssetKind::Styles => write!(f, "styles"),
            AssetKind::Scripts => write!(f, "scripts"),
            AssetKind::Images => write!(f, "images"),
            AssetKind::Fonts => write!(f, "fonts"),
            AssetKind::Icons => write!(f, "icons"),
            AssetKind::Media => write!(f, "media"),
        }
    }
}

/// Image extensions copied by the images task.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "png", "svg", "gif", "ico", "webp"];

/// Media extensions copied by the media task.
const MEDIA_EXTENSIONS: [&str; 5] = ["mp4", "ogv", "avi", "webm", "mov"];

/// Font extensions copied by the fonts task.
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "woff", "woff2"];

/// Source patterns and output directory for one asset kind.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// Base directory the source patterns are rooted at; relative
    /// structure below it is preserved when copying
    pub base: PathBuf,
    /// Glob patterns selecting source files
    pub sources: Vec<String>,
    /// Output directory for this kind
    pub out: PathBuf,
}

/// The full path table for a project.
#[derive(Debug, Clone)]
pub struct SitePaths {
    src_root: PathBuf,
    pages: AssetPaths,
    styles: AssetPaths,
    scripts: AssetPaths,
    images: AssetPaths,
    fonts: AssetPaths,
    icons: AssetPaths,
    media: AssetPaths,
}

impl SitePaths {
    /// Build the path table from the source and output roots.
    pub fn new(src_root: &Path, out_root: &Path) -> Self {
        let pattern = |dir: &Path, tail: &str| format!("{}/{}", dir.display(), tail);

        let pages = AssetPaths {
            base: src_root.to_path_buf(),
            sources: vec![pattern(src_root, "*.html")],
            out: out_root.to_path_buf(),
        };
        let styles = AssetPaths {
            base: src_root.join("scss"),
            sources: vec![pattern(&src_root.join("scss"), "style.scss")],
            out: out_root.join("css"),
        };
        let scripts = AssetPaths {
            base: src_root.join("js"),
            sources: vec![pattern(&src_root.join("js"), "**/*.js")],
            out: out_root.join("js"),
        };
        let images = AssetPaths {
            base: src_root.join("img"),
            sources: IMAGE_EXTENSIONS
                .iter()
                .map(|ext| pattern(&src_root.join("img"), &format!("**/*.{}", ext)))
                .collect(),
            out: out_root.join("img"),
        };
        let fonts = AssetPaths {
            base: src_root.join("fonts"),
            sources: FONT_EXTENSIONS
                .iter()
                .map(|ext| pattern(&src_root.join("fonts"), &format!("*.{}", ext)))
                .collect(),
            out: out_root.join("fonts"),
        };
        let icons = AssetPaths {
            base: src_root.join("iconsprite"),
            sources: vec![pattern(&src_root.join("iconsprite"), "*.svg")],
            out: out_root.join("img/icons"),
        };
        let media = AssetPaths {
            base: src_root.join("media"),
            sources: MEDIA_EXTENSIONS
                .iter()
                .map(|ext| pattern(&src_root.join("media"), &format!("*.{}", ext)))
                .collect(),
            out: out_root.join("media"),
        };

        Self { src_root: src_root.to_path_buf(), pages, styles, scripts, images, fonts, icons, media }
    }

    /// Get the path entry for an asset kind.
    pub fn for_kind(&self, kind: AssetKind) -> &AssetPaths {
        match kind {
            AssetKind::Pages => &self.pages,
            AssetKind::Styles => &self.styles,
            AssetKind::Scripts => &self.scripts,
            AssetKind::Images => &self.images,
            AssetKind::Fonts => &self.fonts,
            AssetKind::Icons => &self.icons,
            AssetKind::Media => &self.media,
        }
    }

    /// Classify a changed source file by asset kind.
    ///
    /// Used by watch mode to decide which task to re-run. Returns `None`
    /// for files outside the source root or of no interest.
    pub fn kind_for_change(&self, path: &Path) -> Option<AssetKind> {
        let rel = path.strip_prefix(&self.src_root).ok()?;
        let first_dir = rel.components().next().and_then(|c| {
            let s = c.as_os_str().to_str()?;
            Some(s.to_string())
        })?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match first_dir.as_str() {
            "scss" if ext == "scss" => Some(AssetKind::Styles),
            "js" if ext == "js" => Some(AssetKind::Scripts),
            "img" if IMAGE_EXTENSIONS.contains(&ext) => Some(AssetKind::Images),
            "fonts" if FONT_EXTENSIONS.contains(&ext) || ext == "otf" => Some(AssetKind::Fonts),
            "iconsprite" if ext == "svg" => Some(AssetKind::Icons),
            "media" if MEDIA_EXTENSIONS.contains(&ext) => Some(AssetKind::Media),
            _ if ext == "html" => Some(AssetKind::Pages),
            _ => None,
        }
    }

    /// The source root this table was built from.
    pub fn src_root(&self) -> &Path {
        &self.src_root
    }
}

/// Check if a page filename is a partial (underscore-prefixed).
///
/// Partials are watched but never copied to the output tree.
pub fn is_partial(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_'))
        .unwrap_or(false)
}
