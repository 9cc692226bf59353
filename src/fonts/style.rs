//! Font-face stylesheet fragment generation.
//!
//! The generator reads the listing of the fonts output directory and
//! rewrites the target fragment from scratch on every invocation. A font
//! that exists in several formats (`.woff` and `.woff2` sharing one
//! basename) produces a single directive; different weights of one family
//! produce one directive each.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fonts::weight::infer_weight;

/// Error during fragment generation.
#[derive(Debug)]
pub enum FontStyleError {
    /// Failed to truncate or create the target fragment
    Create(PathBuf, std::io::Error),
    /// Failed to append a directive to the target fragment
    Write(PathBuf, std::io::Error),
}

impl std::fmt::Display for FontStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontStyleError::Create(path, e) => {
                write!(f, "Failed to create {}: {}", path.display(), e)
            }
            FontStyleError::Write(path, e) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for FontStyleError {}

/// A single font derived from a filename in the fonts output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceEntry {
    /// CSS family name (basename up to the first `-`)
    pub family: String,
    /// Filename with everything after the first `.` stripped
    pub basename: String,
    /// Numeric CSS font-weight inferred from the basename
    pub weight: u16,
}

impl FontFaceEntry {
    /// Derive an entry from a font filename (no path component).
    pub fn from_filename(filename: &str) -> Self {
        let basename = filename.split('.').next().unwrap_or(filename).to_string();
        let family = basename.split('-').next().unwrap_or(&basename).to_string();
        let weight = infer_weight(&basename);
        Self { family, basename, weight }
    }

    /// Serialize the entry as one include directive line.
    ///
    /// The line terminator is CRLF; the downstream stylesheet step expects
    /// the fragment in this exact form.
    pub fn directive(&self) -> String {
        format!(
            "@include font-face(\"{}\", \"{}\", {}, \"normal\");\r\n",
            self.family, self.basename, self.weight
        )
    }
}

/// Outcome of a single generation pass.
#[derive(Debug, Clone, Default)]
pub struct StyleReport {
    /// Number of files seen in the fonts directory
    pub files_seen: usize,
    /// Number of directives written to the fragment
    pub directives_written: usize,
}

/// Generates the font-face stylesheet fragment.
#[derive(Debug, Clone)]
pub struct FontStyleGenerator {
    /// Directory of converted font files to scan
    fonts_dir: PathBuf,
    /// Target fragment file, overwritten on every pass
    fragment: PathBuf,
}

impl FontStyleGenerator {
    /// Create a generator for the given fonts directory and fragment path.
    pub fn new(fonts_dir: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self { fonts_dir: fonts_dir.into(), fragment: fragment.into() }
    }

    /// The fonts directory this generator scans.
    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// The fragment file this generator writes.
    pub fn fragment(&self) -> &Path {
        &self.fragment
    }

    /// Run one generation pass.
    ///
    /// The fragment is truncated first, then one directive is appended per
    /// distinct basename in the sorted directory listing. A missing or
    /// empty fonts directory leaves the fragment empty and is not an
    /// error. Write failures are fatal for this pass only; callers must
    /// not let them abort sibling tasks.
    pub fn generate(&self) -> Result<StyleReport, FontStyleError> {
        if let Some(parent) = self.fragment.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FontStyleError::Create(self.fragment.clone(), e))?;
        }

        // Truncate before scanning so a missing directory still yields an
        // empty fragment.
        let mut file = File::create(&self.fragment)
            .map_err(|e| FontStyleError::Create(self.fragment.clone(), e))?;

        let names = self.list_fonts();
        let mut report = StyleReport { files_seen: names.len(), directives_written: 0 };

        let mut previous: Option<String> = None;
        for name in names {
            let entry = FontFaceEntry::from_filename(&name);

            // Formats of the same font share a basename and collapse into
            // one directive.
            if previous.as_deref() != Some(entry.basename.as_str()) {
                file.write_all(entry.directive().as_bytes())
                    .map_err(|e| FontStyleError::Write(self.fragment.clone(), e))?;
                report.directives_written += 1;
            }
            previous = Some(entry.basename);
        }

        Ok(report)
    }

    /// List font filenames, sorted for deterministic output.
    ///
    /// A missing directory is treated as zero entries, not an error.
    fn list_fonts(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.fonts_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> (TempDir, FontStyleGenerator) {
        let temp = TempDir::new().unwrap();
        let fonts_dir = temp.path().join("dist/fonts");
        fs::create_dir_all(&fonts_dir).unwrap();
        for name in files {
            fs::write(fonts_dir.join(name), b"font data").unwrap();
        }
        let fragment = temp.path().join("src/scss/_fonts.scss");
        let generator = FontStyleGenerator::new(fonts_dir, fragment);
        (temp, generator)
    }

    #[test]
    fn test_entry_from_filename() {
        let entry = FontFaceEntry::from_filename("Roboto-Regular.woff2");
        assert_eq!(entry.family, "Roboto");
        assert_eq!(entry.basename, "Roboto-Regular");
        assert_eq!(entry.weight, 400);
    }

    #[test]
    fn test_entry_no_separator() {
        let entry = FontFaceEntry::from_filename("Custom.woff");
        assert_eq!(entry.family, "Custom");
        assert_eq!(entry.basename, "Custom");
        assert_eq!(entry.weight, 400);
    }

    #[test]
    fn test_entry_strips_after_first_dot() {
        let entry = FontFaceEntry::from_filename("Inter-Bold.v2.woff2");
        assert_eq!(entry.basename, "Inter-Bold");
        assert_eq!(entry.weight, 700);
    }

    #[test]
    fn test_entry_directive_format() {
        let entry = FontFaceEntry::from_filename("Roboto-Medium.woff");
        assert_eq!(
            entry.directive(),
            "@include font-face(\"Roboto\", \"Roboto-Medium\", 500, \"normal\");\r\n"
        );
    }

    #[test]
    fn test_generate_dedups_formats() {
        let (_temp, generator) = setup(&["Roboto-Regular.woff", "Roboto-Regular.woff2"]);
        let report = generator.generate().unwrap();

        assert_eq!(report.files_seen, 2);
        assert_eq!(report.directives_written, 1);

        let content = fs::read_to_string(generator.fragment()).unwrap();
        assert_eq!(
            content,
            "@include font-face(\"Roboto\", \"Roboto-Regular\", 400, \"normal\");\r\n"
        );
    }

    #[test]
    fn test_generate_distinct_weights() {
        let (_temp, generator) = setup(&["Roboto-Bold.woff", "Roboto-ExtraBold.woff"]);
        let report = generator.generate().unwrap();

        assert_eq!(report.directives_written, 2);
        let content = fs::read_to_string(generator.fragment()).unwrap();
        assert!(content.contains("\"Roboto-Bold\", 700"));
        assert!(content.contains("\"Roboto-ExtraBold\", 800"));
    }

    #[test]
    fn test_generate_missing_dir_empty_fragment() {
        let temp = TempDir::new().unwrap();
        let generator = FontStyleGenerator::new(
            temp.path().join("dist/fonts"),
            temp.path().join("src/scss/_fonts.scss"),
        );

        let report = generator.generate().unwrap();
        assert_eq!(report.files_seen, 0);
        assert_eq!(report.directives_written, 0);
        assert_eq!(fs::read_to_string(generator.fragment()).unwrap(), "");
    }

    #[test]
    fn test_generate_overwrites_previous_content() {
        let (_temp, generator) = setup(&["Custom.woff"]);
        fs::create_dir_all(generator.fragment().parent().unwrap()).unwrap();
        fs::write(generator.fragment(), "stale content").unwrap();

        generator.generate().unwrap();
        let content = fs::read_to_string(generator.fragment()).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("@include font-face(\"Custom\""));
    }

    #[test]
    fn test_generate_idempotent() {
        let (_temp, generator) = setup(&[
            "Inter-Black.woff2",
            "Inter-Light.woff",
            "Inter-Light.woff2",
            "Inter-Regular.woff",
        ]);

        generator.generate().unwrap();
        let first = fs::read(generator.fragment()).unwrap();
        generator.generate().unwrap();
        let second = fs::read(generator.fragment()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_sorted_listing_groups_duplicates() {
        // Sorting groups same-basename files regardless of directory order,
        // so the adjacent-only dedup sees them side by side.
        let (_temp, generator) = setup(&["A-Bold.woff", "B.woff", "A-Bold.woff2"]);
        let report = generator.generate().unwrap();

        assert_eq!(report.directives_written, 2);
        let content = fs::read_to_string(generator.fragment()).unwrap();
        assert_eq!(content.matches("\"A-Bold\"").count(), 1);
        assert_eq!(content.matches("\"B\"").count(), 1);
    }

    #[test]
    fn test_generate_skips_subdirectories() {
        let (temp, generator) = setup(&["Inter-Regular.woff"]);
        fs::create_dir_all(temp.path().join("dist/fonts/nested")).unwrap();

        let report = generator.generate().unwrap();
        assert_eq!(report.files_seen, 1);
        assert_eq!(report.directives_written, 1);
    }
}
