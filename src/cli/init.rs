//! Project scaffolding for the init command
//!
//! Creates a site.toml and a starter source tree in the current directory.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Error during project initialization
#[derive(Debug)]
pub enum InitError {
    /// A site.toml already exists here or in a parent directory
    AlreadyInitialized(String),
    /// Failed to create directory
    CreateDir(std::io::Error),
    /// Failed to write file
    WriteFile(std::io::Error),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::AlreadyInitialized(path) => {
                write!(f, "Project already initialized: {}", path)
            }
            InitError::CreateDir(e) => write!(f, "Failed to create directory: {}", e),
            InitError::WriteFile(e) => write!(f, "Failed to write file: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

/// Run the init command
pub fn run_init(name: Option<&str>) -> ExitCode {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let project_name = name
        .map(|n| n.to_string())
        .or_else(|| cwd.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "my-site".to_string());

    match init_project(&cwd, &project_name) {
        Ok(()) => {
            println!("Created sitekit project '{}'", project_name);
            println!();
            println!("Project structure:");
            println!("  site.toml");
            println!("  src/site/");
            println!("  ├── index.html");
            println!("  ├── scss/style.scss");
            println!("  ├── js/");
            println!("  ├── img/");
            println!("  ├── fonts/");
            println!("  └── iconsprite/");
            println!();
            println!("Next steps:");
            println!("  skit build");
            println!("  skit watch");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(InitError::AlreadyInitialized(path)) => {
            eprintln!("Error: site.toml already exists at {}", path);
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Initialize a new sitekit project at `path`.
pub fn init_project(path: &Path, name: &str) -> Result<(), InitError> {
    let config_path = path.join("site.toml");
    if config_path.exists() {
        return Err(InitError::AlreadyInitialized(config_path.display().to_string()));
    }

    create_dir(&path.join("src/site/scss"))?;
    create_dir(&path.join("src/site/js"))?;
    create_dir(&path.join("src/site/img"))?;
    create_dir(&path.join("src/site/fonts"))?;
    create_dir(&path.join("src/site/iconsprite"))?;

    write_file(&config_path, &generate_config(name))?;
    write_file(&path.join(".gitignore"), generate_gitignore())?;
    write_file(&path.join("src/site/index.html"), generate_index())?;
    write_file(&path.join("src/site/scss/style.scss"), generate_stylesheet())?;

    Ok(())
}

fn create_dir(path: &Path) -> Result<(), InitError> {
    fs::create_dir_all(path).map_err(InitError::CreateDir)
}

fn write_file(path: &Path, content: &str) -> Result<(), InitError> {
    fs::write(path, content).map_err(InitError::WriteFile)
}

/// Generate site.toml content.
fn generate_config(name: &str) -> String {
    format!(
        r#"[project]
name = "{}"
src = "src/site"
out = "dist"

[fonts]
out = "fonts"
style_fragment = "scss/_fonts.scss"

[watch]
debounce_ms = 100
clear_screen = true
"#,
        name
    )
}

/// Generate .gitignore content.
fn generate_gitignore() -> &'static str {
    r#"# Sitekit build output
dist/

# OS files
.DS_Store
Thumbs.db
"#
}

/// Generate starter index.html.
fn generate_index() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>New site</title>
  <link rel="stylesheet" href="css/style.css">
</head>
<body>
  <h1>Hello</h1>
</body>
</html>
"#
}

/// Generate starter entry stylesheet.
///
/// Defines the font-face mixin, then imports the generated fragment. The
/// fragment holds bare `@include font-face(...)` calls, so it must be
/// imported (not `@use`d) after the mixin definition to see it.
fn generate_stylesheet() -> &'static str {
    r#"@mixin font-face($font-name, $file-name, $weight, $style) {
  @font-face {
    font-family: $font-name;
    font-display: swap;
    src: url("../fonts/#{$file-name}.woff2") format("woff2"),
      url("../fonts/#{$file-name}.woff") format("woff");
    font-weight: #{$weight};
    font-style: #{$style};
  }
}

@import "fonts";

body {
  margin: 0;
}
"#
}
