//! Build pipeline test suite
//!
//! Integration tests for the full build: end-to-end output tree, parallel
//! failure isolation, profile-specific CSS naming, and config discovery.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sitekit::config::{default_config, find_config_from, load_config, BuildProfile};
use sitekit::pipeline::{build_graph, Runner, TaskContext, TaskGraph, TaskKind};

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a test context with an empty source tree.
fn create_test_context() -> (TempDir, TaskContext) {
    let temp = TempDir::new().unwrap();
    let config = default_config();
    let ctx = TaskContext::new(config, temp.path().to_path_buf());

    fs::create_dir_all(temp.path().join("src/site")).unwrap();

    (temp, ctx)
}

/// Create a test file with content, creating parents as needed.
fn create_test_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Populate a realistic source tree.
fn populate_site(root: &Path) {
    create_test_file(root, "src/site/index.html", "<html><body>home</body></html>");
    create_test_file(root, "src/site/about.html", "<html><body>about</body></html>");
    create_test_file(root, "src/site/_header.html", "<header></header>");
    // The fragment itself is (re)generated by the pipeline before the
    // stylesheet compiles, so only the entry file is seeded here.
    create_test_file(
        root,
        "src/site/scss/style.scss",
        "@mixin font-face($family, $file, $weight, $style) {}\n@import \"fonts\";\nbody { margin: 0; }\n",
    );
    create_test_file(root, "src/site/js/app.js", "console.log('hi');");
    create_test_file(root, "src/site/img/logo.png", "png-bytes");
    create_test_file(root, "src/site/fonts/Inter-Regular.woff2", "font-bytes");
    create_test_file(root, "src/site/fonts/Inter-Bold.woff2", "font-bytes");
    create_test_file(root, "src/site/iconsprite/menu.svg", "<svg/>");
}

// ============================================================================
// Full Build
// ============================================================================

#[test]
fn test_full_build_produces_output_tree() {
    let (temp, ctx) = create_test_context();
    populate_site(temp.path());

    let runner = Runner::new(ctx);
    let result = runner.run(&build_graph()).unwrap();
    assert!(result.is_success(), "{}", result.summary());

    // Pages copied, partials excluded
    assert!(temp.path().join("dist/index.html").exists());
    assert!(temp.path().join("dist/about.html").exists());
    assert!(!temp.path().join("dist/_header.html").exists());

    // Assets copied
    assert!(temp.path().join("dist/js/app.js").exists());
    assert!(temp.path().join("dist/img/logo.png").exists());
    assert!(temp.path().join("dist/fonts/Inter-Regular.woff2").exists());
    assert!(temp.path().join("dist/img/icons/menu.svg").exists());

    // Stylesheet compiled
    assert!(temp.path().join("dist/css/style.css").exists());
}

#[test]
fn test_full_build_generates_font_fragment_from_copied_fonts() {
    let (temp, ctx) = create_test_context();
    populate_site(temp.path());

    Runner::new(ctx).run(&build_graph()).unwrap();

    let fragment =
        fs::read_to_string(temp.path().join("src/site/scss/_fonts.scss")).unwrap();
    assert!(fragment.contains("\"Inter\", \"Inter-Bold\", 700"));
    assert!(fragment.contains("\"Inter\", \"Inter-Regular\", 400"));
}

#[test]
fn test_full_build_clean_removes_stale_output() {
    let (temp, ctx) = create_test_context();
    populate_site(temp.path());
    create_test_file(temp.path(), "dist/stale.txt", "old output");

    Runner::new(ctx).run(&build_graph()).unwrap();
    assert!(!temp.path().join("dist/stale.txt").exists());
    assert!(temp.path().join("dist/index.html").exists());
}

// ============================================================================
// Parallel Failure Isolation
// ============================================================================

#[test]
fn test_parallel_sibling_survives_failure() {
    let (temp, ctx) = create_test_context();
    create_test_file(temp.path(), "src/site/js/app.js", "console.log(1)");

    // Occupy the fragment path with a directory so FontsStyle fails
    fs::create_dir_all(temp.path().join("src/site/scss/_fonts.scss")).unwrap();

    let graph = TaskGraph::parallel(vec![
        TaskGraph::step(TaskKind::FontsStyle),
        TaskGraph::step(TaskKind::Scripts),
    ]);

    let result = Runner::new(ctx.with_jobs(2)).run(&graph).unwrap();
    assert!(!result.is_success());
    assert_eq!(result.tasks.len(), 2);
    assert_eq!(result.failed_count(), 1);
    assert!(temp.path().join("dist/js/app.js").exists());
}

// ============================================================================
// Build Profiles
// ============================================================================

#[test]
fn test_prod_profile_emits_min_css() {
    let (temp, ctx) = create_test_context();
    populate_site(temp.path());

    let ctx = ctx.with_profile(BuildProfile::Prod);
    let result = Runner::new(ctx).run(&build_graph()).unwrap();
    assert!(result.is_success(), "{}", result.summary());

    assert!(temp.path().join("dist/css/style.min.css").exists());
    assert!(!temp.path().join("dist/css/style.css").exists());
}

#[test]
fn test_dev_profile_emits_expanded_css() {
    let (temp, ctx) = create_test_context();
    create_test_file(
        temp.path(),
        "src/site/scss/style.scss",
        "body { margin: 0; padding: 0; }\n",
    );

    Runner::new(ctx).run(&build_graph()).unwrap();

    let css = fs::read_to_string(temp.path().join("dist/css/style.css")).unwrap();
    // Expanded output keeps one declaration per line
    assert!(css.contains("margin: 0;\n"));
}

// ============================================================================
// Config Discovery
// ============================================================================

#[test]
fn test_config_discovery_walks_up() {
    let temp = TempDir::new().unwrap();
    create_test_file(temp.path(), "site.toml", "[project]\nname = \"demo\"\n");
    let nested = temp.path().join("src/site/scss");
    fs::create_dir_all(&nested).unwrap();

    let found = find_config_from(nested).unwrap();
    assert_eq!(found, temp.path().join("site.toml"));

    let config = load_config(Some(&found)).unwrap();
    assert_eq!(config.project.name, "demo");
    // Unspecified fields fall back to defaults
    assert_eq!(config.project.out, PathBuf::from("dist"));
    assert_eq!(config.fonts.style_fragment, PathBuf::from("scss/_fonts.scss"));
}

#[test]
fn test_custom_config_drives_pipeline_paths() {
    let temp = TempDir::new().unwrap();
    let config_path = create_test_file(
        temp.path(),
        "site.toml",
        "[project]\nname = \"demo\"\nsrc = \"assets\"\nout = \"public\"\n\n[fonts]\nout = \"webfonts\"\n",
    );
    create_test_file(temp.path(), "assets/fonts/Inter-Bold.woff2", "font-bytes");

    let config = load_config(Some(&config_path)).unwrap();
    let ctx = TaskContext::new(config, temp.path().to_path_buf());

    let result = Runner::new(ctx).run(&build_graph()).unwrap();
    assert!(result.is_success(), "{}", result.summary());

    assert!(temp.path().join("public/webfonts/Inter-Bold.woff2").exists());
    let fragment = fs::read_to_string(temp.path().join("assets/scss/_fonts.scss")).unwrap();
    assert!(fragment.contains("\"Inter-Bold\", 700"));
}
