//! Stylesheet compilation task.
//!
//! Delegates SCSS compilation to the `grass` crate with fixed options per
//! profile: expanded output for dev, compressed output with `.min.css`
//! naming for prod. The entry stylesheet pulls in the generated font-face
//! fragment, so this task runs after fragment generation.

use crate::config::BuildProfile;
use crate::pipeline::TaskContext;
use crate::tasks::TaskReport;
use std::fs;

/// Entry stylesheet filename under the source `scss` directory.
const ENTRY_STYLESHEET: &str = "style.scss";

/// Compile the entry stylesheet into the CSS output directory.
///
/// A missing entry stylesheet means there is nothing to compile and is
/// not an error.
pub fn compile(ctx: &TaskContext) -> Result<TaskReport, String> {
    let scss_dir = ctx.src_dir().join("scss");
    let entry = scss_dir.join(ENTRY_STYLESHEET);
    if !entry.exists() {
        return Ok(TaskReport::default());
    }

    let (style, out_name) = match ctx.profile() {
        BuildProfile::Dev => (grass::OutputStyle::Expanded, "style.css"),
        BuildProfile::Prod => (grass::OutputStyle::Compressed, "style.min.css"),
    };

    let options = grass::Options::default().style(style).load_path(&scss_dir);
    let css = grass::from_path(&entry, &options)
        .map_err(|e| format!("Failed to compile {}: {}", entry.display(), e))?;

    let out_dir = ctx.out_dir().join("css");
    fs::create_dir_all(&out_dir)
        .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;

    let out_path = out_dir.join(out_name);
    fs::write(&out_path, css)
        .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;

    Ok(TaskReport { files_processed: 1, outputs: vec![out_path] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::pipeline::TaskContext;
    use tempfile::TempDir;

    fn create_test_context() -> (TempDir, TaskContext) {
        let temp = TempDir::new().unwrap();
        let ctx = TaskContext::new(default_config(), temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("src/site/scss")).unwrap();
        (temp, ctx)
    }

    #[test]
    fn test_compile_missing_entry_is_noop() {
        let (_temp, ctx) = create_test_context();
        let report = compile(&ctx).unwrap();
        assert_eq!(report.files_processed, 0);
    }

    #[test]
    fn test_compile_dev_expanded() {
        let (temp, ctx) = create_test_context();
        fs::write(
            temp.path().join("src/site/scss/style.scss"),
            "$accent: #fff;\nbody { color: $accent; }\n",
        )
        .unwrap();

        let report = compile(&ctx).unwrap();
        assert_eq!(report.files_processed, 1);

        let css = fs::read_to_string(temp.path().join("dist/css/style.css")).unwrap();
        assert!(css.contains("color: #fff"));
    }

    #[test]
    fn test_compile_prod_minified_name() {
        let (temp, ctx) = create_test_context();
        let ctx = ctx.with_profile(BuildProfile::Prod);
        fs::write(temp.path().join("src/site/scss/style.scss"), "body { margin: 0; }\n").unwrap();

        compile(&ctx).unwrap();
        assert!(temp.path().join("dist/css/style.min.css").exists());
        assert!(!temp.path().join("dist/css/style.css").exists());
    }

    #[test]
    fn test_compile_invalid_scss_fails() {
        let (temp, ctx) = create_test_context();
        fs::write(temp.path().join("src/site/scss/style.scss"), "body { color: ; }\n").unwrap();

        assert!(compile(&ctx).is_err());
    }

    #[test]
    fn test_compile_imports_generated_fragment() {
        let (temp, ctx) = create_test_context();
        // The fragment holds bare directives; the entry defines the mixin
        // before importing it.
        fs::write(
            temp.path().join("src/site/scss/_fonts.scss"),
            "@include font-face(\"Inter\", \"Inter-Bold\", 700, \"normal\");\r\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("src/site/scss/style.scss"),
            "@mixin font-face($family, $file, $weight, $style) {}\n@import \"fonts\";\nbody { margin: 0; }\n",
        )
        .unwrap();

        let report = compile(&ctx).unwrap();
        assert_eq!(report.files_processed, 1);
    }
}
