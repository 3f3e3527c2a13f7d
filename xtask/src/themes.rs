//! Theme asset build: assemble `themes/dist` from the token source layers.
//!
//! The build is a one-shot, synchronous copy with no incremental or caching
//! behavior: the prior output directory is removed, recreated, and the token
//! directories plus entry stylesheets are copied in, preserving relative
//! structure. Any filesystem error aborts the whole run; partial output is
//! acceptable because re-running from an unchanged source tree reproduces
//! identical output.

use crate::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::Path;

const THEMES_DIR: &str = "themes";
const DIST_DIR: &str = "themes/dist";

/// Token directories copied recursively into `dist/`, keyed by their name
/// under both the source tree and the output.
const THEME_LAYER_DIRS: &[&str] = &["base", "material"];

/// Entry stylesheets copied from `themes/src/` into the root of `dist/`.
const THEME_ENTRY_FILES: &[&str] = &["index.css", "base.css", "material.css"];

/// `cargo xtask build-themes`
pub fn build_themes(root: &Path) -> XtaskResult<()> {
    let themes = root.join(THEMES_DIR);
    let dist = root.join(DIST_DIR);

    println!("building theme assets into {}", dist.display());

    if dist.exists() {
        fs::remove_dir_all(&dist).map_err(|err| {
            XtaskError::io(format!("failed to clear prior output: {err}"))
                .with_operation("build-themes")
                .with_path(&dist)
        })?;
    }
    fs::create_dir_all(&dist).map_err(|err| {
        XtaskError::io(format!("failed to create output directory: {err}"))
            .with_operation("build-themes")
            .with_path(&dist)
    })?;

    let mut copied = 0usize;
    for layer in THEME_LAYER_DIRS {
        let src = themes.join(layer);
        let dest = dist.join(layer);
        println!("+ copy {} -> {}", src.display(), dest.display());
        copied += copy_dir(&src, &dest)?;
    }

    for entry in THEME_ENTRY_FILES {
        let src = themes.join("src").join(entry);
        let dest = dist.join(entry);
        println!("+ copy {} -> {}", src.display(), dest.display());
        copy_file(&src, &dest)?;
        copied += 1;
    }

    println!("theme build complete ({copied} files)");
    Ok(())
}

/// Recursively copy a directory, creating destination directories as needed.
/// Returns the number of files copied.
fn copy_dir(src: &Path, dest: &Path) -> XtaskResult<usize> {
    fs::create_dir_all(dest).map_err(|err| {
        XtaskError::io(format!("failed to create directory: {err}")).with_path(dest)
    })?;

    let entries = fs::read_dir(src).map_err(|err| {
        XtaskError::io(format!("failed to read theme source directory: {err}")).with_path(src)
    })?;

    let mut copied = 0usize;
    for entry in entries {
        let entry =
            entry.map_err(|err| XtaskError::io(format!("failed to read directory entry: {err}")))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry
            .file_type()
            .map_err(|err| XtaskError::io(err.to_string()).with_path(&src_path))?
            .is_dir()
        {
            copied += copy_dir(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|err| {
                XtaskError::io(format!("failed to copy file: {err}")).with_path(&src_path)
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn copy_file(src: &Path, dest: &Path) -> XtaskResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            XtaskError::io(format!("failed to create directory: {err}")).with_path(parent)
        })?;
    }
    fs::copy(src, dest)
        .map_err(|err| XtaskError::io(format!("failed to copy file: {err}")).with_path(src))?;
    Ok(())
}
