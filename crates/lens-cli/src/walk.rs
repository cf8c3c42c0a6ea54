//! Test file discovery for `lens scan`.
//!
//! Uses the `ignore` crate for gitignore-aware walking, with a custom
//! `.lensignore` file and include/exclude override globs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use lens_parser::{is_test_dir, is_vendored_dir};

/// Custom ignore file honoured in every directory.
pub const IGNORE_FILE: &str = ".lensignore";

/// What to walk and what to keep.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// File globs to keep, e.g. `*Test.php`.
    pub include: Vec<String>,
    /// Path globs to skip, e.g. `vendor/`.
    pub exclude: Vec<String>,
    pub respect_gitignore: bool,
    /// Only keep files below a conventional test directory.
    pub test_dirs_only: bool,
}

/// Build a file walker over `root`.
///
/// # Errors
///
/// Returns an error when an include or exclude glob is malformed.
pub fn build_walker(root: &Path, options: &WalkOptions) -> anyhow::Result<ignore::Walk> {
    let mut builder = WalkBuilder::new(root);

    builder
        .hidden(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .add_custom_ignore_filename(IGNORE_FILE);

    let mut overrides = OverrideBuilder::new(root);
    for glob in &options.include {
        overrides
            .add(glob)
            .with_context(|| format!("invalid include glob '{glob}'"))?;
    }
    for glob in &options.exclude {
        overrides
            .add(&format!("!{glob}"))
            .with_context(|| format!("invalid exclude glob '{glob}'"))?;
    }
    builder.overrides(overrides.build().context("failed to build scan globs")?);

    builder.filter_entry(|entry| {
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !(is_vendored_dir(&name) || name == ".git" || name == lens_config::PROJECT_CONFIG_DIR)
    });

    Ok(builder.build())
}

/// Walk `root` and return the matching files in a stable order.
///
/// Unreadable entries are logged and skipped.
///
/// # Errors
///
/// Returns an error when the walker cannot be built.
pub fn discover(root: &Path, options: &WalkOptions) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = build_walker(root, options)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| !options.test_dirs_only || under_test_dir(root, path))
        .collect();

    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "discovered test files");
    Ok(files)
}

fn under_test_dir(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .any(|component| is_test_dir(&component.as_os_str().to_string_lossy()))
}
