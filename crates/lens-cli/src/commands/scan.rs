use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lens_config::{LensConfig, ScanConfig};
use lens_core::TestSuite;
use lens_parser::{ParseOptions, ParserError, parse_file};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::output::{TextView, output};
use crate::walk::{WalkOptions, discover};

/// Result of `lens scan`.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Directory that was scanned, as given.
    pub root: String,
    /// Number of files handed to the parser.
    pub files_scanned: usize,
    /// Suites of every file that parsed, in path order.
    pub suites: Vec<TestSuite>,
    /// Files that could not be parsed.
    pub errors: Vec<FileError>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FileError {
    pub file: String,
    pub error: String,
}

impl TextView for ScanReport {
    fn render_text(&self) -> String {
        let mut out = self.suites.render_text();
        let tests: usize = self.suites.iter().map(|suite| suite.children.len()).sum();
        let _ = write!(
            out,
            "\n\n{} files, {} suites, {tests} tests",
            self.files_scanned,
            self.suites.len()
        );
        if !self.errors.is_empty() {
            out.push_str("\n\nerrors:");
            for failure in &self.errors {
                let _ = write!(out, "\n  {}: {}", failure.file, failure.error);
            }
        }
        out
    }
}

/// Handle `lens scan`.
///
/// A file that fails to parse is reported and listed under `errors`; it
/// never aborts the scan.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = LensConfig::load_from(&args.dir).context("failed to load lens configuration")?;
    let scan = scan_config(&config.scan, args);
    scan.validate()?;

    let report = run(&args.dir, &scan, args.test_dirs_only, super::parse_options(&config, flags))?;
    output(&report, flags.format)
}

/// Apply command-line overrides on top of the configured scan settings.
fn scan_config(configured: &ScanConfig, args: &ScanArgs) -> ScanConfig {
    let mut scan = configured.clone();
    if !args.include.is_empty() {
        scan.include.clone_from(&args.include);
    }
    scan.exclude.extend(args.exclude.iter().cloned());
    if args.no_gitignore {
        scan.respect_gitignore = false;
    }
    if let Some(threads) = args.threads {
        scan.threads = threads;
    }
    scan
}

/// Discover and extract every test file under `root`.
///
/// # Errors
///
/// Fails only when discovery itself fails or the worker pool cannot start.
pub fn run(
    root: &Path,
    scan: &ScanConfig,
    test_dirs_only: bool,
    options: ParseOptions,
) -> anyhow::Result<ScanReport> {
    let walk = WalkOptions {
        include: scan.include.clone(),
        exclude: scan.exclude.clone(),
        respect_gitignore: scan.respect_gitignore,
        test_dirs_only,
    };
    let files = discover(root, &walk)?;
    let results = extract_all(&files, options, scan.threads)?;

    let mut suites = Vec::new();
    let mut errors = Vec::new();
    for (path, result) in results {
        match result {
            Ok(found) => suites.extend(found),
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "failed to extract tests");
                errors.push(FileError {
                    file: path.to_string_lossy().into_owned(),
                    error: error.to_string(),
                });
            }
        }
    }

    Ok(ScanReport {
        root: root.to_string_lossy().into_owned(),
        files_scanned: files.len(),
        suites,
        errors,
    })
}

type FileResult = (PathBuf, Result<Vec<TestSuite>, ParserError>);

/// Parse files in parallel, keeping input order. `threads == 0` uses rayon's
/// global pool.
fn extract_all(
    files: &[PathBuf],
    options: ParseOptions,
    threads: usize,
) -> anyhow::Result<Vec<FileResult>> {
    let extract = || -> Vec<FileResult> {
        files
            .par_iter()
            .map(|path| (path.clone(), parse_file(path, &options)))
            .collect()
    };

    if threads == 0 {
        return Ok(extract());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to start extraction workers")?;
    Ok(pool.install(extract))
}
