use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract the test suites of one or more PHP files.
    Extract(ExtractArgs),
    /// Discover PHPUnit test files under a directory and extract them all.
    Scan(ScanArgs),
    /// Print the JSON Schema of an output record.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// PHP files to parse.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Project directory to scan.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// File name glob to include (repeatable, replaces configured patterns).
    #[arg(short, long)]
    pub include: Vec<String>,

    /// Path glob to exclude (repeatable, added to configured patterns).
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Walk files ignored by git as well.
    #[arg(long)]
    pub no_gitignore: bool,

    /// Only keep files under a conventional test directory (tests/, Unit/, ...).
    #[arg(long)]
    pub test_dirs_only: bool,

    /// Worker threads (0 = one per core).
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record to describe.
    #[arg(value_enum, default_value = "suite")]
    pub record: SchemaRecord,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaRecord {
    /// One `TestSuite`, the element of `lens extract` output.
    Suite,
    /// One `TestCase`.
    Case,
    /// The `lens scan` report.
    Report,
}
