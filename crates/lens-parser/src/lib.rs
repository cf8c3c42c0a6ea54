//! # lens-parser
//!
//! PHPUnit test discovery for Lens.
//!
//! The crate is split along the boundary between "any parser" and "the
//! extraction rules":
//! - [`ast`] is a small closed syntax model: namespaces, classes, members,
//!   methods with their leading comments and attributes, and source spans.
//! - [`extract`] walks that model and produces `TestSuite` records: which
//!   methods are tests, their ids, their `@depends` / `@dataProvider` /
//!   `@testdox` metadata (docblock or attribute), and their spans.
//! - [`php`] lowers an ast-grep (tree-sitter) PHP tree into the model, and
//!   [`parser`] ties the two together for callers holding source text.
//!
//! Extraction is pure and synchronous; callers can run it on many files in
//! parallel without coordination.

pub mod ast;
mod error;
pub mod extract;
pub mod parser;
pub mod php;
mod test_files;

pub use error::ParserError;
pub use extract::extract;
pub use parser::{ParseOptions, detect_language, parse, parse_file, parse_source, parse_with};
pub use test_files::{is_test_dir, is_test_file, is_vendored_dir};
