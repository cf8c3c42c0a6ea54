//! ast-grep wrapper, language detection and the source-to-suites entry points.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::{Doc, Node};
use ast_grep_language::SupportLang;
use lens_core::TestSuite;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// How tolerant the front-end is of broken source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject files whose syntax tree contains error nodes instead of
    /// extracting from whatever tree-sitter recovered.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Detect the language of a file from its extension.
///
/// Only PHP is recognised; anything else returns `None`.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = Path::new(file_path).extension()?.to_str()?;
    ext.eq_ignore_ascii_case("php").then_some(SupportLang::Php)
}

/// Parse PHP source into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Php.ast_grep(source)
}

/// Extract the test suites of one PHP file with default options.
///
/// # Errors
///
/// Returns [`ParserError::Syntax`] when the source does not parse cleanly.
pub fn parse(source: &str, file: &str) -> Result<Vec<TestSuite>, ParserError> {
    parse_with(source, file, &ParseOptions::default())
}

/// Extract the test suites of one PHP file.
///
/// `file` is only used for labelling; nothing is read from disk.
///
/// # Errors
///
/// Returns [`ParserError::Syntax`] in strict mode when the tree contains
/// error nodes.
pub fn parse_with(
    source: &str,
    file: &str,
    options: &ParseOptions,
) -> Result<Vec<TestSuite>, ParserError> {
    let tree = parse_source(source);
    let root = tree.root();

    if let Some(line) = first_error_line(&root) {
        if options.strict {
            return Err(ParserError::Syntax {
                file: file.to_string(),
                line,
            });
        }
        tracing::debug!(file, line, "syntax error recovered, extracting anyway");
    }

    let program = crate::php::lower(&root);
    Ok(crate::extract(&program, file))
}

/// Read and extract one file from disk.
///
/// The path is reported in the records exactly as given.
///
/// # Errors
///
/// Returns [`ParserError::UnsupportedLanguage`] for non-PHP files,
/// [`ParserError::Io`] when the file cannot be read, and
/// [`ParserError::Syntax`] as for [`parse_with`].
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Vec<TestSuite>, ParserError> {
    let file = path.to_string_lossy();
    if detect_language(&file).is_none() {
        return Err(ParserError::UnsupportedLanguage(file.into_owned()));
    }

    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: file.to_string(),
        source,
    })?;
    parse_with(&source, &file, options)
}

/// One-based line of the first `ERROR` node, depth first.
fn first_error_line<D: Doc>(node: &Node<'_, D>) -> Option<u32> {
    if node.kind().as_ref() == "ERROR" {
        let line = u32::try_from(node.start_pos().line()).unwrap_or(u32::MAX - 1);
        return Some(line + 1);
    }
    node.children().find_map(|child| first_error_line(&child))
}
