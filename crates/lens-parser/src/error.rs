//! Parser error types for lens-parser.

/// Errors raised before extraction can run.
///
/// A file without tests is not an error: extraction returns an empty list.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Syntax error in {file} at line {line}")]
    Syntax { file: String, line: u32 },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
