//! Front-end configuration.

use serde::{Deserialize, Serialize};

const fn default_strict() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Refuse to extract from files with syntax errors.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_by_default() {
        assert!(ParserConfig::default().strict);
    }
}
