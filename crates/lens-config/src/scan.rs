//! File discovery configuration for `lens scan`.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_include() -> Vec<String> {
    vec!["*Test.php".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["vendor/".to_string()]
}

const fn default_respect_gitignore() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Glob patterns a file name must match to be parsed.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Glob patterns for paths that are never visited.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Honour `.gitignore`, `.git/info/exclude` and global git ignores.
    #[serde(default = "default_respect_gitignore")]
    pub respect_gitignore: bool,

    /// Worker threads for parallel extraction. `0` lets rayon decide.
    #[serde(default)]
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
            respect_gitignore: default_respect_gitignore(),
            threads: 0,
        }
    }
}

impl ScanConfig {
    /// Reject settings that would make a scan silently find nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `include` is empty or holds
    /// a blank pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.include.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.include".to_string(),
                reason: "at least one pattern is required".to_string(),
            });
        }
        if self.include.iter().chain(&self.exclude).any(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "scan".to_string(),
                reason: "patterns must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
