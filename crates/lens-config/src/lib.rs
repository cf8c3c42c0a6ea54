//! # lens-config
//!
//! Layered configuration loading for Lens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LENS_*` prefix, `__` as separator)
//! 2. Project-level `.lens/config.toml`
//! 3. User-level `~/.config/lens/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LENS_PARSER__STRICT` -> `parser.strict`,
//! `LENS_SCAN__THREADS` -> `scan.threads`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lens_config::LensConfig;
//!
//! let config = LensConfig::load().expect("config");
//! if !config.parser.strict {
//!     println!("syntax errors will be tolerated");
//! }
//! ```

mod error;
mod parser;
mod scan;

pub use error::ConfigError;
pub use parser::ParserConfig;
pub use scan::ScanConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Directory holding the project-local config file.
pub const PROJECT_CONFIG_DIR: &str = ".lens";

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "LENS_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LensConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl LensConfig {
    /// Load configuration from all sources, resolving the project-local file
    /// against the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with `project_root` as the project directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a value is
    /// invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the current directory.
    ///
    /// Public so tests and callers can inspect the figment directly or add
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for `project_root`.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()
    }

    /// Path to the project-local config file under `project_root`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lens").join(CONFIG_FILE))
    }
}
