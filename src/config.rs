//! Settings from `trifix.toml` merged with command-line overrides.
//!
//! ```toml
//! output_dir = "fixtures"
//! seed = 42
//! log_level = "info"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixtures::FixtureKind;

/// Settings file looked up in the current directory
pub const DEFAULT_SETTINGS_FILE: &str = "trifix.toml";

/// Log filter used when neither the environment nor the settings set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory fixtures are written into
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
    /// Default tracing filter, e.g. "info" or "trifix=debug"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from `explicit`, or from `trifix.toml` in the current
    /// directory if present.
    ///
    /// A missing default file yields default settings; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Settings file not found: {}", path.display());
                }
                Self::from_file(path)
            }
            None => {
                let path = Path::new(DEFAULT_SETTINGS_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Apply command-line overrides; flags win over the settings file
    pub fn resolve(&self, seed: Option<u64>, output_dir: Option<PathBuf>) -> RunOptions {
        RunOptions {
            output_dir: output_dir
                .or_else(|| self.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            seed: seed.or(self.seed),
        }
    }
}

/// Effective options for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Destination for `kind`: the explicit path, or the kind's file name in the output directory
    pub fn output_path(&self, kind: FixtureKind, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| self.output_dir.join(kind.file_name()))
    }
}
