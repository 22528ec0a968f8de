//! Environment-driven configuration for the `ceres` binary.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use ceres_content::ConfigLoader;
use ceres_core::SearchConfig;

/// Settings gathered from the process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub word: Option<String>,
    pub cross_word: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CERES_WORD` - Word for the straight-line count (default: XMAS)
    /// - `CERES_CROSS_WORD` - Word for the crossing count (default: MAS)
    /// - `CERES_CONFIG` - Path to a TOML search config
    pub fn from_env() -> Self {
        Self {
            word: read_env("CERES_WORD"),
            cross_word: read_env("CERES_CROSS_WORD"),
            config_path: read_env::<String>("CERES_CONFIG").map(PathBuf::from),
        }
    }

    /// Layers explicit overrides on top of this configuration. Present values
    /// in `overrides` win.
    pub fn merge(self, overrides: CliConfig) -> Self {
        Self {
            word: overrides.word.or(self.word),
            cross_word: overrides.cross_word.or(self.cross_word),
            config_path: overrides.config_path.or(self.config_path),
        }
    }

    /// Resolves the effective search config: file values first, then the
    /// word overrides held here.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => SearchConfig::default(),
        };

        if let Some(word) = &self.word {
            config.word = word.clone();
        }
        if let Some(cross_word) = &self.cross_word {
            config.cross_word = cross_word.clone();
        }

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
