//! Search configuration loader.

use std::path::Path;

use ceres_core::SearchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for search configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing SearchConfig
    ///
    /// # Returns
    ///
    /// Returns a SearchConfig.
    pub fn load(path: &Path) -> LoadResult<SearchConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(path = %path.display(), ?config, "Loaded search config");
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<SearchConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("word = \"SANTA\"\n").unwrap();

        assert_eq!(config.word, "SANTA");
        assert_eq!(config.cross_word, SearchConfig::DEFAULT_CROSS_WORD);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), SearchConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ConfigLoader::parse("word = 4").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
