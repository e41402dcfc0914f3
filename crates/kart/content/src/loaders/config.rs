//! Search configuration loader.

use std::path::Path;

use kart_core::SearchConfig;

use crate::loaders::{LoadError, LoadResult, read_file};

/// Loader for search configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Fields left out of the file keep their [`SearchConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<SearchConfig> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    /// Like [`ConfigLoader::load`], but an absent file yields the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> LoadResult<SearchConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SearchConfig::default());
        }
        Self::load(path)
    }

    /// Parse config from TOML text. `path` is used for error reporting.
    pub fn parse(path: &Path, content: &str) -> LoadResult<SearchConfig> {
        let config: SearchConfig = toml::from_str(content).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate().map_err(|source| LoadError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }
}
