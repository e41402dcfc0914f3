//! Content factory for building a session from a data directory.

use std::path::{Path, PathBuf};

use kart_core::{AttributeTable, SearchConfig, Session, TableKind};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadError, LoadResult};

pub const CHARACTERS_FILE: &str = "characters.ron";
pub const MACHINES_FILE: &str = "machines.ron";
pub const CONFIG_FILE: &str = "config.toml";

/// Content factory that loads all session inputs from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── characters.ron   (required)
/// ├── machines.ron     (required)
/// └── config.toml      (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the character catalog from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<AttributeTable> {
        CatalogLoader::load(&self.data_dir.join(CHARACTERS_FILE), TableKind::Character)
    }

    /// Load the machine catalog from `machines.ron`.
    pub fn load_machines(&self) -> LoadResult<AttributeTable> {
        CatalogLoader::load(&self.data_dir.join(MACHINES_FILE), TableKind::Machine)
    }

    /// Load search configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<SearchConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join(CONFIG_FILE))
    }

    /// Load everything and assemble a session.
    ///
    /// Stops at the first unavailable source.
    pub fn load_session(&self) -> LoadResult<Session> {
        let characters = self.load_characters()?;
        let machines = self.load_machines()?;
        let config = self.load_config()?;

        Session::new(characters, machines, config).map_err(|source| LoadError::Session {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARACTERS: &str = r#"[
        (name: "Mario", stats: {
            "Road": 3, "Terrain": 3, "Water": 3, "Unknown": 0,
            "Accel/MT": 2, "Weight": 1, "Handling": 2,
        }),
        (name: "Luigi", stats: {
            "Road": 3, "Terrain": 3, "Water": 3, "Unknown": 0,
            "Accel/MT": 2, "Weight": 1, "Handling": 2,
        }),
    ]"#;

    const MACHINES: &str = r#"[
        (name: "Standard Kart", stats: {
            "Road": 2, "Terrain": 1, "Water": 0, "Accel/MT": 3, "Weight": 2, "Handling": 1,
        }),
    ]"#;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_session_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CHARACTERS_FILE), CHARACTERS).unwrap();
        std::fs::write(dir.path().join(MACHINES_FILE), MACHINES).unwrap();

        let session = ContentFactory::new(dir.path()).load_session().unwrap();

        assert_eq!(session.characters().len(), 2);
        assert_eq!(session.distinct_characters().len(), 1);
        assert_eq!(session.config(), &SearchConfig::default());
    }

    #[test]
    fn missing_machines_halts_loading() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CHARACTERS_FILE), CHARACTERS).unwrap();

        let err = ContentFactory::new(dir.path()).load_session().unwrap_err();

        assert!(matches!(err, LoadError::Missing { .. }));
        assert!(err.path().ends_with(MACHINES_FILE));
    }
}
