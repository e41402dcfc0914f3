//! Content loaders for reading catalogs and configuration from files.
//!
//! Loaders convert RON/TOML files into `kart-core` types and validate them
//! before returning, so invalid data never reaches a session.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::{CHARACTERS_FILE, CONFIG_FILE, ContentFactory, MACHINES_FILE};

use std::path::{Path, PathBuf};

use kart_core::{ConfigError, ErrorSeverity, KartError, SessionError, TableError};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// A required data source is missing or malformed.
///
/// Every variant names the file so the message can be shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file not found or unreadable: {}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("invalid catalog in {}: {source}", path.display())]
    InvalidTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("cannot assemble a session from {}: {source}", path.display())]
    Session {
        path: PathBuf,
        #[source]
        source: SessionError,
    },
}

impl LoadError {
    /// The file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path, .. }
            | Self::Malformed { path, .. }
            | Self::InvalidTable { path, .. }
            | Self::InvalidConfig { path, .. }
            | Self::Session { path, .. } => path,
        }
    }
}

impl KartError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "DATA_UNAVAILABLE_MISSING",
            Self::Malformed { .. } => "DATA_UNAVAILABLE_MALFORMED",
            Self::InvalidTable { .. } => "DATA_UNAVAILABLE_INVALID_TABLE",
            Self::InvalidConfig { .. } => "DATA_UNAVAILABLE_INVALID_CONFIG",
            Self::Session { .. } => "DATA_UNAVAILABLE_SESSION",
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Missing {
        path: path.to_path_buf(),
        source,
    })
}
