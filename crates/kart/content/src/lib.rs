//! Data-driven catalogs and loaders.
//!
//! This crate reads the session's inputs from a data directory:
//! - Character catalog (RON)
//! - Machine catalog (RON)
//! - Search configuration (TOML, optional)
//!
//! Loading either catalog is all-or-nothing. A missing or malformed file is a
//! [`LoadError`] naming that file, and no partial table is produced.

pub mod loaders;

pub use loaders::{
    CHARACTERS_FILE, CONFIG_FILE, CatalogLoader, ConfigLoader, ContentFactory, LoadError,
    LoadResult, MACHINES_FILE,
};
