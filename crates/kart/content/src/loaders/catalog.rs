//! Character and machine catalog loader.

use std::path::Path;

use kart_core::{AttributeTable, EntityRecord, TableKind};

use crate::loaders::{LoadError, LoadResult, read_file};

/// Loader for catalog tables from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog of `kind` from a RON file.
    ///
    /// RON format: `Vec<EntityRecord>`, one row per entity in display order.
    ///
    /// ```ron
    /// [
    ///     (name: "Mario", stats: {
    ///         "Road": 3, "Terrain": 3, "Water": 3, "Unknown": 0,
    ///         "Accel/MT": 2, "Weight": 1, "Handling": 2,
    ///     }),
    /// ]
    /// ```
    ///
    /// Every stat column required by `kind` must be present in every row.
    pub fn load(path: &Path, kind: TableKind) -> LoadResult<AttributeTable> {
        let content = read_file(path)?;
        Self::parse(path, &content, kind)
    }

    /// Parse catalog rows from RON text. `path` is used for error reporting.
    pub fn parse(path: &Path, content: &str, kind: TableKind) -> LoadResult<AttributeTable> {
        let records: Vec<EntityRecord> =
            ron::from_str(content).map_err(|e| LoadError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let table =
            AttributeTable::from_records(kind, records).map_err(|source| LoadError::InvalidTable {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(%kind, rows = table.len(), path = %path.display(), "loaded catalog");
        Ok(table)
    }
}
