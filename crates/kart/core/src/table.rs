//! Attribute tables: ordered, immutable catalogs of characters or machines.
//!
//! Tables are built once per session and never mutated. Load order is kept
//! because it is both the default selector order and the tie-break for
//! deduplication and ranking.

use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

use crate::error::{ErrorSeverity, KartError};
use crate::stats::{StatKey, StatLine};

/// Which catalog a table holds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TableKind {
    Character,
    Machine,
}

impl TableKind {
    /// Stat columns every row of this kind must declare.
    ///
    /// Machines carry no `Unknown` column; it defaults to zero.
    pub const fn required_stats(self) -> &'static [StatKey] {
        match self {
            TableKind::Character => &StatKey::ALL,
            TableKind::Machine => &StatKey::COMBINED,
        }
    }
}

/// A named character or machine with its stat vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub stats: StatLine,
}

impl Entity {
    pub fn new(name: impl Into<String>, stats: StatLine) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Accepted range for a single catalog stat value.
///
/// Combined totals and the bonus are bounded by the same range, so a total
/// always fits in `i32`.
pub const STAT_RANGE: RangeInclusive<i32> = -1_000..=1_000;

/// A raw catalog row as it appears in a data file.
///
/// Column names are strings here; [`AttributeTable::from_records`] resolves
/// them to [`StatKey`]s and checks the declared column set. A column repeated
/// verbatim within one row is rejected while deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "unique_columns"))]
    pub stats: BTreeMap<String, i32>,
}

#[cfg(feature = "serde")]
fn unique_columns<'de, D>(deserializer: D) -> Result<BTreeMap<String, i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use std::collections::btree_map::Entry;

    use serde::de::{Error, MapAccess, Visitor};

    struct Columns;

    impl<'de> Visitor<'de> for Columns {
        type Value = BTreeMap<String, i32>;

        fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            f.write_str("a map of stat column names to integers")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut columns = BTreeMap::new();
            while let Some((column, value)) = map.next_entry::<String, i32>()? {
                match columns.entry(column) {
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    Entry::Occupied(slot) => {
                        return Err(A::Error::custom(format_args!(
                            "stat column '{}' appears more than once",
                            slot.key()
                        )));
                    }
                }
            }
            Ok(columns)
        }
    }

    deserializer.deserialize_map(Columns)
}

/// Errors raised while building a table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{kind} row {index} has an empty name")]
    EmptyName { kind: TableKind, index: usize },

    #[error("{kind} '{name}' appears more than once")]
    DuplicateName { kind: TableKind, name: String },

    #[error("{kind} '{entity}' has unrecognised stat column '{column}'")]
    UnknownStat {
        kind: TableKind,
        entity: String,
        column: String,
    },

    #[error("{kind} '{entity}' declares stat {stat} more than once")]
    DuplicateStat {
        kind: TableKind,
        entity: String,
        stat: StatKey,
    },

    #[error("{kind} '{entity}' is missing required stat column {stat}")]
    MissingStat {
        kind: TableKind,
        entity: String,
        stat: StatKey,
    },

    #[error(
        "{kind} '{entity}' has {stat} = {value}, outside {}..={}",
        STAT_RANGE.start(),
        STAT_RANGE.end()
    )]
    StatOutOfRange {
        kind: TableKind,
        entity: String,
        stat: StatKey,
        value: i32,
    },
}

impl KartError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "TABLE_EMPTY_NAME",
            Self::DuplicateName { .. } => "TABLE_DUPLICATE_NAME",
            Self::UnknownStat { .. } => "TABLE_UNKNOWN_STAT",
            Self::DuplicateStat { .. } => "TABLE_DUPLICATE_STAT",
            Self::MissingStat { .. } => "TABLE_MISSING_STAT",
            Self::StatOutOfRange { .. } => "TABLE_STAT_OUT_OF_RANGE",
        }
    }
}

/// A selected name that is absent from its table.
///
/// Selectors are populated from the same tables, so this is an invariant
/// violation rather than a user mistake.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: TableKind, name: String },
}

impl KartError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "SELECTION_NOT_FOUND"
    }
}

/// Ordered, immutable sequence of entities of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeTable {
    kind: TableKind,
    entities: Vec<Entity>,
}

impl AttributeTable {
    /// Builds a table from already-typed entities, rejecting empty or
    /// duplicate names and stat values outside [`STAT_RANGE`].
    pub fn new(kind: TableKind, entities: Vec<Entity>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for (index, entity) in entities.iter().enumerate() {
            if entity.name.trim().is_empty() {
                return Err(TableError::EmptyName { kind, index });
            }
            if !seen.insert(entity.name.as_str()) {
                return Err(TableError::DuplicateName {
                    kind,
                    name: entity.name.clone(),
                });
            }
            if let Some(&stat) = StatKey::ALL
                .iter()
                .find(|&&stat| !STAT_RANGE.contains(&entity.stats[stat]))
            {
                return Err(TableError::StatOutOfRange {
                    kind,
                    entity: entity.name.clone(),
                    stat,
                    value: entity.stats[stat],
                });
            }
        }

        Ok(Self { kind, entities })
    }

    /// Builds a table from raw rows, resolving column names and checking that
    /// every column required by `kind` is present.
    pub fn from_records(kind: TableKind, records: Vec<EntityRecord>) -> Result<Self, TableError> {
        let mut entities = Vec::with_capacity(records.len());

        for record in records {
            let mut stats = StatLine::ZERO;
            let mut declared = HashSet::new();

            for (column, value) in &record.stats {
                let key: StatKey = column.parse().map_err(|_| TableError::UnknownStat {
                    kind,
                    entity: record.name.clone(),
                    column: column.clone(),
                })?;
                if !declared.insert(key) {
                    return Err(TableError::DuplicateStat {
                        kind,
                        entity: record.name.clone(),
                        stat: key,
                    });
                }
                stats[key] = *value;
            }

            if let Some(&missing) = kind
                .required_stats()
                .iter()
                .find(|key| !declared.contains(*key))
            {
                return Err(TableError::MissingStat {
                    kind,
                    entity: record.name,
                    stat: missing,
                });
            }

            entities.push(Entity::new(record.name, stats));
        }

        Self::new(kind, entities)
    }

    /// Wraps entities taken from an already-validated table.
    pub(crate) fn from_subset(kind: TableKind, entities: Vec<Entity>) -> Self {
        Self { kind, entities }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entity names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|entity| entity.name.as_str())
    }

    /// Looks up an entity by exact name.
    pub fn get(&self, name: &str) -> Result<&Entity, SelectionError> {
        self.entities
            .iter()
            .find(|entity| entity.name == name)
            .ok_or_else(|| SelectionError::NotFound {
                kind: self.kind,
                name: name.to_string(),
            })
    }
}

impl<'a> IntoIterator for &'a AttributeTable {
    type Item = &'a Entity;
    type IntoIter = core::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
