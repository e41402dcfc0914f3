//! Stat keys and fixed-size stat vectors.
//!
//! Every catalog column is addressed through [`StatKey`] rather than a raw
//! column string, so a misspelled stat is rejected when a table is built
//! instead of silently producing a missing value later.
//!
//! # Stat sets
//!
//! ```text
//! ALL       Road Terrain Water Unknown Accel Weight Handling   (dedupe grouping)
//! COMBINED  Road Terrain Water         Accel Weight Handling   (Totals)
//! SPEED     Road Terrain Water                                 (Score)
//! ```

use core::ops::{Index, IndexMut};

/// A recognised stat column.
///
/// Parsing is ASCII-case-insensitive and accepts the catalog alias
/// `Accel/MT` for [`StatKey::Accel`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKey {
    /// Speed on paved road.
    Road,
    /// Speed off-road.
    Terrain,
    /// Speed on water.
    Water,
    /// Character-only column of unknown meaning. Used for grouping only.
    Unknown,
    /// Acceleration (mini-turbo).
    #[strum(to_string = "Accel", serialize = "Accel/MT")]
    Accel,
    Weight,
    Handling,
}

impl StatKey {
    /// Number of recognised stats.
    pub const COUNT: usize = 7;

    /// All stats in canonical order.
    pub const ALL: [StatKey; Self::COUNT] = [
        StatKey::Road,
        StatKey::Terrain,
        StatKey::Water,
        StatKey::Unknown,
        StatKey::Accel,
        StatKey::Weight,
        StatKey::Handling,
    ];

    /// Stats shared by both tables; the stats a combination totals.
    pub const COMBINED: [StatKey; 6] = [
        StatKey::Road,
        StatKey::Terrain,
        StatKey::Water,
        StatKey::Accel,
        StatKey::Weight,
        StatKey::Handling,
    ];

    /// Speed stats that feed the weighted score.
    pub const SPEED: [StatKey; 3] = [StatKey::Road, StatKey::Terrain, StatKey::Water];

    /// Returns true if this stat takes part in combination totals.
    pub const fn is_combined(self) -> bool {
        !matches!(self, StatKey::Unknown)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One integer value per [`StatKey`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine([i32; StatKey::COUNT]);

impl StatLine {
    /// A line with every stat set to zero.
    pub const ZERO: StatLine = StatLine([0; StatKey::COUNT]);

    /// Builds a line from `(key, value)` pairs; unspecified stats are zero.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (StatKey, i32)>,
    {
        let mut line = Self::ZERO;
        for (key, value) in pairs {
            line[key] = value;
        }
        line
    }

    /// Returns the values at `keys`, in the order given.
    pub fn project(&self, keys: &[StatKey]) -> Vec<i32> {
        keys.iter().map(|&key| self[key]).collect()
    }
}

impl Index<StatKey> for StatLine {
    type Output = i32;

    fn index(&self, key: StatKey) -> &i32 {
        &self.0[key.index()]
    }
}

impl IndexMut<StatKey> for StatLine {
    fn index_mut(&mut self, key: StatKey) -> &mut i32 {
        &mut self.0[key.index()]
    }
}
