//! Per-session state and the two query paths.
//!
//! A [`Session`] owns the loaded tables and configuration, both immutable.
//! Query state is not stored here: each call receives a [`SearchQuery`] or a
//! pair of names by value and recomputes everything from the tables.
//!
//! ```text
//! characters ─┬─ dedupe ─┐
//!             │          ├─ combine ─ filter_and_rank ─→ ranked list   (search)
//! machines ───┼──────────┘
//!             └─────────── combine ─ find_equivalent ─→ equivalence set (simulate)
//! ```

use crate::combine::{Combination, Totals, combine};
use crate::config::{ConfigError, SearchConfig};
use crate::dedupe::dedupe;
use crate::equivalence::find_equivalent;
use crate::error::{ErrorSeverity, KartError};
use crate::rank::{RankedCombination, Threshold, filter_and_rank};
use crate::score::WeightVector;
use crate::stats::StatKey;
use crate::table::{AttributeTable, SelectionError, TableKind};

/// Errors raised while building a [`Session`] or by [`Session::simulate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("expected a {expected} table, got a {found} table")]
    TableKind { expected: TableKind, found: TableKind },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("selected pair '{character}' + '{machine}' is missing from its own equivalence set")]
    Invariant { character: String, machine: String },
}

impl KartError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(inner) => inner.severity(),
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TableKind { .. } => "SESSION_TABLE_KIND",
            Self::Config(inner) => inner.error_code(),
            Self::Selection(inner) => inner.error_code(),
            Self::Invariant { .. } => "SESSION_EQUIVALENCE_INVARIANT",
        }
    }
}

/// Threshold and weights for one ranked search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchQuery {
    pub threshold: Threshold,
    pub weights: WeightVector,
}

impl SearchQuery {
    /// Query built from the configured defaults.
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            threshold: config.threshold(config.default_threshold)?,
            weights: config.default_weights,
        })
    }

    #[must_use]
    pub fn with_threshold_value(self, value: i32) -> Self {
        Self {
            threshold: self.threshold.with_value(value),
            ..self
        }
    }

    #[must_use]
    pub fn with_weights(self, weights: WeightVector) -> Self {
        Self { weights, ..self }
    }
}

/// Totals of a chosen pair and every pair that matches them exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation<'a> {
    pub selected: Combination<'a>,
    pub equivalents: Vec<Combination<'a>>,
}

impl<'a> Simulation<'a> {
    pub fn totals(&self) -> &Totals {
        self.selected.totals()
    }

    /// Equivalent pairs other than the selected one.
    pub fn others(&self) -> impl Iterator<Item = &Combination<'a>> {
        let character = &self.selected.character().name;
        let machine = &self.selected.machine().name;
        self.equivalents
            .iter()
            .filter(move |combination| !combination.is_pair(character, machine))
    }
}

/// Loaded tables plus configuration for one user session.
#[derive(Clone, Debug)]
pub struct Session {
    characters: AttributeTable,
    distinct_characters: AttributeTable,
    machines: AttributeTable,
    config: SearchConfig,
}

impl Session {
    /// Builds a session. The character table is deduplicated once, up front,
    /// for the ranked search path.
    ///
    /// Rejects tables of the wrong kind and a config that fails
    /// [`SearchConfig::validate`].
    pub fn new(
        characters: AttributeTable,
        machines: AttributeTable,
        config: SearchConfig,
    ) -> Result<Self, SessionError> {
        expect_kind(&characters, TableKind::Character)?;
        expect_kind(&machines, TableKind::Machine)?;
        config.validate()?;

        let distinct_characters = dedupe(&characters, &StatKey::ALL);
        tracing::info!(
            characters = characters.len(),
            distinct_characters = distinct_characters.len(),
            machines = machines.len(),
            "session ready"
        );

        Ok(Self {
            characters,
            distinct_characters,
            machines,
            config,
        })
    }

    pub fn characters(&self) -> &AttributeTable {
        &self.characters
    }

    /// Characters with stat-identical duplicates removed.
    pub fn distinct_characters(&self) -> &AttributeTable {
        &self.distinct_characters
    }

    pub fn machines(&self) -> &AttributeTable {
        &self.machines
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Query built from the session's configured defaults.
    pub fn default_query(&self) -> Result<SearchQuery, ConfigError> {
        SearchQuery::from_config(&self.config)
    }

    /// Ranked search over distinct characters × machines.
    pub fn search(&self, query: SearchQuery) -> Vec<RankedCombination<'_>> {
        let combinations = combine(&self.distinct_characters, &self.machines, self.config.bonus);
        let ranked = filter_and_rank(combinations, query.threshold, query.weights);

        if ranked.is_empty() {
            tracing::warn!(
                stat = %query.threshold.stat(),
                value = query.threshold.value(),
                "no combination meets the threshold"
            );
        } else {
            tracing::debug!(results = ranked.len(), "ranked search complete");
        }
        ranked
    }

    /// Totals for one named pair and all pairs with identical totals, over
    /// the full (un-deduplicated) character table.
    pub fn simulate(&self, character: &str, machine: &str) -> Result<Simulation<'_>, SessionError> {
        let character = self.characters.get(character)?;
        let machine = self.machines.get(machine)?;
        let selected = Combination::new(character, machine, self.config.bonus);

        let equivalents = find_equivalent(
            &self.characters,
            &self.machines,
            selected.totals(),
            self.config.bonus,
        );

        if !equivalents
            .iter()
            .any(|combination| combination.is_pair(&character.name, &machine.name))
        {
            return Err(SessionError::Invariant {
                character: character.name.clone(),
                machine: machine.name.clone(),
            });
        }

        Ok(Simulation {
            selected,
            equivalents,
        })
    }
}

fn expect_kind(table: &AttributeTable, expected: TableKind) -> Result<(), SessionError> {
    if table.kind() == expected {
        Ok(())
    } else {
        Err(SessionError::TableKind {
            expected,
            found: table.kind(),
        })
    }
}
