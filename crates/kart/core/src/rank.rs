//! Threshold filter and score ranking.

use crate::combine::{Combination, Totals};
use crate::error::{ErrorSeverity, KartError};
use crate::score::{WeightVector, score};
use crate::stats::StatKey;
use crate::table::Entity;

/// Errors raised while building a query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("stat {0} is not part of combination totals and cannot be thresholded")]
    StatNotCombined(StatKey),
}

impl KartError for QueryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "QUERY_STAT_NOT_COMBINED"
    }
}

/// Inclusive lower bound on one combined total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Threshold {
    stat: StatKey,
    value: i32,
}

impl Threshold {
    pub fn new(stat: StatKey, value: i32) -> Result<Self, QueryError> {
        if !stat.is_combined() {
            return Err(QueryError::StatNotCombined(stat));
        }
        Ok(Self { stat, value })
    }

    pub fn stat(&self) -> StatKey {
        self.stat
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Same stat, different bound.
    #[must_use]
    pub fn with_value(self, value: i32) -> Self {
        Self { value, ..self }
    }

    /// `Total[stat] >= value`.
    pub fn accepts(&self, totals: &Totals) -> bool {
        totals
            .get(self.stat)
            .is_some_and(|total| total >= self.value)
    }
}

/// A combination that passed the threshold, with its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedCombination<'a> {
    pub combination: Combination<'a>,
    pub score: f64,
}

impl<'a> RankedCombination<'a> {
    pub fn character(&self) -> &'a Entity {
        self.combination.character()
    }

    pub fn machine(&self) -> &'a Entity {
        self.combination.machine()
    }

    pub fn totals(&self) -> &Totals {
        self.combination.totals()
    }
}

/// Keeps combinations meeting `threshold` and sorts them by score, highest
/// first. Equal scores keep their input order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter_and_rank<'a, I>(
    combinations: I,
    threshold: Threshold,
    weights: WeightVector,
) -> Vec<RankedCombination<'a>>
where
    I: IntoIterator<Item = Combination<'a>>,
{
    let normalized = weights.normalized();

    let mut ranked: Vec<RankedCombination<'a>> = combinations
        .into_iter()
        .filter(|combination| threshold.accepts(combination.totals()))
        .map(|combination| RankedCombination {
            score: score(combination.totals(), &normalized),
            combination,
        })
        .collect();

    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    ranked
}
