//! Character/machine combination search for a kart-racing game.
//!
//! `kart-core` holds the deterministic engine: typed stat keys, immutable
//! attribute tables, the cross-product combination engine, deduplication,
//! weighted scoring, threshold ranking and exact-equivalence search. It does
//! no I/O; `kart-content` loads tables and the client renders results.
//!
//! All query state is passed by value into [`Session`] calls and every result
//! is recomputed from the tables.
pub mod combine;
pub mod config;
pub mod dedupe;
pub mod equivalence;
pub mod error;
pub mod rank;
pub mod score;
pub mod session;
pub mod stats;
pub mod table;

pub use combine::{Combination, DEFAULT_BONUS, Totals, combine};
pub use config::{ConfigError, SearchConfig, ThresholdPreset};
pub use dedupe::dedupe;
pub use equivalence::find_equivalent;
pub use error::{ErrorSeverity, KartError};
pub use rank::{QueryError, RankedCombination, Threshold, filter_and_rank};
pub use score::{NormalizedWeights, WeightVector, score};
pub use session::{SearchQuery, Session, SessionError, Simulation};
pub use stats::{StatKey, StatLine};
pub use table::{
    AttributeTable, Entity, EntityRecord, STAT_RANGE, SelectionError, TableError, TableKind,
};
