//! Weighted speed score.
//!
//! Score = Road × w_road + Terrain × w_terrain + Water × w_water, where the
//! user weights are normalised to sum to one. All-zero weights normalise to
//! all-zero and every combination scores 0.0.

use crate::combine::Totals;

/// Raw user weights for the three speed stats, typically percentages 0–100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightVector {
    pub road: u32,
    pub terrain: u32,
    pub water: u32,
}

impl WeightVector {
    /// Largest accepted percentage for a single weight.
    pub const MAX_PERCENT: u32 = 100;

    pub const fn new(road: u32, terrain: u32, water: u32) -> Self {
        Self {
            road,
            terrain,
            water,
        }
    }

    /// Sum of the raw weights.
    pub fn total(&self) -> u64 {
        u64::from(self.road) + u64::from(self.terrain) + u64::from(self.water)
    }

    /// Divides each weight by the sum. A zero sum yields all-zero weights.
    pub fn normalized(&self) -> NormalizedWeights {
        let total = self.total();
        if total == 0 {
            return NormalizedWeights::ZERO;
        }

        let total = total as f64;
        NormalizedWeights {
            road: f64::from(self.road) / total,
            terrain: f64::from(self.terrain) / total,
            water: f64::from(self.water) / total,
        }
    }
}

impl Default for WeightVector {
    /// Road-leaning default: 50 / 25 / 25.
    fn default() -> Self {
        Self::new(50, 25, 25)
    }
}

/// Weights after normalisation. Sum is 1.0, or 0.0 in the degenerate case.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedWeights {
    pub road: f64,
    pub terrain: f64,
    pub water: f64,
}

impl NormalizedWeights {
    pub const ZERO: NormalizedWeights = NormalizedWeights {
        road: 0.0,
        terrain: 0.0,
        water: 0.0,
    };

    pub fn sum(&self) -> f64 {
        self.road + self.terrain + self.water
    }
}

/// Weighted sum of the speed totals.
pub fn score(totals: &Totals, weights: &NormalizedWeights) -> f64 {
    f64::from(totals.road) * weights.road
        + f64::from(totals.terrain) * weights.terrain
        + f64::from(totals.water) * weights.water
}
