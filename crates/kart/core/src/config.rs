//! Search configuration: bonus, threshold bounds, defaults and presets.

use crate::combine::DEFAULT_BONUS;
use crate::error::{ErrorSeverity, KartError};
use crate::rank::Threshold;
use crate::score::WeightVector;
use crate::stats::StatKey;
use crate::table::STAT_RANGE;

/// A named threshold value offered as a one-click choice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdPreset {
    pub name: String,
    pub value: i32,
}

impl ThresholdPreset {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Errors raised by [`SearchConfig::validate`] and preset lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "bonus {0} is outside {lo}..={hi}",
        lo = STAT_RANGE.start(),
        hi = STAT_RANGE.end()
    )]
    BonusOutOfRange(i32),

    #[error("threshold range is empty: min {min} > max {max}")]
    EmptyRange { min: i32, max: i32 },

    #[error("{field} {value} is outside the threshold range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("threshold stat {0} is not part of combination totals")]
    StatNotCombined(StatKey),

    #[error("preset '{0}' is defined more than once")]
    DuplicatePreset(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

impl KartError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BonusOutOfRange(_) => "CONFIG_BONUS_OUT_OF_RANGE",
            Self::EmptyRange { .. } => "CONFIG_EMPTY_RANGE",
            Self::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
            Self::StatNotCombined(_) => "CONFIG_STAT_NOT_COMBINED",
            Self::DuplicatePreset(_) => "CONFIG_DUPLICATE_PRESET",
            Self::UnknownPreset(_) => "CONFIG_UNKNOWN_PRESET",
        }
    }
}

/// Tunable parameters of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Flat bonus added to every combined total.
    pub bonus: i32,
    /// Stat the threshold applies to.
    pub threshold_stat: StatKey,
    pub threshold_min: i32,
    pub threshold_max: i32,
    /// Threshold used when the user has not chosen one.
    pub default_threshold: i32,
    pub default_weights: WeightVector,
    pub presets: Vec<ThresholdPreset>,
}

impl SearchConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_THRESHOLD_STAT: StatKey = StatKey::Accel;
    pub const DEFAULT_THRESHOLD_MIN: i32 = 0;
    pub const DEFAULT_THRESHOLD_MAX: i32 = 30;
    pub const DEFAULT_THRESHOLD: i32 = 15;

    pub fn new() -> Self {
        Self {
            bonus: DEFAULT_BONUS,
            threshold_stat: Self::DEFAULT_THRESHOLD_STAT,
            threshold_min: Self::DEFAULT_THRESHOLD_MIN,
            threshold_max: Self::DEFAULT_THRESHOLD_MAX,
            default_threshold: Self::DEFAULT_THRESHOLD,
            default_weights: WeightVector::default(),
            presets: vec![
                ThresholdPreset::new("middleweight", 11),
                ThresholdPreset::new("lightweight", 14),
                ThresholdPreset::new("time_attack", 0),
            ],
        }
    }

    /// Checks internal consistency. Loaders call this after deserializing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !STAT_RANGE.contains(&self.bonus) {
            return Err(ConfigError::BonusOutOfRange(self.bonus));
        }
        if self.threshold_min > self.threshold_max {
            return Err(ConfigError::EmptyRange {
                min: self.threshold_min,
                max: self.threshold_max,
            });
        }
        if !self.threshold_stat.is_combined() {
            return Err(ConfigError::StatNotCombined(self.threshold_stat));
        }

        self.check_in_range("default_threshold", self.default_threshold)?;

        for (index, preset) in self.presets.iter().enumerate() {
            self.check_in_range(&format!("preset '{}'", preset.name), preset.value)?;
            let duplicate = self.presets[..index]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&preset.name));
            if duplicate {
                return Err(ConfigError::DuplicatePreset(preset.name.clone()));
            }
        }

        Ok(())
    }

    fn check_in_range(&self, field: &str, value: i32) -> Result<(), ConfigError> {
        if (self.threshold_min..=self.threshold_max).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field: field.to_string(),
                value,
                min: self.threshold_min,
                max: self.threshold_max,
            })
        }
    }

    /// Looks up a preset by name, ignoring ASCII case.
    pub fn preset(&self, name: &str) -> Result<&ThresholdPreset, ConfigError> {
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Clamps a user-entered value into the threshold range.
    pub fn clamp_threshold(&self, value: i32) -> i32 {
        value.max(self.threshold_min).min(self.threshold_max)
    }

    /// Threshold on the configured stat at `value`, clamped to the range.
    pub fn threshold(&self, value: i32) -> Result<Threshold, ConfigError> {
        Threshold::new(self.threshold_stat, self.clamp_threshold(value))
            .map_err(|_| ConfigError::StatNotCombined(self.threshold_stat))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
