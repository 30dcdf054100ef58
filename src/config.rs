//! Value selection configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strategy::StrategyChoice;
use crate::table::NearZeroVariant;

/// Relative weights of the four per-parameter strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    /// Weight of [`StrategyChoice::MinExtreme`].
    pub min_extreme: u32,
    /// Weight of [`StrategyChoice::MaxExtreme`].
    pub max_extreme: u32,
    /// Weight of [`StrategyChoice::NearZero`].
    pub near_zero: u32,
    /// Weight of [`StrategyChoice::UniformRandom`].
    pub uniform_random: u32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            min_extreme: 1,
            max_extreme: 1,
            near_zero: 1,
            uniform_random: 1,
        }
    }
}

impl StrategyWeights {
    /// Weight of one strategy.
    pub fn weight(&self, choice: StrategyChoice) -> u32 {
        match choice {
            StrategyChoice::MinExtreme => self.min_extreme,
            StrategyChoice::MaxExtreme => self.max_extreme,
            StrategyChoice::NearZero => self.near_zero,
            StrategyChoice::UniformRandom => self.uniform_random,
        }
    }

    /// Weights selecting `choice` on every draw.
    pub fn only(choice: StrategyChoice) -> Self {
        let mut weights = Self {
            min_extreme: 0,
            max_extreme: 0,
            near_zero: 0,
            uniform_random: 0,
        };
        match choice {
            StrategyChoice::MinExtreme => weights.min_extreme = 1,
            StrategyChoice::MaxExtreme => weights.max_extreme = 1,
            StrategyChoice::NearZero => weights.near_zero = 1,
            StrategyChoice::UniformRandom => weights.uniform_random = 1,
        }
        weights
    }

    pub(crate) fn table(&self) -> [(StrategyChoice, u32); 4] {
        StrategyChoice::ALL.map(|choice| (choice, self.weight(choice)))
    }
}

/// Relative weights of the three near-zero variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearZeroWeights {
    /// Weight of [`NearZeroVariant::JustBelowZero`].
    pub just_below_zero: u32,
    /// Weight of [`NearZeroVariant::JustAboveZero`].
    pub just_above_zero: u32,
    /// Weight of [`NearZeroVariant::ExactZero`].
    pub exact_zero: u32,
}

impl Default for NearZeroWeights {
    fn default() -> Self {
        Self {
            just_below_zero: 1,
            just_above_zero: 1,
            exact_zero: 1,
        }
    }
}

impl NearZeroWeights {
    /// Weight of one variant.
    pub fn weight(&self, variant: NearZeroVariant) -> u32 {
        match variant {
            NearZeroVariant::JustBelowZero => self.just_below_zero,
            NearZeroVariant::JustAboveZero => self.just_above_zero,
            NearZeroVariant::ExactZero => self.exact_zero,
        }
    }

    /// Weights selecting `variant` on every draw.
    pub fn only(variant: NearZeroVariant) -> Self {
        Self {
            just_below_zero: u32::from(variant == NearZeroVariant::JustBelowZero),
            just_above_zero: u32::from(variant == NearZeroVariant::JustAboveZero),
            exact_zero: u32::from(variant == NearZeroVariant::ExactZero),
        }
    }

    pub(crate) fn table(&self) -> [(NearZeroVariant, u32); 3] {
        NearZeroVariant::ALL.map(|variant| (variant, self.weight(variant)))
    }
}

/// Minimum used for 128-bit complex parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexMinimum {
    /// Both components at `f64::MIN`, consistent with every other float kind.
    #[default]
    Negative,
    /// Both components at `f64::MAX`, matching older extreme value generators.
    LegacyPositive,
}

/// Configuration for a value generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremeConfig {
    /// Strategy draw weights.
    pub strategy_weights: StrategyWeights,
    /// Near-zero variant draw weights.
    pub near_zero_weights: NearZeroWeights,
    /// 128-bit complex minimum policy.
    pub complex_minimum: ComplexMinimum,
}

impl ExtremeConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weight sets that leave nothing to draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy_weights.table().iter().all(|(_, w)| *w == 0) {
            return Err(ConfigError::NoStrategyEnabled);
        }
        if self.near_zero_weights.table().iter().all(|(_, w)| *w == 0) {
            return Err(ConfigError::NoNearZeroVariantEnabled);
        }
        Ok(())
    }

    /// Set strategy weights.
    pub fn with_strategy_weights(mut self, weights: StrategyWeights) -> Self {
        self.strategy_weights = weights;
        self
    }

    /// Set near-zero variant weights.
    pub fn with_near_zero_weights(mut self, weights: NearZeroWeights) -> Self {
        self.near_zero_weights = weights;
        self
    }

    /// Set the 128-bit complex minimum policy.
    pub fn with_complex_minimum(mut self, complex_minimum: ComplexMinimum) -> Self {
        self.complex_minimum = complex_minimum;
        self
    }

    /// Always roll `choice`.
    pub fn only_strategy(self, choice: StrategyChoice) -> Self {
        self.with_strategy_weights(StrategyWeights::only(choice))
    }

    /// Always roll `variant` when the near-zero strategy is selected.
    pub fn only_near_zero(self, variant: NearZeroVariant) -> Self {
        self.with_near_zero_weights(NearZeroWeights::only(variant))
    }
}
