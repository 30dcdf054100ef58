//! Per-parameter strategy selection.

use proptest::prelude::Rng;
use proptest::test_runner::TestRunner;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::arguments::Arguments;
use crate::config::{ExtremeConfig, StrategyWeights};
use crate::error::{ConfigError, Diagnostic, GenerationError};
use crate::fallback;
use crate::param::Param;
use crate::table::ExtremeValues;

/// Value policy applied to one parameter on one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyChoice {
    /// Smallest value of the type.
    MinExtreme,
    /// Largest value of the type.
    MaxExtreme,
    /// Zero or its closest neighbours.
    NearZero,
    /// Unbiased value from the uniform fallback.
    UniformRandom,
}

impl StrategyChoice {
    /// Every strategy, in draw order.
    pub const ALL: [StrategyChoice; 4] = [
        StrategyChoice::MinExtreme,
        StrategyChoice::MaxExtreme,
        StrategyChoice::NearZero,
        StrategyChoice::UniformRandom,
    ];
}

/// Pick from `(item, weight)` pairs proportionally to weight.
///
/// With equal weights this is a single uniform draw over the items. Not built
/// on `prop_oneof!`: `Union::new_weighted` panics on a zero weight, and
/// [`ExtremeConfig::only_strategy`] works by zeroing the other weights.
///
/// Callers pass tables from a validated [`ExtremeConfig`], so `total > 0`.
pub(crate) fn pick_weighted<T: Copy, R: Rng + ?Sized>(rng: &mut R, choices: &[(T, u32)]) -> T {
    let total: u64 = choices.iter().map(|(_, w)| u64::from(*w)).sum();
    debug_assert!(total > 0, "weighted draw over all-zero weights");
    let mut roll = rng.random_range(0..total);
    for (item, weight) in choices {
        let weight = u64::from(*weight);
        if roll < weight {
            return *item;
        }
        roll -= weight;
    }
    choices[choices.len() - 1].0
}

/// Argument tuple produced by one selection round.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<A> {
    /// Generated arguments, one per parameter.
    pub values: A,
    /// Slots that could not be filled; they keep their default value.
    pub diagnostics: Vec<Diagnostic>,
}

/// Draws a strategy for each parameter and dispatches to the matching source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrategySelector {
    weights: StrategyWeights,
    table: ExtremeValues,
}

impl StrategySelector {
    /// Build a selector from a validated config.
    pub fn new(config: ExtremeConfig) -> Result<Self, ConfigError> {
        let table = ExtremeValues::from_config(&config)?;
        Ok(Self {
            weights: config.strategy_weights,
            table,
        })
    }

    /// Extreme value table used for dispatch.
    pub fn table(&self) -> &ExtremeValues {
        &self.table
    }

    /// Roll one strategy.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> StrategyChoice {
        pick_weighted(rng, &self.weights.table())
    }

    /// Produce a value of `T` under an already chosen strategy.
    pub fn select<T: Param>(
        &self,
        choice: StrategyChoice,
        runner: &mut TestRunner,
    ) -> Result<T, GenerationError> {
        match choice {
            StrategyChoice::MinExtreme => self.table.minimum_for(runner),
            StrategyChoice::MaxExtreme => self.table.maximum_for(runner),
            StrategyChoice::NearZero => self.table.near_zero_for(runner),
            StrategyChoice::UniformRandom => fallback::uniform(runner),
        }
    }

    /// Roll a strategy for the slot at `position` and overwrite it.
    ///
    /// On failure the slot keeps its previous value, a warning is logged and
    /// a diagnostic is appended.
    pub fn fill_slot<T: Param>(
        &self,
        slot: &mut T,
        position: usize,
        runner: &mut TestRunner,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let choice = self.draw(runner.rng());
        trace!(position, strategy = ?choice, "selected strategy");
        match self.select::<T>(choice, runner) {
            Ok(value) => *slot = value,
            Err(error) => {
                warn!(
                    position,
                    strategy = ?choice,
                    type_name = std::any::type_name::<T>(),
                    "{error}"
                );
                diagnostics.push(Diagnostic {
                    position,
                    type_name: std::any::type_name::<T>().to_string(),
                    strategy: choice,
                    error,
                });
            }
        }
    }

    /// Fill every slot of `args` in parameter order.
    pub fn fill<A: Arguments>(&self, args: &mut A, runner: &mut TestRunner) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        args.fill_with(self, runner, &mut diagnostics);
        diagnostics
    }

    /// Build a fresh argument tuple, starting from default slots.
    pub fn select_values<A: Arguments + Default>(&self, runner: &mut TestRunner) -> Selection<A> {
        let mut values = A::default();
        let diagnostics = self.fill(&mut values, runner);
        Selection {
            values,
            diagnostics,
        }
    }
}
