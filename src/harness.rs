//! Thin adapter running a boolean post-condition under proptest's `TestRunner`.
//!
//! ```rust,ignore
//! use extreme_values::harness::check;
//!
//! fn abs_is_non_negative(x: i32) -> bool {
//!     x.wrapping_abs() >= 0
//! }
//!
//! assert!(check(&abs_is_non_negative).is_err()); // i32::MIN is found
//! ```

use std::fmt::Debug;

use proptest::prelude::*;
use proptest::test_runner::{Config, TestError, TestRunner};

use crate::arguments::{Arguments, FunctionUnderTest};
use crate::config::ExtremeConfig;
use crate::generator::values_with;

/// Failure of a [`check`] run.
pub type CheckResult<A> = Result<(), TestError<A>>;

/// Default runner config for [`check`]: proptest defaults without failure persistence.
pub fn runner_config() -> Config {
    Config {
        failure_persistence: None,
        ..Config::default()
    }
}

/// Run `function` against extreme-biased arguments until it returns `false`.
pub fn check<F, A>(function: &F) -> CheckResult<A>
where
    F: FunctionUnderTest<A, Output = bool>,
    A: Arguments + Default + Clone + Debug,
{
    check_with(function, runner_config(), ExtremeConfig::default())
}

/// [`check`] with explicit runner and selection configs.
///
/// An invalid selection config is reported as an aborted run.
pub fn check_with<F, A>(function: &F, runner: Config, config: ExtremeConfig) -> CheckResult<A>
where
    F: FunctionUnderTest<A, Output = bool>,
    A: Arguments + Default + Clone + Debug,
{
    let generator = values_with(function, config)
        .map_err(|error| TestError::Abort(error.to_string().into()))?;
    TestRunner::new(runner).run(&generator, |args| {
        let shown = format!("{args:?}");
        prop_assert!(function.apply(args), "post-condition failed for {}", shown);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyChoice;

    fn abs_is_non_negative(x: i32) -> bool {
        x.wrapping_abs() >= 0
    }

    fn checked_sum_fits(a: u16, b: u16) -> bool {
        u32::from(a) + u32::from(b) <= 2 * u32::from(u16::MAX)
    }

    #[test]
    fn finds_the_minimum_counterexample() {
        match check(&abs_is_non_negative) {
            Err(TestError::Fail(_, (value,))) => assert_eq!(value, i32::MIN),
            other => panic!("expected failure at i32::MIN, got {other:?}"),
        }
    }

    #[test]
    fn passes_when_property_holds_at_the_edges() {
        assert!(check(&checked_sum_fits).is_ok());
    }

    #[test]
    fn invalid_selection_config_aborts() {
        let config = ExtremeConfig::default().with_strategy_weights(crate::StrategyWeights {
            min_extreme: 0,
            max_extreme: 0,
            near_zero: 0,
            uniform_random: 0,
        });
        assert!(matches!(
            check_with(&checked_sum_fits, runner_config(), config),
            Err(TestError::Abort(_))
        ));
    }

    #[test]
    fn uniform_only_still_runs() {
        let config = ExtremeConfig::default().only_strategy(StrategyChoice::UniformRandom);
        let runner = Config {
            cases: 16,
            ..runner_config()
        };
        assert!(check_with(&checked_sum_fits, runner, config).is_ok());
    }
}
