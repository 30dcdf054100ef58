//! Uniform-random fallback backed by proptest's `Arbitrary` strategies.

use proptest::arbitrary::{Arbitrary, any};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{Reason, TestRunner};

use crate::error::GenerationError;
use crate::param::Param;

/// Draw one value from `strategy` using the runner's randomness.
pub fn generate<S: Strategy>(strategy: S, runner: &mut TestRunner) -> Result<S::Value, Reason> {
    strategy.new_tree(runner).map(|tree| tree.current())
}

/// Draw one value from `T`'s `Arbitrary` strategy.
pub fn arbitrary<T: Arbitrary>(runner: &mut TestRunner) -> Result<T, Reason> {
    generate(any::<T>(), runner)
}

/// Uniform value of `T`, with fallback failures mapped to [`GenerationError`].
pub fn uniform<T: Param>(runner: &mut TestRunner) -> Result<T, GenerationError> {
    T::uniform(runner)
        .map_err(|reason| GenerationError::unsupported(std::any::type_name::<T>(), reason))
}
