//! Typed entry point: an edge-case biased value source for a function under test.

use std::fmt;
use std::marker::PhantomData;

use proptest::strategy::{Just, NewTree, Strategy};
use proptest::test_runner::TestRunner;

use crate::arguments::{Arguments, FunctionUnderTest, ParameterDescriptor};
use crate::config::ExtremeConfig;
use crate::error::{ConfigError, Diagnostic};
use crate::strategy::{Selection, StrategySelector};

/// Value source for the parameter list `A`.
///
/// Usable directly through [`fill`](Self::fill) / [`generate`](Self::generate),
/// or as a `proptest` [`Strategy`]. Generated tuples are not shrunk.
pub struct ValueGenerator<A> {
    selector: StrategySelector,
    _args: PhantomData<fn() -> A>,
}

/// Value source for the parameters of `function`, with uniform strategy weights.
pub fn values<F, A>(_function: &F) -> ValueGenerator<A>
where
    F: FunctionUnderTest<A>,
    A: Arguments,
{
    ValueGenerator::new(StrategySelector::default())
}

/// Value source for the parameters of `function` using `config`.
pub fn values_with<F, A>(
    _function: &F,
    config: ExtremeConfig,
) -> Result<ValueGenerator<A>, ConfigError>
where
    F: FunctionUnderTest<A>,
    A: Arguments,
{
    Ok(ValueGenerator::new(StrategySelector::new(config)?))
}

impl<A: Arguments> ValueGenerator<A> {
    /// Generator driven by an existing selector.
    pub fn new(selector: StrategySelector) -> Self {
        Self {
            selector,
            _args: PhantomData,
        }
    }

    /// Selector used for every slot.
    pub fn selector(&self) -> &StrategySelector {
        &self.selector
    }

    /// Descriptors of the parameters this generator fills.
    pub fn descriptors(&self) -> Vec<ParameterDescriptor> {
        A::descriptors()
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        A::descriptors().len()
    }

    /// Fill `slots` in place. Failed slots are left untouched and reported.
    pub fn fill(&self, slots: &mut A, runner: &mut TestRunner) -> Vec<Diagnostic> {
        self.selector.fill(slots, runner)
    }

    /// Produce a fresh tuple; failed slots hold `Default::default()`.
    pub fn generate(&self, runner: &mut TestRunner) -> Selection<A>
    where
        A: Default,
    {
        self.selector.select_values(runner)
    }
}

impl<A> Clone for ValueGenerator<A> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector,
            _args: PhantomData,
        }
    }
}

impl<A> fmt::Debug for ValueGenerator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueGenerator")
            .field("args", &std::any::type_name::<A>())
            .field("selector", &self.selector)
            .finish()
    }
}

impl<A> Strategy for ValueGenerator<A>
where
    A: Arguments + Default + Clone + fmt::Debug,
{
    type Tree = Just<A>;
    type Value = A;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        Ok(Just(self.generate(runner).values))
    }
}
