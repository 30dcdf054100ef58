//! Argument tuples and the functions that consume them.

use std::borrow::Cow;

use proptest::test_runner::TestRunner;
use serde::Serialize;

use crate::error::Diagnostic;
use crate::kind::ScalarKind;
use crate::param::Param;
use crate::strategy::StrategySelector;

/// Type information the selector needs about one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    /// Rust type name of the parameter.
    pub type_name: Cow<'static, str>,
    /// Scalar kind, `None` for composites served by the fallback.
    pub kind: Option<ScalarKind>,
}

impl ParameterDescriptor {
    /// Descriptor of `T`.
    pub fn of<T: Param>() -> Self {
        Self {
            type_name: Cow::Borrowed(std::any::type_name::<T>()),
            kind: T::KIND,
        }
    }

    /// True when the extreme value table has dedicated values for this parameter.
    pub fn is_scalar(&self) -> bool {
        self.kind.is_some()
    }
}

/// An ordered tuple of [`Param`] values, one per parameter.
pub trait Arguments: Sized {
    /// Descriptors in parameter order.
    fn descriptors() -> Vec<ParameterDescriptor>;

    /// Overwrite each slot with a freshly selected value.
    fn fill_with(
        &mut self,
        selector: &StrategySelector,
        runner: &mut TestRunner,
        diagnostics: &mut Vec<Diagnostic>,
    );
}

/// A callable whose parameter list is `Args`.
///
/// Implemented for every `Fn` of up to eight [`Param`] arguments, so passing
/// something that is not callable is a compile error.
pub trait FunctionUnderTest<Args: Arguments> {
    /// Return type of the function.
    type Output;

    /// Call the function with a generated tuple.
    fn apply(&self, args: Args) -> Self::Output;
}

impl Arguments for () {
    fn descriptors() -> Vec<ParameterDescriptor> {
        Vec::new()
    }

    fn fill_with(
        &mut self,
        _selector: &StrategySelector,
        _runner: &mut TestRunner,
        _diagnostics: &mut Vec<Diagnostic>,
    ) {
    }
}

impl<Func, Ret> FunctionUnderTest<()> for Func
where
    Func: Fn() -> Ret,
{
    type Output = Ret;

    fn apply(&self, _args: ()) -> Ret {
        (self)()
    }
}

macro_rules! impl_arguments {
    ($($idx:tt $ty:ident),+) => {
        impl<$($ty: Param),+> Arguments for ($($ty,)+) {
            fn descriptors() -> Vec<ParameterDescriptor> {
                vec![$(ParameterDescriptor::of::<$ty>()),+]
            }

            fn fill_with(
                &mut self,
                selector: &StrategySelector,
                runner: &mut TestRunner,
                diagnostics: &mut Vec<Diagnostic>,
            ) {
                $(selector.fill_slot(&mut self.$idx, $idx, runner, diagnostics);)+
            }
        }

        impl<Func, Ret, $($ty: Param),+> FunctionUnderTest<($($ty,)+)> for Func
        where
            Func: Fn($($ty),+) -> Ret,
        {
            type Output = Ret;

            fn apply(&self, args: ($($ty,)+)) -> Ret {
                (self)($(args.$idx),+)
            }
        }
    };
}

impl_arguments!(0 A);
impl_arguments!(0 A, 1 B);
impl_arguments!(0 A, 1 B, 2 C);
impl_arguments!(0 A, 1 B, 2 C, 3 D);
impl_arguments!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_arguments!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_arguments!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_arguments!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
