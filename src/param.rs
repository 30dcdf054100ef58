//! Type capability connecting Rust parameter types to scalar kinds.

use std::fmt::Debug;

use num_complex::Complex;
use proptest::prelude::*;
use proptest::test_runner::{Reason, TestRunner};
use serde::{Deserialize, Serialize};

use crate::fallback;
use crate::kind::{ScalarKind, ScalarValue};

/// A type usable as a parameter of a function under test.
///
/// Scalars declare their [`ScalarKind`] and accept table values through
/// [`Param::from_scalar`]. Composite types keep the defaults and are always
/// produced by [`Param::uniform`]; see [`composite_param!`](crate::composite_param).
pub trait Param: Sized + Debug {
    /// Scalar kind of the type, `None` for composites.
    const KIND: Option<ScalarKind> = None;

    /// Convert a table value of [`Self::KIND`] into `Self`.
    fn from_scalar(_value: ScalarValue) -> Option<Self> {
        None
    }

    /// Unbiased value drawn from the runner's randomness.
    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason>;
}

/// Pointer-sized unsigned integer, distinct from native-width `usize`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UintPtr(pub usize);

macro_rules! scalar_param {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Param for $ty {
                const KIND: Option<ScalarKind> = Some(ScalarKind::$kind);

                fn from_scalar(value: ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$kind(v) => Some(v),
                        _ => None,
                    }
                }

                fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
                    fallback::arbitrary(runner)
                }
            }
        )+
    };
}

scalar_param! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl Param for UintPtr {
    const KIND: Option<ScalarKind> = Some(ScalarKind::UintPtr);

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::UintPtr(v) => Some(UintPtr(v)),
            _ => None,
        }
    }

    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
        fallback::generate(any::<usize>().prop_map(UintPtr), runner)
    }
}

impl Param for Complex<f32> {
    const KIND: Option<ScalarKind> = Some(ScalarKind::ComplexF32);

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::ComplexF32(v) => Some(v),
            _ => None,
        }
    }

    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
        fallback::generate(
            (any::<f32>(), any::<f32>()).prop_map(|(re, im)| Complex::new(re, im)),
            runner,
        )
    }
}

impl Param for Complex<f64> {
    const KIND: Option<ScalarKind> = Some(ScalarKind::ComplexF64);

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::ComplexF64(v) => Some(v),
            _ => None,
        }
    }

    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
        fallback::generate(
            (any::<f64>(), any::<f64>()).prop_map(|(re, im)| Complex::new(re, im)),
            runner,
        )
    }
}

impl Param for String {
    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
        fallback::arbitrary(runner)
    }
}

impl<T: Arbitrary + Debug> Param for Vec<T> {
    fn uniform(runner: &mut TestRunner) -> Result<Self, Reason> {
        fallback::arbitrary(runner)
    }
}

/// Implement [`Param`] for composite types that are `proptest` `Arbitrary`.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default)]
/// struct Point { x: i32, y: i32 }
/// // impl Arbitrary for Point { ... }
/// extreme_values::composite_param!(Point);
/// ```
#[macro_export]
macro_rules! composite_param {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Param for $ty {
                fn uniform(
                    runner: &mut $crate::proptest::test_runner::TestRunner,
                ) -> ::std::result::Result<Self, $crate::proptest::test_runner::Reason> {
                    $crate::fallback::arbitrary(runner)
                }
            }
        )+
    };
}
