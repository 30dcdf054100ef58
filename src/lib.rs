//! # extreme-values
//!
//! `extreme-values` biases property-based test inputs toward edge cases. Every
//! parameter of a function under test independently receives its type's
//! minimum, its maximum, a near-zero value, or a uniformly random value:
//! - `table`: the extreme value table per scalar kind
//! - `strategy`: per-parameter strategy selection
//! - `generator`: typed value sources, usable as `proptest` strategies
//! - `dynamic`: value sources for runtime-described signatures (feature `dynamic`)
//! - `harness`: a `check` adapter over proptest's `TestRunner`
//!
//! Composite parameter types get no special treatment; they are generated by
//! their `proptest` `Arbitrary` strategy.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod arguments;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod harness;
pub mod kind;
pub mod param;
pub mod prelude;
pub mod strategy;
pub mod table;

#[cfg(feature = "dynamic")]
#[cfg_attr(docsrs, doc(cfg(feature = "dynamic")))]
pub mod dynamic;

pub use arguments::{Arguments, FunctionUnderTest, ParameterDescriptor};
pub use config::{ComplexMinimum, ExtremeConfig, NearZeroWeights, StrategyWeights};
pub use error::{ConfigError, Diagnostic, GenerationError};
pub use generator::{ValueGenerator, values, values_with};
pub use kind::{ScalarKind, ScalarValue};
pub use param::{Param, UintPtr};
pub use strategy::{Selection, StrategyChoice, StrategySelector};
pub use table::{ExtremeValues, NearZeroVariant};

/// Re-export `proptest` for convenience.
pub use proptest;
/// Re-export `num_complex`, whose `Complex` type backs the complex kinds.
pub use num_complex;
