//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used items from this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use extreme_values::prelude::*;
//! ```

// Re-export proptest
pub use proptest::prelude::*;

pub use crate::composite_param;
pub use crate::harness::{check, check_with};
pub use crate::{
    ComplexMinimum, Diagnostic, ExtremeConfig, ExtremeValues, FunctionUnderTest,
    GenerationError, NearZeroVariant, Param, ScalarKind, ScalarValue, StrategyChoice, UintPtr,
    ValueGenerator, values, values_with,
};

#[cfg(feature = "dynamic")]
pub use crate::dynamic::{DynamicGenerator, TypeDescriptor};
