//! Error and diagnostic types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::StrategyChoice;

/// Per-parameter generation failure. Never fatal to the tuple being built.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum GenerationError {
    /// Neither the extreme value table nor the uniform fallback produced a value.
    #[error("error creating value for type {type_name}: {reason}")]
    UnsupportedType {
        /// Offending parameter type.
        type_name: String,
        /// Fallback or conversion failure detail.
        reason: String,
    },
    /// Value source requested for something without a parameter list.
    #[error("{type_name} is not callable; no value source applies")]
    NotCallable {
        /// Description of the rejected target.
        type_name: String,
    },
}

impl GenerationError {
    pub(crate) fn unsupported(type_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Invalid [`ExtremeConfig`](crate::ExtremeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every strategy weight is zero.
    #[error("at least one strategy weight must be non-zero")]
    NoStrategyEnabled,
    /// Every near-zero variant weight is zero.
    #[error("at least one near-zero variant weight must be non-zero")]
    NoNearZeroVariantEnabled,
    /// Malformed JSON config.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A failure recorded for one argument slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Zero-based parameter position.
    pub position: usize,
    /// Type of the parameter at `position`.
    pub type_name: String,
    /// Strategy that was rolled for the slot.
    pub strategy: StrategyChoice,
    /// What went wrong.
    pub error: GenerationError,
}
