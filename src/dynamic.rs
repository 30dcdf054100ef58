//! Runtime-described signatures.
//!
//! For harnesses that only know a function's shape at runtime. Slots are
//! `Option<ScalarValue>`; composite and function-typed parameters have no
//! runtime fallback and are reported instead of filled.

use num_complex::Complex;
use proptest::test_runner::TestRunner;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Diagnostic, GenerationError};
use crate::kind::{ScalarKind, ScalarValue};
use crate::param::{Param, UintPtr};
use crate::strategy::{StrategyChoice, StrategySelector};

/// Shape of a value as seen by a runtime harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A recognized scalar.
    Scalar {
        /// Its kind.
        kind: ScalarKind,
    },
    /// Any aggregate, named for diagnostics.
    Composite {
        /// Type name.
        name: String,
    },
    /// A callable with the given parameter list.
    Function {
        /// Parameters in order.
        params: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Scalar descriptor.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar { kind }
    }

    /// Composite descriptor.
    pub fn composite(name: impl Into<String>) -> Self {
        Self::Composite { name: name.into() }
    }

    /// Function descriptor.
    pub fn function(params: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::Function {
            params: params.into_iter().collect(),
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Scalar { kind } => kind.to_string(),
            Self::Composite { name } => name.clone(),
            Self::Function { params } => {
                let params: Vec<String> = params.iter().map(Self::name).collect();
                format!("fn({})", params.join(", "))
            }
        }
    }
}

/// Value source for a runtime-described parameter list.
#[derive(Debug, Clone, Default)]
pub struct DynamicGenerator {
    params: Option<Vec<TypeDescriptor>>,
    selector: StrategySelector,
}

/// Value source for `target`, or `NotCallable` when it has no parameter list.
pub fn try_values(target: &TypeDescriptor) -> Result<DynamicGenerator, GenerationError> {
    match target {
        TypeDescriptor::Function { params } => Ok(DynamicGenerator {
            params: Some(params.clone()),
            selector: StrategySelector::default(),
        }),
        other => Err(GenerationError::NotCallable {
            type_name: other.name(),
        }),
    }
}

/// Value source for `target`; inert when `target` is not a function.
///
/// Only scalar parameters are filled. A `Composite` or `Function` parameter
/// has no runtime uniform generator, so its slot is always reported as
/// `UnsupportedType` and left `None`. Struct-valued parameters need the typed
/// [`crate::values`] API, where [`Param::uniform`] supplies them.
pub fn values(target: &TypeDescriptor) -> DynamicGenerator {
    try_values(target).unwrap_or_else(|error| {
        debug!("{error}");
        DynamicGenerator::inert()
    })
}

impl DynamicGenerator {
    /// Generator that fills nothing.
    pub fn inert() -> Self {
        Self::default()
    }

    /// Replace the selector, e.g. one built from a custom config.
    pub fn with_selector(mut self, selector: StrategySelector) -> Self {
        self.selector = selector;
        self
    }

    /// False for the inert generator.
    pub fn is_applicable(&self) -> bool {
        self.params.is_some()
    }

    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.params.as_ref().map_or(0, Vec::len)
    }

    /// Fill `slots` in place, one per declared parameter.
    ///
    /// Slots beyond the declared arity are left alone, as are slots whose
    /// parameter cannot be synthesized.
    pub fn fill(
        &self,
        slots: &mut [Option<ScalarValue>],
        runner: &mut TestRunner,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(params) = &self.params else {
            return diagnostics;
        };
        if slots.len() != params.len() {
            warn!(
                expected = params.len(),
                actual = slots.len(),
                "argument slot count does not match parameter count"
            );
        }
        for (position, (slot, param)) in slots.iter_mut().zip(params).enumerate() {
            let choice = self.selector.draw(runner.rng());
            trace!(position, strategy = ?choice, "selected strategy");
            match self.select(param, choice, runner) {
                Ok(value) => *slot = Some(value),
                Err(error) => {
                    let type_name = param.name();
                    warn!(position, strategy = ?choice, %type_name, "{error}");
                    diagnostics.push(Diagnostic {
                        position,
                        type_name,
                        strategy: choice,
                        error,
                    });
                }
            }
        }
        diagnostics
    }

    /// Fresh slots for every parameter; unfilled slots stay `None`.
    pub fn generate(
        &self,
        runner: &mut TestRunner,
    ) -> (Vec<Option<ScalarValue>>, Vec<Diagnostic>) {
        let mut slots = vec![None; self.arity()];
        let diagnostics = self.fill(&mut slots, runner);
        (slots, diagnostics)
    }

    fn select(
        &self,
        param: &TypeDescriptor,
        choice: StrategyChoice,
        runner: &mut TestRunner,
    ) -> Result<ScalarValue, GenerationError> {
        let TypeDescriptor::Scalar { kind } = param else {
            return Err(GenerationError::unsupported(
                param.name(),
                "no uniform generator for non-scalar runtime types",
            ));
        };
        let table = self.selector.table();
        match choice {
            StrategyChoice::MinExtreme => Ok(table.minimum(*kind)),
            StrategyChoice::MaxExtreme => Ok(table.maximum(*kind)),
            StrategyChoice::NearZero => Ok(table.near_zero(*kind, runner.rng())),
            StrategyChoice::UniformRandom => uniform_scalar(*kind, runner),
        }
    }
}

/// Uniform value of `kind`, drawn through the matching [`Param`] impl.
pub fn uniform_scalar(
    kind: ScalarKind,
    runner: &mut TestRunner,
) -> Result<ScalarValue, GenerationError> {
    fn draw<T: Param>(
        runner: &mut TestRunner,
        wrap: fn(T) -> ScalarValue,
    ) -> Result<ScalarValue, GenerationError> {
        crate::fallback::uniform::<T>(runner).map(wrap)
    }

    match kind {
        ScalarKind::Bool => draw::<bool>(runner, ScalarValue::Bool),
        ScalarKind::F32 => draw::<f32>(runner, ScalarValue::F32),
        ScalarKind::F64 => draw::<f64>(runner, ScalarValue::F64),
        ScalarKind::ComplexF32 => draw::<Complex<f32>>(runner, ScalarValue::ComplexF32),
        ScalarKind::ComplexF64 => draw::<Complex<f64>>(runner, ScalarValue::ComplexF64),
        ScalarKind::I8 => draw::<i8>(runner, ScalarValue::I8),
        ScalarKind::I16 => draw::<i16>(runner, ScalarValue::I16),
        ScalarKind::I32 => draw::<i32>(runner, ScalarValue::I32),
        ScalarKind::I64 => draw::<i64>(runner, ScalarValue::I64),
        ScalarKind::Isize => draw::<isize>(runner, ScalarValue::Isize),
        ScalarKind::U8 => draw::<u8>(runner, ScalarValue::U8),
        ScalarKind::U16 => draw::<u16>(runner, ScalarValue::U16),
        ScalarKind::U32 => draw::<u32>(runner, ScalarValue::U32),
        ScalarKind::U64 => draw::<u64>(runner, ScalarValue::U64),
        ScalarKind::Usize => draw::<usize>(runner, ScalarValue::Usize),
        ScalarKind::UintPtr => draw::<UintPtr>(runner, |p| ScalarValue::UintPtr(p.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtremeConfig;

    fn forced(choice: StrategyChoice) -> StrategySelector {
        StrategySelector::new(ExtremeConfig::default().only_strategy(choice)).expect("valid config")
    }

    #[test]
    fn non_function_targets_yield_inert_generator() {
        let target = TypeDescriptor::scalar(ScalarKind::I32);
        assert_eq!(
            try_values(&target).expect_err("not callable"),
            GenerationError::NotCallable {
                type_name: "i32".into()
            }
        );

        let generator = values(&target);
        assert!(!generator.is_applicable());
        assert_eq!(generator.arity(), 0);

        let mut slots = vec![Some(ScalarValue::I32(5))];
        let mut runner = TestRunner::deterministic();
        assert!(generator.fill(&mut slots, &mut runner).is_empty());
        assert_eq!(slots, vec![Some(ScalarValue::I32(5))]);
    }

    #[test]
    fn scalar_parameters_are_filled_from_the_table() {
        let target = TypeDescriptor::function([
            TypeDescriptor::scalar(ScalarKind::Bool),
            TypeDescriptor::scalar(ScalarKind::U8),
        ]);
        let generator = values(&target).with_selector(forced(StrategyChoice::MaxExtreme));
        let mut runner = TestRunner::deterministic();
        let (slots, diagnostics) = generator.generate(&mut runner);
        assert!(diagnostics.is_empty());
        assert_eq!(
            slots,
            vec![Some(ScalarValue::Bool(true)), Some(ScalarValue::U8(255))]
        );
    }

    #[test]
    fn composite_parameters_are_reported_and_left_untouched() {
        let target = TypeDescriptor::function([
            TypeDescriptor::composite("Receiver<i32>"),
            TypeDescriptor::scalar(ScalarKind::I16),
            TypeDescriptor::function([]),
        ]);
        let generator = values(&target).with_selector(forced(StrategyChoice::MinExtreme));
        let mut runner = TestRunner::deterministic();
        let (slots, diagnostics) = generator.generate(&mut runner);

        assert_eq!(slots, vec![None, Some(ScalarValue::I16(i16::MIN)), None]);
        let positions: Vec<_> = diagnostics.iter().map(|d| d.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(diagnostics[0].type_name, "Receiver<i32>");
        assert_eq!(diagnostics[1].type_name, "fn()");
        assert!(diagnostics[0].error.to_string().contains("Receiver<i32>"));
        assert!(diagnostics[1].error.to_string().contains("fn()"));
    }

    #[test]
    fn uniform_scalars_match_their_kind() {
        let mut runner = TestRunner::deterministic();
        for kind in ScalarKind::ALL {
            let value = uniform_scalar(kind, &mut runner).expect("scalars always generate");
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn descriptors_deserialize_from_json() {
        let target: TypeDescriptor = serde_json::from_str(
            r#"{"type": "function", "params": [{"type": "scalar", "kind": "f64"}, {"type": "composite", "name": "Point"}]}"#,
        )
        .expect("valid descriptor");
        assert_eq!(target.name(), "fn(f64, Point)");
        assert_eq!(values(&target).arity(), 2);
    }
}
