//! Extreme value table: minimum, maximum, and near-zero values per scalar kind.

use num_complex::Complex;
use proptest::prelude::Rng;
use proptest::test_runner::TestRunner;
use serde::{Deserialize, Serialize};

use crate::config::{ComplexMinimum, ExtremeConfig, NearZeroWeights};
use crate::error::{ConfigError, GenerationError};
use crate::fallback;
use crate::kind::{ScalarKind, ScalarValue};
use crate::param::Param;
use crate::strategy::pick_weighted;

/// Smallest positive `f32`, a subnormal.
pub const SMALLEST_NONZERO_F32: f32 = f32::from_bits(1);
/// Smallest positive `f64`, a subnormal.
pub const SMALLEST_NONZERO_F64: f64 = f64::from_bits(1);

/// Flavor of near-zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearZeroVariant {
    /// Negative value closest to zero.
    JustBelowZero,
    /// Positive value closest to zero.
    JustAboveZero,
    /// Zero itself.
    ExactZero,
}

impl NearZeroVariant {
    /// Every variant, in draw order.
    pub const ALL: [NearZeroVariant; 3] = [
        NearZeroVariant::JustBelowZero,
        NearZeroVariant::JustAboveZero,
        NearZeroVariant::ExactZero,
    ];
}

/// Stateless lookup of boundary values for each [`ScalarKind`].
///
/// Randomness is only consumed by the near-zero operations, and always comes
/// from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtremeValues {
    near_zero_weights: NearZeroWeights,
    complex_minimum: ComplexMinimum,
}

impl ExtremeValues {
    /// Table using the config's near-zero weights and complex minimum policy.
    ///
    /// Fails when `config` does not pass [`ExtremeConfig::validate`].
    pub fn from_config(config: &ExtremeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            near_zero_weights: config.near_zero_weights,
            complex_minimum: config.complex_minimum,
        })
    }

    /// Minimum value of `kind`.
    ///
    /// Unsigned kinds yield 1 rather than 0: zero belongs to the near-zero
    /// strategy.
    pub fn minimum(&self, kind: ScalarKind) -> ScalarValue {
        match kind {
            ScalarKind::Bool => ScalarValue::Bool(false),
            ScalarKind::F32 => ScalarValue::F32(f32::MIN),
            ScalarKind::F64 => ScalarValue::F64(f64::MIN),
            ScalarKind::ComplexF32 => ScalarValue::ComplexF32(Complex::new(f32::MIN, f32::MIN)),
            ScalarKind::ComplexF64 => ScalarValue::ComplexF64(match self.complex_minimum {
                ComplexMinimum::Negative => Complex::new(f64::MIN, f64::MIN),
                ComplexMinimum::LegacyPositive => Complex::new(f64::MAX, f64::MAX),
            }),
            ScalarKind::I8 => ScalarValue::I8(i8::MIN),
            ScalarKind::I16 => ScalarValue::I16(i16::MIN),
            ScalarKind::I32 => ScalarValue::I32(i32::MIN),
            ScalarKind::I64 => ScalarValue::I64(i64::MIN),
            ScalarKind::Isize => ScalarValue::Isize(isize::MIN),
            ScalarKind::U8 => ScalarValue::U8(1),
            ScalarKind::U16 => ScalarValue::U16(1),
            ScalarKind::U32 => ScalarValue::U32(1),
            ScalarKind::U64 => ScalarValue::U64(1),
            ScalarKind::Usize => ScalarValue::Usize(1),
            ScalarKind::UintPtr => ScalarValue::UintPtr(1),
        }
    }

    /// Maximum value of `kind`.
    pub fn maximum(&self, kind: ScalarKind) -> ScalarValue {
        match kind {
            ScalarKind::Bool => ScalarValue::Bool(true),
            ScalarKind::F32 => ScalarValue::F32(f32::MAX),
            ScalarKind::F64 => ScalarValue::F64(f64::MAX),
            ScalarKind::ComplexF32 => ScalarValue::ComplexF32(Complex::new(f32::MAX, f32::MAX)),
            ScalarKind::ComplexF64 => ScalarValue::ComplexF64(Complex::new(f64::MAX, f64::MAX)),
            ScalarKind::I8 => ScalarValue::I8(i8::MAX),
            ScalarKind::I16 => ScalarValue::I16(i16::MAX),
            ScalarKind::I32 => ScalarValue::I32(i32::MAX),
            ScalarKind::I64 => ScalarValue::I64(i64::MAX),
            ScalarKind::Isize => ScalarValue::Isize(isize::MAX),
            ScalarKind::U8 => ScalarValue::U8(u8::MAX),
            ScalarKind::U16 => ScalarValue::U16(u16::MAX),
            ScalarKind::U32 => ScalarValue::U32(u32::MAX),
            ScalarKind::U64 => ScalarValue::U64(u64::MAX),
            ScalarKind::Usize => ScalarValue::Usize(usize::MAX),
            ScalarKind::UintPtr => ScalarValue::UintPtr(usize::MAX),
        }
    }

    /// Draw a near-zero variant, then compute it for `kind`.
    pub fn near_zero<R: Rng + ?Sized>(&self, kind: ScalarKind, rng: &mut R) -> ScalarValue {
        let variant = self.draw_near_zero_variant(rng);
        self.near_zero_variant(kind, variant)
    }

    /// Draw a near-zero variant using the configured weights.
    pub fn draw_near_zero_variant<R: Rng + ?Sized>(&self, rng: &mut R) -> NearZeroVariant {
        pick_weighted(rng, &self.near_zero_weights.table())
    }

    /// Near-zero value of `kind` for a fixed variant.
    ///
    /// Integers and booleans have no value between zero and their neighbours,
    /// so every variant yields zero (`false`).
    pub fn near_zero_variant(&self, kind: ScalarKind, variant: NearZeroVariant) -> ScalarValue {
        let f32_value = match variant {
            NearZeroVariant::JustBelowZero => -SMALLEST_NONZERO_F32,
            NearZeroVariant::JustAboveZero => SMALLEST_NONZERO_F32,
            NearZeroVariant::ExactZero => 0.0,
        };
        let f64_value = match variant {
            NearZeroVariant::JustBelowZero => -SMALLEST_NONZERO_F64,
            NearZeroVariant::JustAboveZero => SMALLEST_NONZERO_F64,
            NearZeroVariant::ExactZero => 0.0,
        };
        match kind {
            ScalarKind::Bool => ScalarValue::Bool(false),
            ScalarKind::F32 => ScalarValue::F32(f32_value),
            ScalarKind::F64 => ScalarValue::F64(f64_value),
            ScalarKind::ComplexF32 => ScalarValue::ComplexF32(Complex::new(f32_value, f32_value)),
            ScalarKind::ComplexF64 => ScalarValue::ComplexF64(Complex::new(f64_value, f64_value)),
            ScalarKind::I8 => ScalarValue::I8(0),
            ScalarKind::I16 => ScalarValue::I16(0),
            ScalarKind::I32 => ScalarValue::I32(0),
            ScalarKind::I64 => ScalarValue::I64(0),
            ScalarKind::Isize => ScalarValue::Isize(0),
            ScalarKind::U8 => ScalarValue::U8(0),
            ScalarKind::U16 => ScalarValue::U16(0),
            ScalarKind::U32 => ScalarValue::U32(0),
            ScalarKind::U64 => ScalarValue::U64(0),
            ScalarKind::Usize => ScalarValue::Usize(0),
            ScalarKind::UintPtr => ScalarValue::UintPtr(0),
        }
    }

    /// Minimum of `T`, or a uniform value when `T` is not a scalar.
    pub fn minimum_for<T: Param>(&self, runner: &mut TestRunner) -> Result<T, GenerationError> {
        resolve(runner, |kind, _| self.minimum(kind))
    }

    /// Maximum of `T`, or a uniform value when `T` is not a scalar.
    pub fn maximum_for<T: Param>(&self, runner: &mut TestRunner) -> Result<T, GenerationError> {
        resolve(runner, |kind, _| self.maximum(kind))
    }

    /// Near-zero value of `T`, or a uniform value when `T` is not a scalar.
    ///
    /// The variant is drawn only for scalar kinds.
    pub fn near_zero_for<T: Param>(&self, runner: &mut TestRunner) -> Result<T, GenerationError> {
        resolve(runner, |kind, runner| self.near_zero(kind, runner.rng()))
    }
}

fn resolve<T, F>(runner: &mut TestRunner, compute: F) -> Result<T, GenerationError>
where
    T: Param,
    F: FnOnce(ScalarKind, &mut TestRunner) -> ScalarValue,
{
    let Some(kind) = T::KIND else {
        return fallback::uniform::<T>(runner);
    };
    let value = compute(kind, runner);
    T::from_scalar(value).ok_or_else(|| {
        GenerationError::unsupported(
            std::any::type_name::<T>(),
            format!("declared kind {kind} but rejected {value:?}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parts(value: ScalarValue) -> Option<(f64, f64)> {
        match value {
            ScalarValue::Bool(_) => None,
            ScalarValue::F32(v) => Some((v as f64, 0.0)),
            ScalarValue::F64(v) => Some((v, 0.0)),
            ScalarValue::ComplexF32(c) => Some((c.re as f64, c.im as f64)),
            ScalarValue::ComplexF64(c) => Some((c.re, c.im)),
            ScalarValue::I8(v) => Some((v as f64, 0.0)),
            ScalarValue::I16(v) => Some((v as f64, 0.0)),
            ScalarValue::I32(v) => Some((v as f64, 0.0)),
            ScalarValue::I64(v) => Some((v as f64, 0.0)),
            ScalarValue::Isize(v) => Some((v as f64, 0.0)),
            ScalarValue::U8(v) => Some((v as f64, 0.0)),
            ScalarValue::U16(v) => Some((v as f64, 0.0)),
            ScalarValue::U32(v) => Some((v as f64, 0.0)),
            ScalarValue::U64(v) => Some((v as f64, 0.0)),
            ScalarValue::Usize(v) => Some((v as f64, 0.0)),
            ScalarValue::UintPtr(v) => Some((v as f64, 0.0)),
        }
    }

    #[test]
    fn every_kind_is_covered_by_every_operation() {
        let table = ExtremeValues::default();
        for kind in ScalarKind::ALL {
            assert_eq!(table.minimum(kind).kind(), kind);
            assert_eq!(table.maximum(kind).kind(), kind);
            for variant in NearZeroVariant::ALL {
                assert_eq!(table.near_zero_variant(kind, variant).kind(), kind);
            }
        }
    }

    #[test]
    fn minimum_never_exceeds_maximum() {
        let table = ExtremeValues::default();
        for kind in ScalarKind::ALL {
            let (Some((min_re, min_im)), Some((max_re, max_im))) =
                (parts(table.minimum(kind)), parts(table.maximum(kind)))
            else {
                continue;
            };
            assert!(min_re <= max_re && min_im <= max_im, "{kind}");
            if kind.is_float() || kind.is_complex() {
                assert!(min_re < max_re, "{kind} minimum must be strictly below maximum");
            }
            if kind.is_float() || kind.is_complex() || kind.is_signed_integer() {
                assert!(min_re <= 0.0 && max_re >= 0.0, "{kind}");
            }
            if kind.is_unsigned_integer() {
                assert_eq!(min_re, 1.0, "{kind} minimum is one");
            }
        }
    }

    #[test]
    fn boolean_extremes() {
        let table = ExtremeValues::default();
        assert_eq!(table.minimum(ScalarKind::Bool), ScalarValue::Bool(false));
        assert_eq!(table.maximum(ScalarKind::Bool), ScalarValue::Bool(true));
        for variant in NearZeroVariant::ALL {
            assert_eq!(
                table.near_zero_variant(ScalarKind::Bool, variant),
                ScalarValue::Bool(false)
            );
        }
    }

    #[test]
    fn native_width_integers_use_platform_extremes() {
        let table = ExtremeValues::default();
        assert_eq!(table.minimum(ScalarKind::Isize), ScalarValue::Isize(isize::MIN));
        assert_eq!(table.maximum(ScalarKind::Usize), ScalarValue::Usize(usize::MAX));
        assert_eq!(table.maximum(ScalarKind::UintPtr), ScalarValue::UintPtr(usize::MAX));
        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(isize::MIN as i64, i64::MIN);
            assert_eq!(usize::MAX as u64, u64::MAX);
        }
    }

    #[test]
    fn near_zero_floats_are_subnormal_neighbours_of_zero() {
        let table = ExtremeValues::default();
        let bound32 = SMALLEST_NONZERO_F32 * 100.0;
        let bound64 = SMALLEST_NONZERO_F64 * 100.0;

        let ScalarValue::F32(below) =
            table.near_zero_variant(ScalarKind::F32, NearZeroVariant::JustBelowZero)
        else {
            panic!("expected f32");
        };
        let ScalarValue::F32(above) =
            table.near_zero_variant(ScalarKind::F32, NearZeroVariant::JustAboveZero)
        else {
            panic!("expected f32");
        };
        assert!(below < 0.0 && below.abs() < bound32);
        assert!(above > 0.0 && above.abs() < bound32);
        assert_eq!(below, -above);

        let ScalarValue::F64(below) =
            table.near_zero_variant(ScalarKind::F64, NearZeroVariant::JustBelowZero)
        else {
            panic!("expected f64");
        };
        assert!(below < 0.0 && below.abs() < bound64);
        assert_eq!(
            table.near_zero_variant(ScalarKind::F64, NearZeroVariant::ExactZero),
            ScalarValue::F64(0.0)
        );
        assert_eq!(
            table.near_zero_variant(ScalarKind::ComplexF64, NearZeroVariant::JustAboveZero),
            ScalarValue::ComplexF64(Complex::new(SMALLEST_NONZERO_F64, SMALLEST_NONZERO_F64))
        );
    }

    #[test]
    fn legacy_complex_minimum_is_positive() {
        let config = ExtremeConfig::default().with_complex_minimum(ComplexMinimum::LegacyPositive);
        let table = ExtremeValues::from_config(&config).expect("valid config");
        assert_eq!(
            table.minimum(ScalarKind::ComplexF64),
            ScalarValue::ComplexF64(Complex::new(f64::MAX, f64::MAX))
        );
        assert_eq!(
            table.minimum(ScalarKind::ComplexF32),
            ScalarValue::ComplexF32(Complex::new(f32::MIN, f32::MIN))
        );
    }

    #[test]
    fn forced_variant_is_always_drawn() {
        let config = ExtremeConfig::default().only_near_zero(NearZeroVariant::JustAboveZero);
        let table = ExtremeValues::from_config(&config).expect("valid config");
        let mut runner = TestRunner::deterministic();
        for _ in 0..32 {
            assert_eq!(
                table.draw_near_zero_variant(runner.rng()),
                NearZeroVariant::JustAboveZero
            );
        }
    }

    #[test]
    fn all_zero_near_zero_weights_are_rejected() {
        let config = ExtremeConfig::default().with_near_zero_weights(NearZeroWeights {
            just_below_zero: 0,
            just_above_zero: 0,
            exact_zero: 0,
        });
        assert!(matches!(
            ExtremeValues::from_config(&config),
            Err(ConfigError::NoNearZeroVariantEnabled)
        ));
    }

    #[test]
    fn typed_operations_succeed_for_scalars() {
        let table = ExtremeValues::default();
        let mut runner = TestRunner::deterministic();
        assert_eq!(table.minimum_for::<i32>(&mut runner), Ok(i32::MIN));
        assert_eq!(table.maximum_for::<u8>(&mut runner), Ok(u8::MAX));
        assert_eq!(table.near_zero_for::<u64>(&mut runner), Ok(0));
        let value = table
            .near_zero_for::<f32>(&mut runner)
            .expect("f32 is a scalar");
        assert!(value.abs() <= SMALLEST_NONZERO_F32);
    }

    proptest! {
        #[test]
        fn near_zero_draws_stay_within_one_subnormal(seed in any::<[u8; 32]>()) {
            let mut rng = proptest::test_runner::TestRng::from_seed(
                proptest::test_runner::RngAlgorithm::ChaCha,
                &seed,
            );
            let table = ExtremeValues::default();
            for kind in ScalarKind::ALL {
                let value = table.near_zero(kind, &mut rng);
                prop_assert_eq!(value.kind(), kind);
                if let Some((re, im)) = parts(value) {
                    prop_assert!(re.abs() <= SMALLEST_NONZERO_F32 as f64);
                    prop_assert!(im.abs() <= SMALLEST_NONZERO_F32 as f64);
                }
            }
        }
    }
}
