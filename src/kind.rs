//! Scalar kinds recognized by the extreme value table, and the values they carry.

use std::fmt;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Closed set of primitive kinds with dedicated extreme values.
///
/// Anything outside this set (structs, strings, collections) is a composite
/// and is always served by the uniform fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// `bool`.
    Bool,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// 64-bit complex: two `f32` components.
    ComplexF32,
    /// 128-bit complex: two `f64` components.
    ComplexF64,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// Native-width signed integer, `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// Native-width unsigned integer, `usize`.
    Usize,
    /// Pointer-sized unsigned integer, [`UintPtr`](crate::UintPtr).
    UintPtr,
}

impl ScalarKind {
    /// Every recognized kind.
    pub const ALL: [ScalarKind; 16] = [
        ScalarKind::Bool,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::ComplexF32,
        ScalarKind::ComplexF64,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::Isize,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::Usize,
        ScalarKind::UintPtr,
    ];

    /// True for `f32`/`f64`.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// True for both complex kinds.
    pub fn is_complex(self) -> bool {
        matches!(self, Self::ComplexF32 | Self::ComplexF64)
    }

    /// True for signed integer kinds, native width included.
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// True for unsigned integer kinds, native and pointer width included.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize | Self::UintPtr
        )
    }

    /// Rust spelling of the kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::ComplexF32 => "Complex<f32>",
            Self::ComplexF64 => "Complex<f64>",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::UintPtr => "UintPtr",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A concrete value of one [`ScalarKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScalarValue {
    /// `bool` value.
    Bool(bool),
    /// `f32` value.
    F32(f32),
    /// `f64` value.
    F64(f64),
    /// 64-bit complex value.
    ComplexF32(Complex<f32>),
    /// 128-bit complex value.
    ComplexF64(Complex<f64>),
    /// `i8` value.
    I8(i8),
    /// `i16` value.
    I16(i16),
    /// `i32` value.
    I32(i32),
    /// `i64` value.
    I64(i64),
    /// `isize` value.
    Isize(isize),
    /// `u8` value.
    U8(u8),
    /// `u16` value.
    U16(u16),
    /// `u32` value.
    U32(u32),
    /// `u64` value.
    U64(u64),
    /// `usize` value.
    Usize(usize),
    /// Pointer-sized unsigned value.
    UintPtr(usize),
}

impl ScalarValue {
    /// Kind this value belongs to.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::ComplexF32(_) => ScalarKind::ComplexF32,
            Self::ComplexF64(_) => ScalarKind::ComplexF64,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::Isize(_) => ScalarKind::Isize,
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::Usize(_) => ScalarKind::Usize,
            Self::UintPtr(_) => ScalarKind::UintPtr,
        }
    }
}
