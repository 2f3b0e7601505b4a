//! Logical element types and storage casting.

use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use std::fmt;

/// The numeric type a value is logically stored as.
///
/// Storage is always `f64`; casting to a `DType` applies the value
/// conversion that storing in that type would perform.
///
/// # Examples
///
/// ```
/// use judo_core::DType;
///
/// assert_eq!(DType::Int64.cast(-2.7), -2.0);
/// assert_eq!(DType::Float64.cast(-2.7), -2.7);
/// assert_eq!(DType::Int32.cast(f64::NAN), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit IEEE float.
    Float32,
    /// 64-bit IEEE float.
    Float64,
}

impl DType {
    /// The default float type operations cast their inputs to.
    pub const FLOAT: DType = DType::Float64;

    /// The default integer type.
    pub const INT: DType = DType::Int64;

    /// Canonical lowercase name, e.g. `"float64"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// `true` for `Float32` and `Float64`.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// `true` for `Int32` and `Int64`.
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int32 | Self::Int64)
    }

    /// Convert a single value as if it were stored in this type.
    ///
    /// Integer casts truncate toward zero and saturate at the type's
    /// range; NaN becomes zero.
    #[inline]
    pub fn cast(self, v: f64) -> f64 {
        match self {
            Self::Int32 => f64::from(v as i32),
            Self::Int64 => (v as i64) as f64,
            Self::Float32 => f64::from(v as f32),
            Self::Float64 => v,
        }
    }

    /// Element-wise [`cast`](Self::cast) into a new dynamic-rank array.
    pub fn cast_array<S, D>(self, x: &ArrayBase<S, D>) -> ArrayD<f64>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        match self {
            Self::Float64 => x.to_owned().into_dyn(),
            _ => x.mapv(|v| self.cast(v)).into_dyn(),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
