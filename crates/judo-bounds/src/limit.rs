//! Inputs accepted for the `low` and `high` edges of a [`Bounds`](crate::Bounds).

use judo_core::{DType, Shape};
use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn};

/// A bare number, remembering whether it was written as an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    /// An integer literal.
    Int(i64),
    /// A floating-point literal.
    Float(f64),
}

impl Scalar {
    /// The value as `f64`.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// `true` if this is [`Scalar::Int`].
    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

/// One edge of a bounds interval, before materialization.
///
/// Scalars carry no shape and are broadcast to the resolved shape.
/// Sequences and arrays carry their own shape and element type.
#[derive(Clone, Debug, PartialEq)]
pub enum Limit {
    /// A single value applied to every coordinate.
    Scalar(Scalar),
    /// A flat sequence of per-coordinate values.
    Values(Vec<Scalar>),
    /// An array with an explicit element type.
    Array {
        /// The limit values.
        values: ArrayD<f64>,
        /// Element type of `values`.
        dtype: DType,
    },
}

impl Limit {
    /// Wrap an `f64` array with an explicit element type.
    pub fn array<S, D>(values: &ArrayBase<S, D>, dtype: DType) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::Array {
            values: values.to_owned().into_dyn(),
            dtype,
        }
    }

    /// The shape this limit carries, if any.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Self::Scalar(_) => None,
            Self::Values(v) => Some(Shape::from_slice(&[v.len()])),
            Self::Array { values, .. } => Some(Shape::from_slice(values.shape())),
        }
    }

    /// Turn this limit into an array plus its element type.
    ///
    /// A scalar fills `shape` and becomes `Float64`. A sequence becomes a
    /// 1-D array, `Int64` when every element is an integer.
    pub(crate) fn materialize(self, shape: &Shape) -> (ArrayD<f64>, DType) {
        match self {
            Self::Scalar(s) => (
                ArrayD::from_elem(IxDyn(shape.as_slice()), 1.0) * s.value(),
                DType::Float64,
            ),
            Self::Values(v) => {
                let dtype = if v.iter().all(|s| s.is_int()) && !v.is_empty() {
                    DType::Int64
                } else {
                    DType::Float64
                };
                let values: Vec<f64> = v.into_iter().map(Scalar::value).collect();
                (Array::from_vec(values).into_dyn(), dtype)
            }
            Self::Array { values, dtype } => (values, dtype),
        }
    }

    /// Turn this limit into an array of its own shape, without
    /// broadcasting. A scalar becomes a rank-0 array.
    pub(crate) fn into_row(self) -> ArrayD<f64> {
        match self {
            Self::Scalar(s) => ArrayD::from_elem(IxDyn(&[]), s.value()),
            Self::Values(v) => Array::from_iter(v.into_iter().map(Scalar::value)).into_dyn(),
            Self::Array { values, .. } => values,
        }
    }
}

impl From<Scalar> for Limit {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

macro_rules! scalar_limit {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Limit {
                fn from(v: $t) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_limit!(i64, i32, f64, f32);

impl From<Vec<Scalar>> for Limit {
    fn from(v: Vec<Scalar>) -> Self {
        Self::Values(v)
    }
}

macro_rules! values_limit {
    ($($t:ty),*) => {
        $(
            impl From<Vec<$t>> for Limit {
                fn from(v: Vec<$t>) -> Self {
                    Self::Values(v.into_iter().map(Scalar::from).collect())
                }
            }

            impl From<&[$t]> for Limit {
                fn from(v: &[$t]) -> Self {
                    Self::Values(v.iter().copied().map(Scalar::from).collect())
                }
            }
        )*
    };
}

values_limit!(i64, i32, f64);

impl<D: Dimension> From<Array<f64, D>> for Limit {
    fn from(values: Array<f64, D>) -> Self {
        Self::Array {
            values: values.into_dyn(),
            dtype: DType::Float64,
        }
    }
}

impl<S, D> From<&ArrayBase<S, D>> for Limit
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn from(values: &ArrayBase<S, D>) -> Self {
        Self::array(values, DType::Float64)
    }
}

impl<D: Dimension> From<Array<f32, D>> for Limit {
    fn from(values: Array<f32, D>) -> Self {
        Self::Array {
            values: values.mapv(f64::from).into_dyn(),
            dtype: DType::Float32,
        }
    }
}

impl<D: Dimension> From<Array<i64, D>> for Limit {
    fn from(values: Array<i64, D>) -> Self {
        Self::Array {
            values: values.mapv(|v| v as f64).into_dyn(),
            dtype: DType::Int64,
        }
    }
}

impl<D: Dimension> From<Array<i32, D>> for Limit {
    fn from(values: Array<i32, D>) -> Self {
        Self::Array {
            values: values.mapv(f64::from).into_dyn(),
            dtype: DType::Int32,
        }
    }
}
