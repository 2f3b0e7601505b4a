//! Error types for bounds construction and operations.

use judo_core::{BroadcastError, Shape};
use std::fmt;

/// Errors arising from [`Bounds`](crate::Bounds) construction or from
/// element-wise operations against it.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// No explicit shape was given and neither `high` nor `low` carries one.
    ShapeNotInferred,
    /// Operand shapes cannot be co-broadcast.
    Broadcast(BroadcastError),
    /// An array with no rows cannot define bounds from its extremes.
    EmptyArray,
    /// Rows passed to [`Bounds::from_tuples`](crate::Bounds::from_tuples)
    /// do not all have the same shape.
    RaggedRows {
        /// Shape of the first row.
        expected: Shape,
        /// Shape of the first row that differs.
        found: Shape,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeNotInferred => write!(
                f,
                "shape could not be inferred: pass a shape, or give high or low a shape"
            ),
            Self::Broadcast(e) => write!(f, "{e}"),
            Self::EmptyArray => write!(f, "cannot compute bounds of an array with no rows"),
            Self::RaggedRows { expected, found } => write!(
                f,
                "tuple rows differ in shape: expected {:?}, found {:?}",
                expected.as_slice(),
                found.as_slice()
            ),
        }
    }
}

impl std::error::Error for BoundsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Broadcast(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BroadcastError> for BoundsError {
    fn from(e: BroadcastError) -> Self {
        Self::Broadcast(e)
    }
}
