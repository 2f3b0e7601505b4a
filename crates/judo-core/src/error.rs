//! Error types for array primitives.

use crate::shape::Shape;
use std::fmt;

/// Two array shapes could not be co-broadcast.
///
/// Shapes are compared right-aligned; each pair of extents must be equal
/// or one of them must be `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastError {
    /// Shape of the left operand.
    pub left: Shape,
    /// Shape of the right operand.
    pub right: Shape,
}

impl fmt::Display for BroadcastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shapes {:?} and {:?} cannot be broadcast together",
            self.left.as_slice(),
            self.right.as_slice()
        )
    }
}

impl std::error::Error for BroadcastError {}
