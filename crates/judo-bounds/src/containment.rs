//! Result of a containment check.

use ndarray::Array1;

/// Whether a point, or each row of a batch of points, lies inside bounds.
///
/// Rank-0 and rank-1 inputs produce [`Containment::Single`]. Inputs of
/// rank two or more produce one flag per row in [`Containment::Rows`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Containment {
    /// Every coordinate of a single point is inside.
    Single(bool),
    /// Per-row flags for a batch of points.
    Rows(Array1<bool>),
}

impl Containment {
    /// `true` for [`Containment::Single`].
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The flag of a single point, or `None` for a batch.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Single(b) => Some(*b),
            Self::Rows(_) => None,
        }
    }

    /// The per-row flags of a batch, or `None` for a single point.
    pub fn rows(&self) -> Option<&Array1<bool>> {
        match self {
            Self::Single(_) => None,
            Self::Rows(rows) => Some(rows),
        }
    }

    /// `true` if every checked point is inside.
    pub fn all(&self) -> bool {
        match self {
            Self::Single(b) => *b,
            Self::Rows(rows) => rows.iter().all(|&b| b),
        }
    }
}

impl From<bool> for Containment {
    fn from(b: bool) -> Self {
        Self::Single(b)
    }
}
