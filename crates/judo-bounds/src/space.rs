//! Box-shaped constraint as consumed by reinforcement-learning environments.

use crate::error::BoundsError;
use judo_core::{broadcast_shape, DType, Shape};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

/// An axis-aligned box of per-coordinate `[low, high]` limits.
///
/// This is the action/observation space description used at the
/// environment boundary. `low` and `high` always share one shape and are
/// stored cast to `dtype`.
///
/// # Examples
///
/// ```
/// use judo_bounds::BoxSpace;
/// use judo_core::DType;
/// use ndarray::array;
///
/// let space = BoxSpace::new(array![-1.0, 0.0], array![1.0, 2.0], DType::Float32).unwrap();
/// assert_eq!(space.shape(), &[2]);
/// assert!(space.contains(&array![0.0, 2.0]));
/// assert!(!space.contains(&array![0.0, 2.5]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: ArrayD<f64>,
    high: ArrayD<f64>,
    dtype: DType,
}

impl BoxSpace {
    /// Create a box, broadcasting `low` and `high` to a common shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if the shapes are incompatible.
    pub fn new<Sl, Dl, Sh, Dh>(
        low: ArrayBase<Sl, Dl>,
        high: ArrayBase<Sh, Dh>,
        dtype: DType,
    ) -> Result<Self, BoundsError>
    where
        Sl: Data<Elem = f64>,
        Dl: Dimension,
        Sh: Data<Elem = f64>,
        Dh: Dimension,
    {
        let shape: Shape = broadcast_shape(low.shape(), high.shape())?;
        let low = broadcast_owned(&low, &shape)?;
        let high = broadcast_owned(&high, &shape)?;
        Ok(Self {
            low: dtype.cast_array(&low),
            high: dtype.cast_array(&high),
            dtype,
        })
    }

    /// Lower limits.
    pub fn low(&self) -> &ArrayD<f64> {
        &self.low
    }

    /// Upper limits.
    pub fn high(&self) -> &ArrayD<f64> {
        &self.high
    }

    /// Element type of the box.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Shape shared by `low` and `high`.
    pub fn shape(&self) -> &[usize] {
        self.high.shape()
    }

    /// `true` if `x` has this box's shape and every coordinate lies in
    /// the closed interval.
    pub fn contains<S, D>(&self, x: &ArrayBase<S, D>) -> bool
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        if x.shape() != self.shape() {
            return false;
        }
        x.iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }
}

fn broadcast_owned<S, D>(x: &ArrayBase<S, D>, shape: &Shape) -> Result<ArrayD<f64>, BoundsError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.broadcast(IxDyn(shape.as_slice()))
        .map(|v| v.to_owned())
        .ok_or_else(|| {
            BoundsError::Broadcast(judo_core::BroadcastError {
                left: Shape::from_slice(x.shape()),
                right: shape.clone(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array};

    #[test]
    fn scalar_edge_broadcasts_to_array_edge() {
        let space = BoxSpace::new(arr0(-1.0), array![1.0, 2.0, 3.0], DType::Float64).unwrap();
        assert_eq!(space.low(), &array![-1.0, -1.0, -1.0].into_dyn());
        assert_eq!(space.shape(), &[3]);
    }

    #[test]
    fn limits_are_cast_to_dtype() {
        let space = BoxSpace::new(array![-1.5], array![2.7], DType::Int64).unwrap();
        assert_eq!(space.low()[[0]], -1.0);
        assert_eq!(space.high()[[0]], 2.0);
    }

    #[test]
    fn contains_requires_matching_shape() {
        let space = BoxSpace::new(array![0.0, 0.0], array![1.0, 1.0], DType::Float64).unwrap();
        assert!(space.contains(&array![1.0, 0.0]));
        assert!(!space.contains(&array![[0.5, 0.5]]));
        assert!(!space.contains(&array![0.5]));
    }

    #[test]
    fn incompatible_edges_are_rejected() {
        let err = BoxSpace::new(array![0.0, 0.0], array![1.0, 1.0, 1.0], DType::Float64);
        assert!(matches!(err, Err(BoundsError::Broadcast(_))));
    }
}
