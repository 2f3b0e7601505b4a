//! Element-wise primitives over co-broadcast arrays.
//!
//! These are the only array operations the rest of judo relies on:
//! binary and ternary element-wise maps (which also express conditional
//! select), floored modulo, and leading-axis reductions.

use crate::error::BroadcastError;
use crate::shape::{broadcast_shape, Shape};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, IxDyn, Zip};

/// Broadcast `x` to `shape`, which must already be a valid target.
fn broadcast_to<'a, S, D>(
    x: &'a ArrayBase<S, D>,
    shape: &Shape,
) -> Result<ArrayViewD<'a, f64>, BroadcastError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.broadcast(IxDyn(shape.as_slice())).ok_or_else(|| BroadcastError {
        left: Shape::from_slice(x.shape()),
        right: shape.clone(),
    })
}

/// Apply `f` to each co-broadcast pair of elements of `a` and `b`.
///
/// # Errors
///
/// Returns [`BroadcastError`] if the shapes are incompatible.
///
/// # Examples
///
/// ```
/// use judo_core::zip_with;
/// use ndarray::array;
///
/// let rows = array![[1.0, 2.0], [3.0, 4.0]];
/// let offset = array![10.0, 20.0];
/// let out = zip_with(&rows, &offset, |a, b| a + b).unwrap();
/// assert_eq!(out, array![[11.0, 22.0], [13.0, 24.0]].into_dyn());
/// ```
pub fn zip_with<R, Sa, Da, Sb, Db, F>(
    a: &ArrayBase<Sa, Da>,
    b: &ArrayBase<Sb, Db>,
    mut f: F,
) -> Result<ArrayD<R>, BroadcastError>
where
    Sa: Data<Elem = f64>,
    Da: Dimension,
    Sb: Data<Elem = f64>,
    Db: Dimension,
    F: FnMut(f64, f64) -> R,
{
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let av = broadcast_to(a, &shape)?;
    let bv = broadcast_to(b, &shape)?;
    Ok(Zip::from(av).and(bv).map_collect(|x, y| f(*x, *y)))
}

/// Apply `f` to each co-broadcast triple of elements of `a`, `b` and `c`.
///
/// Conditional select (`where(cond, x, y)`) is expressed by branching
/// inside `f`.
///
/// # Errors
///
/// Returns [`BroadcastError`] if any pair of shapes is incompatible.
pub fn zip_with3<R, Sa, Da, Sb, Db, Sc, Dc, F>(
    a: &ArrayBase<Sa, Da>,
    b: &ArrayBase<Sb, Db>,
    c: &ArrayBase<Sc, Dc>,
    mut f: F,
) -> Result<ArrayD<R>, BroadcastError>
where
    Sa: Data<Elem = f64>,
    Da: Dimension,
    Sb: Data<Elem = f64>,
    Db: Dimension,
    Sc: Data<Elem = f64>,
    Dc: Dimension,
    F: FnMut(f64, f64, f64) -> R,
{
    let ab = broadcast_shape(a.shape(), b.shape())?;
    let shape = broadcast_shape(&ab, c.shape())?;
    let av = broadcast_to(a, &shape)?;
    let bv = broadcast_to(b, &shape)?;
    let cv = broadcast_to(c, &shape)?;
    Ok(Zip::from(av)
        .and(bv)
        .and(cv)
        .map_collect(|x, y, z| f(*x, *y, *z)))
}

/// Floored modulo: the result takes the sign of the divisor.
///
/// Matches the array-library `mod` convention rather than Rust's `%`
/// (truncated) or `rem_euclid` (always non-negative). A zero divisor
/// yields NaN.
///
/// ```
/// use judo_core::floor_mod;
///
/// assert_eq!(floor_mod(11.0, 10.0), 1.0);
/// assert_eq!(floor_mod(-3.0, 10.0), 7.0);
/// assert_eq!(floor_mod(3.0, -10.0), -7.0);
/// assert!(floor_mod(-3.0, 0.0).is_nan());
/// ```
#[inline]
pub fn floor_mod(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

#[inline]
fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.min(v)
    }
}

#[inline]
fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

/// Minimum along the leading axis, propagating NaN.
///
/// Returns `None` for rank-0 input or an empty leading axis.
pub fn min_axis0<S, D>(x: &ArrayBase<S, D>) -> Option<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fold_axis0(x, f64::INFINITY, nan_min)
}

/// Maximum along the leading axis, propagating NaN.
///
/// Returns `None` for rank-0 input or an empty leading axis.
pub fn max_axis0<S, D>(x: &ArrayBase<S, D>) -> Option<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fold_axis0(x, f64::NEG_INFINITY, nan_max)
}

fn fold_axis0<S, D>(x: &ArrayBase<S, D>, init: f64, f: fn(f64, f64) -> f64) -> Option<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.ndim() == 0 || x.len_of(Axis(0)) == 0 {
        return None;
    }
    let view = x.view().into_dyn();
    Some(view.fold_axis(Axis(0), init, |&acc, &v| f(acc, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array};
    use proptest::prelude::*;

    #[test]
    fn zip_with_broadcasts_rows() {
        let x = array![[1.0, -1.0], [2.0, -2.0]];
        let lo = array![0.0, 0.0];
        let out = zip_with(&x, &lo, f64::max).unwrap();
        assert_eq!(out, array![[1.0, 0.0], [2.0, 0.0]].into_dyn());
    }

    #[test]
    fn zip_with_rejects_incompatible_shapes() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0];
        assert!(zip_with(&a, &b, |x, y| x + y).is_err());
    }

    #[test]
    fn zip_with_can_produce_bools() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 3.0];
        let eq = zip_with(&a, &b, |x, y| x == y).unwrap();
        assert_eq!(eq.iter().copied().collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn zip_with3_selects() {
        let cond = array![1.0, 0.0, 1.0];
        let yes = arr0(5.0);
        let no = array![7.0, 8.0, 9.0];
        let out = zip_with3(&cond, &yes, &no, |c, y, n| if c > 0.0 { y } else { n }).unwrap();
        assert_eq!(out, array![5.0, 8.0, 5.0].into_dyn());
    }

    #[test]
    fn floor_mod_sign_follows_divisor() {
        assert_eq!(floor_mod(7.5, 2.0), 1.5);
        assert_eq!(floor_mod(-7.5, 2.0), 0.5);
        assert_eq!(floor_mod(7.5, -2.0), -0.5);
        assert_eq!(floor_mod(-4.0, 2.0), 0.0);
    }

    #[test]
    fn floor_mod_by_zero_is_nan() {
        assert!(floor_mod(1.0, 0.0).is_nan());
        assert!(floor_mod(0.0, 0.0).is_nan());
    }

    #[test]
    fn axis0_reductions_are_columnwise() {
        let x = array![[1.0, 5.0, -1.0], [3.0, -5.0, 0.0]];
        assert_eq!(min_axis0(&x).unwrap(), array![1.0, -5.0, -1.0].into_dyn());
        assert_eq!(max_axis0(&x).unwrap(), array![3.0, 5.0, 0.0].into_dyn());
    }

    #[test]
    fn axis0_reductions_propagate_nan() {
        let x = array![[1.0, f64::NAN], [0.0, 2.0]];
        let lo = min_axis0(&x).unwrap();
        assert_eq!(lo[[0]], 0.0);
        assert!(lo[[1]].is_nan());
    }

    #[test]
    fn axis0_reductions_reject_empty_and_scalar() {
        let empty = ndarray::Array2::<f64>::zeros((0, 3));
        assert!(min_axis0(&empty).is_none());
        assert!(max_axis0(&arr0(1.0)).is_none());
    }

    proptest! {
        #[test]
        fn floor_mod_lands_in_divisor_range(a in -1e6f64..1e6, b in 0.5f64..1e3) {
            let r = floor_mod(a, b);
            prop_assert!((0.0..b).contains(&r) || (r - b).abs() < 1e-9);
        }
    }
}
