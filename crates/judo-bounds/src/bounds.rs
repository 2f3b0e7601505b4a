//! The [`Bounds`] value type.

use crate::containment::Containment;
use crate::error::BoundsError;
use crate::limit::Limit;
use crate::scale::scaled_intervals;
use crate::space::BoxSpace;
use judo_core::{floor_mod, max_axis0, min_axis0, zip_with, zip_with3, DType, Shape};
use ndarray::{stack, ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn};
use std::fmt;
use tracing::{debug, trace};

/// Per-coordinate closed intervals `[low, high]`.
///
/// `low` and `high` are materialized arrays of the resolved shape and
/// element type, even when given as scalars. `span = high - low` is
/// computed once at construction.
///
/// Every operation is a pure function of its inputs and these immutable
/// fields, so a `Bounds` can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use judo_bounds::Bounds;
/// use ndarray::array;
///
/// let bounds = Bounds::new(vec![1.0, 1.0, 1.0], vec![-1.0, -1.0, -1.0]).unwrap();
/// assert_eq!(bounds.shape(), &[3]);
///
/// let clipped = bounds.clip(&array![2.0, 0.5, -3.0]).unwrap();
/// assert_eq!(clipped, array![1.0, 0.5, -1.0].into_dyn());
/// assert!(bounds.contains(&clipped).unwrap().all());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    low: ArrayD<f64>,
    high: ArrayD<f64>,
    span: ArrayD<f64>,
    dtype: DType,
}

/// Builder for [`Bounds`] with optional shape and element type.
///
/// Unset edges default to `high = +inf` and `low = -inf`.
///
/// ```
/// use judo_bounds::Bounds;
/// use judo_core::DType;
///
/// let bounds = Bounds::builder()
///     .high(4)
///     .low(2.1)
///     .shape(&[5])
///     .build()
///     .unwrap();
/// assert_eq!(bounds.dtype(), DType::Float64);
/// assert!(bounds.low().iter().all(|&v| v == 2.1));
/// ```
#[derive(Clone, Debug)]
pub struct BoundsBuilder {
    high: Limit,
    low: Limit,
    shape: Option<Shape>,
    dtype: Option<DType>,
}

impl BoundsBuilder {
    /// Set the upper edge.
    pub fn high(mut self, high: impl Into<Limit>) -> Self {
        self.high = high.into();
        self
    }

    /// Set the lower edge.
    pub fn low(mut self, low: impl Into<Limit>) -> Self {
        self.low = low.into();
        self
    }

    /// Set the shape scalar edges are broadcast to.
    pub fn shape(mut self, shape: &[usize]) -> Self {
        self.shape = Some(Shape::from_slice(shape));
        self
    }

    /// Force the element type instead of inferring it from `high`.
    pub fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Build the bounds.
    ///
    /// Shape comes from the explicit setting, else `high`, else `low`.
    /// Element type comes from the explicit setting, else `high`, else
    /// `low`. Both edges are cast to that type.
    ///
    /// # Errors
    ///
    /// - [`BoundsError::ShapeNotInferred`] if no shape is available.
    /// - [`BoundsError::Broadcast`] if `low` and `high` cannot co-broadcast.
    pub fn build(self) -> Result<Bounds, BoundsError> {
        let shape = match self.shape {
            Some(shape) => shape,
            None => self
                .high
                .shape()
                .or_else(|| self.low.shape())
                .ok_or(BoundsError::ShapeNotInferred)?,
        };
        let (high, high_dtype) = self.high.materialize(&shape);
        let (low, _) = self.low.materialize(&shape);
        // `high` always resolves to a type once materialized, so `low`'s
        // type only matters when it is forced through `dtype`.
        let dtype = self.dtype.unwrap_or(high_dtype);
        Bounds::assemble(dtype.cast_array(&low), dtype.cast_array(&high), dtype)
    }
}

impl Bounds {
    /// Start a [`BoundsBuilder`] with infinite default edges.
    pub fn builder() -> BoundsBuilder {
        BoundsBuilder {
            high: Limit::from(f64::INFINITY),
            low: Limit::from(f64::NEG_INFINITY),
            shape: None,
            dtype: None,
        }
    }

    /// Create bounds whose shape is inferred from `high` or `low`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::ShapeNotInferred`] when both edges are
    /// scalars, and [`BoundsError::Broadcast`] when their shapes clash.
    pub fn new(high: impl Into<Limit>, low: impl Into<Limit>) -> Result<Self, BoundsError> {
        Self::builder().high(high).low(low).build()
    }

    /// Create bounds with an explicit shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] when the edges' shapes clash.
    pub fn with_shape(
        high: impl Into<Limit>,
        low: impl Into<Limit>,
        shape: &[usize],
    ) -> Result<Self, BoundsError> {
        Self::builder().high(high).low(low).shape(shape).build()
    }

    fn assemble(low: ArrayD<f64>, high: ArrayD<f64>, dtype: DType) -> Result<Self, BoundsError> {
        let span = zip_with(&high, &low, |h, l| h - l)?;
        trace!(shape = ?high.shape(), %dtype, "bounds created");
        if tracing::enabled!(tracing::Level::DEBUG) && span.iter().any(|&s| s < 0.0) {
            debug!(shape = ?high.shape(), "bounds contain inverted intervals (low > high)");
        }
        Ok(Self {
            low,
            high,
            span,
            dtype,
        })
    }

    /// Create `Float64` bounds from `(low, high)` pairs, one per row.
    ///
    /// Each pair is one slice along the leading axis: scalars for 1-D
    /// bounds, arrays of a common shape for higher ranks. The rows are
    /// stacked, so this is the inverse of [`to_tuples`](Self::to_tuples).
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::RaggedRows`] if the `low` rows or the `high`
    /// rows differ in shape, and [`BoundsError::Broadcast`] if the stacked
    /// edges cannot co-broadcast.
    ///
    /// ```
    /// use judo_bounds::Bounds;
    /// use ndarray::array;
    ///
    /// let bounds = Bounds::from_tuples([(-1, 1), (-2, 1), (2, 3)]).unwrap();
    /// assert_eq!(bounds.low(), &array![-1.0, -2.0, 2.0].into_dyn());
    /// assert_eq!(bounds.high(), &array![1.0, 1.0, 3.0].into_dyn());
    /// ```
    pub fn from_tuples<I, L, H>(pairs: I) -> Result<Self, BoundsError>
    where
        I: IntoIterator<Item = (L, H)>,
        L: Into<Limit>,
        H: Into<Limit>,
    {
        let (low, high): (Vec<ArrayD<f64>>, Vec<ArrayD<f64>>) = pairs
            .into_iter()
            .map(|(lo, hi)| (lo.into().into_row(), hi.into().into_row()))
            .unzip();
        let low = stack_rows(&low)?;
        let high = stack_rows(&high)?;
        Self::new(
            Limit::array(&high, DType::Float64),
            Limit::array(&low, DType::Float64),
        )
    }

    /// Create bounds enclosing the rows of `x`, widened or narrowed by `scale`.
    ///
    /// The column-wise minimum and maximum over the leading axis are passed
    /// through [`scaled_intervals`].
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyArray`] if `x` is rank 0 or has no rows.
    ///
    /// ```
    /// use judo_bounds::Bounds;
    /// use ndarray::{array, Array2};
    ///
    /// let mut x = Array2::<f64>::ones((3, 3));
    /// x[[1, 1]] = -5.0;
    /// let bounds = Bounds::from_array(&x, 1.5).unwrap();
    /// assert_eq!(bounds.low(), &array![0.5, -7.5, 0.5].into_dyn());
    /// assert_eq!(bounds.high(), &array![1.5, 1.5, 1.5].into_dyn());
    /// ```
    pub fn from_array<S, D>(x: &ArrayBase<S, D>, scale: f64) -> Result<Self, BoundsError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let xmin = min_axis0(x).ok_or(BoundsError::EmptyArray)?;
        let xmax = max_axis0(x).ok_or(BoundsError::EmptyArray)?;
        let (low, high) = scaled_intervals(&xmin, &xmax, scale);
        Self::new(high, low)
    }

    /// Create bounds mirroring a [`BoxSpace`], keeping its element type.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if the space's edges cannot
    /// co-broadcast.
    pub fn from_space(space: &BoxSpace) -> Result<Self, BoundsError> {
        Self::builder()
            .high(Limit::array(space.high(), space.dtype()))
            .low(Limit::array(space.low(), space.dtype()))
            .dtype(space.dtype())
            .build()
    }

    /// Lower limits.
    pub fn low(&self) -> &ArrayD<f64> {
        &self.low
    }

    /// Upper limits.
    pub fn high(&self) -> &ArrayD<f64> {
        &self.high
    }

    /// `high - low`, computed at construction.
    pub fn span(&self) -> &ArrayD<f64> {
        &self.span
    }

    /// Shape of the bounded arrays (the shape of `high`).
    pub fn shape(&self) -> &[usize] {
        self.high.shape()
    }

    /// Element type `low` and `high` are stored as.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Extent of the leading axis, the number of `(low, high)` rows
    /// [`to_tuples`](Self::to_tuples) yields. Rank-0 bounds report 0.
    ///
    /// This equals the coordinate count only for 1-D bounds.
    pub fn len(&self) -> usize {
        self.shape().first().copied().unwrap_or(0)
    }

    /// `true` if the leading axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clamp every coordinate of `x` into `[low, high]`.
    ///
    /// Out-of-range values saturate to the nearest edge. NaN in `x` or in
    /// either edge gives NaN for that coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if `x` cannot co-broadcast with
    /// the bounds.
    pub fn clip<S, D>(&self, x: &ArrayBase<S, D>) -> Result<ArrayD<f64>, BoundsError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = DType::FLOAT.cast_array(x);
        Ok(zip_with3(&x, &self.low, &self.high, clip_value)?)
    }

    /// Wrap `x` into the bounds as if the interval tiled space.
    ///
    /// Two passes, the second reading the output of the first:
    ///
    /// 1. where `x >= high`, `x = (x mod high) + low`;
    /// 2. where `x <= low`, `x = high - (x mod low)`.
    ///
    /// `mod` is floored. A zero `high` or `low` edge makes the matching
    /// pass produce NaN.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if `x` cannot co-broadcast with
    /// the bounds.
    pub fn pbc<S, D>(&self, x: &ArrayBase<S, D>) -> Result<ArrayD<f64>, BoundsError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = DType::FLOAT.cast_array(x);
        let x = zip_with3(&x, &self.high, &self.low, |v, hi, lo| {
            if v < hi {
                v
            } else {
                floor_mod(v, hi) + lo
            }
        })?;
        let x = zip_with3(&x, &self.low, &self.high, |v, lo, hi| {
            if v > lo {
                v
            } else {
                hi - floor_mod(v, lo)
            }
        })?;
        Ok(x)
    }

    /// Minimum-image distance between `x` and `y` under periodic wrap.
    ///
    /// `delta = |x - y|`, then `delta - span` wherever `x > span / 2`.
    /// The wrap test reads `x` itself, not `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if the operands cannot
    /// co-broadcast with each other or with the bounds.
    pub fn pbc_distance<Sx, Dx, Sy, Dy>(
        &self,
        x: &ArrayBase<Sx, Dx>,
        y: &ArrayBase<Sy, Dy>,
    ) -> Result<ArrayD<f64>, BoundsError>
    where
        Sx: Data<Elem = f64>,
        Dx: Dimension,
        Sy: Data<Elem = f64>,
        Dy: Dimension,
    {
        let x = DType::FLOAT.cast_array(x);
        let y = DType::FLOAT.cast_array(y);
        let delta = zip_with(&x, &y, |a, b| (a - b).abs())?;
        Ok(zip_with3(&x, &delta, &self.span, |v, d, span| {
            if v > 0.5 * span {
                d - span
            } else {
                d
            }
        })?)
    }

    /// Check whether `x` lies inside the bounds.
    ///
    /// A coordinate is inside when clipping leaves it unchanged. Rank-0 and
    /// rank-1 inputs yield [`Containment::Single`]; higher ranks are reduced
    /// with AND over axis 1 and flattened into [`Containment::Rows`].
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if `x` cannot co-broadcast with
    /// the bounds.
    ///
    /// ```
    /// use judo_bounds::Bounds;
    /// use ndarray::array;
    ///
    /// let bounds = Bounds::with_shape(1.0, 0.0, &[2]).unwrap();
    /// let rows = bounds.contains(&array![[0.5, 0.5], [0.5, 2.0]]).unwrap();
    /// assert_eq!(rows.rows().unwrap(), &array![true, false]);
    /// ```
    pub fn contains<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Containment, BoundsError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = DType::FLOAT.cast_array(x);
        let clipped = self.clip(&x)?;
        let matches = zip_with(&clipped, &x, |c, v| c == v)?;
        if matches.ndim() > 1 {
            let per_row = matches.map_axis(Axis(1), |row| row.iter().all(|&b| b));
            Ok(Containment::Rows(per_row.iter().copied().collect()))
        } else {
            Ok(Containment::Single(matches.iter().all(|&b| b)))
        }
    }

    /// Alias of [`contains`](Self::contains).
    ///
    /// # Errors
    ///
    /// Same as [`contains`](Self::contains).
    pub fn points_in_bounds<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Containment, BoundsError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.contains(x)
    }

    /// New bounds from these edges (or the given overrides) passed through
    /// [`scaled_intervals`].
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if overrides clash in shape.
    pub fn safe_margin(
        &self,
        low: Option<ArrayD<f64>>,
        high: Option<ArrayD<f64>>,
        scale: f64,
    ) -> Result<Self, BoundsError> {
        let xmin = low.unwrap_or_else(|| self.low.clone());
        let xmax = high.unwrap_or_else(|| self.high.clone());
        let (low, high) = scaled_intervals(&xmin, &xmax, scale);
        Self::new(high, low)
    }

    /// Shorthand for [`safe_margin`](Self::safe_margin) with no overrides.
    ///
    /// # Errors
    ///
    /// Same as [`safe_margin`](Self::safe_margin).
    pub fn scaled(&self, scale: f64) -> Result<Self, BoundsError> {
        self.safe_margin(None, None, scale)
    }

    /// `(low, high)` slices along the leading axis.
    ///
    /// For 1-D bounds each slice is a rank-0 array holding one coordinate.
    /// [`from_tuples`](Self::from_tuples) restacks the slices, keeping the
    /// shape. Edges of differing shape are first broadcast to the shape of
    /// `span`. Rank-0 bounds yield no pairs.
    pub fn to_tuples(&self) -> Vec<(ArrayD<f64>, ArrayD<f64>)> {
        let dim = self.span.raw_dim();
        let (Some(low), Some(high)) = (self.low.broadcast(dim.clone()), self.high.broadcast(dim))
        else {
            return Vec::new();
        };
        if low.ndim() == 0 {
            return Vec::new();
        }
        low.axis_iter(Axis(0))
            .zip(high.axis_iter(Axis(0)))
            .map(|(lo, hi)| (lo.to_owned(), hi.to_owned()))
            .collect()
    }

    /// Export as a [`BoxSpace`] with `high`'s element type.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Broadcast`] if `low` and `high` were built
    /// with different (broadcast-compatible) shapes that fail to align.
    pub fn to_space(&self) -> Result<BoxSpace, BoundsError> {
        BoxSpace::new(self.low.view(), self.high.view(), self.dtype)
    }
}

fn stack_rows(rows: &[ArrayD<f64>]) -> Result<ArrayD<f64>, BoundsError> {
    let Some(first) = rows.first() else {
        return Ok(ArrayD::zeros(IxDyn(&[0])));
    };
    let views: Vec<_> = rows.iter().map(ArrayD::view).collect();
    stack(Axis(0), &views).map_err(|_| {
        let found = rows
            .iter()
            .find(|r| r.shape() != first.shape())
            .unwrap_or(first);
        BoundsError::RaggedRows {
            expected: Shape::from_slice(first.shape()),
            found: Shape::from_slice(found.shape()),
        }
    })
}

/// NaN in `v` or in either limit yields NaN.
#[inline]
fn clip_value(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() || lo.is_nan() || hi.is_nan() {
        return f64::NAN;
    }
    let v = if v < lo { lo } else { v };
    if v > hi {
        hi
    } else {
        v
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds dtype {} shape {:?} low {} high {}",
            self.dtype,
            self.shape(),
            self.low,
            self.high
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array, Array2};
    use proptest::prelude::*;

    fn unit_cube() -> Bounds {
        Bounds::new(vec![1.0, 1.0, 1.0], vec![-1.0, -1.0, -1.0]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn shape_inferred_from_sequences() {
        let b = Bounds::new(vec![1, 1, 1], vec![-1, -1, -1]).unwrap();
        assert_eq!(b.shape(), &[3]);
        assert_eq!(b.dtype(), DType::Int64);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn scalars_broadcast_to_explicit_shape() {
        let b = Bounds::with_shape(4, 2.1, &[5]).unwrap();
        assert_eq!(b.low(), &ArrayD::from_elem(ndarray::IxDyn(&[5]), 2.1));
        assert_eq!(b.high(), &ArrayD::from_elem(ndarray::IxDyn(&[5]), 4.0));
        assert_eq!(b.dtype(), DType::Float64);
    }

    #[test]
    fn shape_from_low_when_high_is_scalar() {
        let b = Bounds::new(10.0, array![0.0, 1.0]).unwrap();
        assert_eq!(b.shape(), &[2]);
        assert_eq!(b.high(), &array![10.0, 10.0].into_dyn());
    }

    #[test]
    fn scalar_edges_without_shape_fail() {
        assert_eq!(Bounds::new(1.0, 0.0), Err(BoundsError::ShapeNotInferred));
        assert_eq!(
            Bounds::builder().build(),
            Err(BoundsError::ShapeNotInferred)
        );
    }

    #[test]
    fn builder_defaults_to_infinite_edges() {
        let b = Bounds::builder().shape(&[2]).build().unwrap();
        assert!(b.high().iter().all(|v| *v == f64::INFINITY));
        assert!(b.low().iter().all(|v| *v == f64::NEG_INFINITY));
        assert!(b.contains(&array![1e300, -1e300]).unwrap().all());
    }

    #[test]
    fn dtype_inferred_from_high() {
        let b = Bounds::new(array![1.0, 1.0, 1.0], array![-1i64, -1, -1]).unwrap();
        assert_eq!(b.dtype(), DType::Float64);
        let b = Bounds::new(array![3i32, 3], array![-1.5, -1.5]).unwrap();
        assert_eq!(b.dtype(), DType::Int32);
        assert_eq!(b.low(), &array![-1.0, -1.0].into_dyn());
    }

    #[test]
    fn explicit_dtype_casts_both_edges() {
        let b = Bounds::builder()
            .high(array![2.9, 3.9])
            .low(array![-0.5, 0.5])
            .dtype(DType::Int64)
            .build()
            .unwrap();
        assert_eq!(b.high(), &array![2.0, 3.0].into_dyn());
        assert_eq!(b.low(), &array![0.0, 0.0].into_dyn());
        assert_eq!(b.dtype(), DType::Int64);
    }

    #[test]
    fn span_is_high_minus_low() {
        let b = Bounds::new(array![4.0, 1.0], array![-1.0, 0.5]).unwrap();
        assert_eq!(b.span(), &array![5.0, 0.5].into_dyn());
    }

    #[test]
    fn incompatible_edges_are_rejected() {
        let err = Bounds::new(vec![1.0, 1.0], vec![0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, BoundsError::Broadcast(_)));
    }

    #[test]
    fn inverted_intervals_are_accepted() {
        let b = Bounds::new(vec![0.0], vec![1.0]).unwrap();
        assert_eq!(b.span(), &array![-1.0].into_dyn());
    }

    #[test]
    fn display_names_dtype_and_shape() {
        let s = unit_cube().to_string();
        assert!(s.starts_with("Bounds dtype float64 shape [3]"), "{s}");
    }

    // ── Alternate constructors ──────────────────────────────────

    #[test]
    fn from_tuples_splits_pairs() {
        let b = Bounds::from_tuples([(-1, 1), (-2, 1), (2, 3)]).unwrap();
        assert_eq!(b.low(), &array![-1.0, -2.0, 2.0].into_dyn());
        assert_eq!(b.high(), &array![1.0, 1.0, 3.0].into_dyn());
        assert_eq!(b.dtype(), DType::Float64);
    }

    #[test]
    fn to_tuples_pairs_coordinates() {
        let b = Bounds::new(array![1.0, 2.0, 5.0], array![-1.0, -2.0, -5.0]).unwrap();
        let pairs: Vec<(f64, f64)> = b
            .to_tuples()
            .into_iter()
            .map(|(lo, hi)| (lo.sum(), hi.sum()))
            .collect();
        assert_eq!(pairs, vec![(-1.0, 1.0), (-2.0, 2.0), (-5.0, 5.0)]);
        assert!(b.to_tuples().iter().all(|(lo, hi)| lo.ndim() == 0 && hi.ndim() == 0));
    }

    #[test]
    fn tuples_of_rows_keep_rank2_shape() {
        let mut x = ndarray::Array3::<f64>::zeros((4, 2, 3));
        x[[1, 0, 2]] = -3.0;
        x[[2, 1, 1]] = 7.0;
        let b = Bounds::from_array(&x, 1.0).unwrap();
        assert_eq!(b.shape(), &[2, 3]);
        assert_eq!(b.len(), 2);

        let pairs = b.to_tuples();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.shape(), &[3]);

        let back = Bounds::from_tuples(pairs).unwrap();
        assert_eq!(back.shape(), b.shape());
        assert_eq!(back.low(), b.low());
        assert_eq!(back.high(), b.high());
    }

    #[test]
    fn from_tuples_rejects_ragged_rows() {
        let err = Bounds::from_tuples([
            (array![0.0, 0.0], array![1.0, 1.0]),
            (array![0.0, 0.0, 0.0], array![1.0, 1.0, 1.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BoundsError::RaggedRows {
                expected: Shape::from_slice(&[2]),
                found: Shape::from_slice(&[3]),
            }
        );
    }

    #[test]
    fn len_is_leading_axis_extent() {
        let b = Bounds::with_shape(1.0, 0.0, &[4, 3]).unwrap();
        assert_eq!(b.len(), 4);
        assert!(!b.is_empty());
        let empty = Bounds::from_tuples(Vec::<(f64, f64)>::new()).unwrap();
        assert_eq!(empty.shape(), &[0]);
        assert!(empty.is_empty());
    }

    #[test]
    fn from_array_scales_column_extremes() {
        let mut x = Array2::<f64>::ones((3, 3));
        x[[1, 1]] = -5.0;
        let b = Bounds::from_array(&x, 1.5).unwrap();
        assert_eq!(b.low(), &array![0.5, -7.5, 0.5].into_dyn());
        assert_eq!(b.high(), &array![1.5, 1.5, 1.5].into_dyn());
    }

    #[test]
    fn from_array_at_unit_scale_is_tight() {
        let x = array![[0.0, 3.0], [2.0, -1.0]];
        let b = Bounds::from_array(&x, 1.0).unwrap();
        assert_eq!(b.low(), &array![0.0, -1.0].into_dyn());
        assert_eq!(b.high(), &array![2.0, 3.0].into_dyn());
        assert_eq!(b.contains(&x).unwrap().rows().unwrap(), &array![true, true]);
    }

    #[test]
    fn from_array_rejects_empty_input() {
        let x = Array2::<f64>::zeros((0, 2));
        assert_eq!(Bounds::from_array(&x, 1.0), Err(BoundsError::EmptyArray));
        assert_eq!(Bounds::from_array(&arr0(1.0), 1.0), Err(BoundsError::EmptyArray));
    }

    #[test]
    fn space_round_trip_keeps_dtype() {
        let space = BoxSpace::new(array![-1.0, 0.0], array![1.0, 4.0], DType::Float32).unwrap();
        let b = Bounds::from_space(&space).unwrap();
        assert_eq!(b.dtype(), DType::Float32);
        assert_eq!(b.to_space().unwrap(), space);
    }

    // ── Clip ────────────────────────────────────────────────────

    #[test]
    fn clip_saturates_each_coordinate() {
        let out = unit_cube().clip(&array![5.0, -0.25, -9.0]).unwrap();
        assert_eq!(out, array![1.0, -0.25, -1.0].into_dyn());
    }

    #[test]
    fn clip_broadcasts_over_rows() {
        let x = array![[2.0, 0.0, 0.0], [0.0, -2.0, 1.0]];
        let out = unit_cube().clip(&x).unwrap();
        assert_eq!(out, array![[1.0, 0.0, 0.0], [0.0, -1.0, 1.0]].into_dyn());
    }

    #[test]
    fn clip_keeps_nan() {
        let out = unit_cube().clip(&array![f64::NAN, 0.0, 0.0]).unwrap();
        assert!(out[[0]].is_nan());
    }

    #[test]
    fn nan_edge_poisons_its_coordinate() {
        let x = array![[f64::NAN, 0.0], [1.0, 1.0]];
        let b = Bounds::from_array(&x, 1.0).unwrap();
        assert!(b.low()[[0]].is_nan());
        assert!(b.high()[[0]].is_nan());

        let out = b.clip(&array![5.0, 0.5]).unwrap();
        assert!(out[[0]].is_nan());
        assert_eq!(out[[1]], 0.5);
        assert_eq!(b.contains(&array![5.0, 0.5]).unwrap(), Containment::Single(false));
        let rows = b.contains(&array![[0.0, 0.5], [1.0, 1.0]]).unwrap();
        assert_eq!(rows.rows().unwrap(), &array![false, false]);
    }

    #[test]
    fn clip_rejects_mismatched_width() {
        let err = unit_cube().clip(&array![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, BoundsError::Broadcast(_)));
    }

    // ── Periodic boundary conditions ────────────────────────────

    fn zero_to_ten() -> Bounds {
        Bounds::with_shape(10.0, 0.0, &[1]).unwrap()
    }

    #[test]
    fn pbc_wraps_above_high() {
        let out = zero_to_ten().pbc(&array![11.0]).unwrap();
        assert_eq!(out, array![1.0].into_dyn());
    }

    #[test]
    fn pbc_leaves_interior_untouched() {
        let out = zero_to_ten().pbc(&array![3.5]).unwrap();
        assert_eq!(out, array![3.5].into_dyn());
    }

    #[test]
    fn pbc_second_pass_reads_first_pass_output() {
        // -3 survives pass one, then pass two computes 10 - (-3 mod 0).
        let out = zero_to_ten().pbc(&array![-3.0]).unwrap();
        assert!(out[[0]].is_nan());
        // 10 wraps to 0 in pass one, which then fails `> low` in pass two.
        let out = zero_to_ten().pbc(&array![10.0]).unwrap();
        assert!(out[[0]].is_nan());
    }

    #[test]
    fn pbc_with_nonzero_edges() {
        let b = Bounds::with_shape(5.0, -5.0, &[2]).unwrap();
        let out = b.pbc(&array![7.0, -7.0]).unwrap();
        // 7 -> (7 mod 5) + -5 = -3; -7 -> 5 - (-7 mod -5) = 5 - (-2) = 7
        assert_eq!(out, array![-3.0, 7.0].into_dyn());
    }

    #[test]
    fn pbc_distance_tests_x_against_half_span() {
        let b = zero_to_ten();
        let near = b.pbc_distance(&array![2.0], &array![1.0]).unwrap();
        assert_eq!(near, array![1.0].into_dyn());
        let far = b.pbc_distance(&array![9.0], &array![1.0]).unwrap();
        assert_eq!(far, array![-2.0].into_dyn());
        // delta is small but x is past the midpoint, so it still wraps.
        let quirk = b.pbc_distance(&array![6.0], &array![5.5]).unwrap();
        assert_eq!(quirk, array![-9.5].into_dyn());
    }

    // ── Containment ─────────────────────────────────────────────

    #[test]
    fn contains_single_point() {
        let b = unit_cube();
        assert_eq!(b.contains(&array![0.0, 1.0, -1.0]).unwrap(), Containment::Single(true));
        assert_eq!(b.contains(&array![0.0, 1.5, 0.0]).unwrap(), Containment::Single(false));
    }

    #[test]
    fn contains_rows() {
        let x = array![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, -1.1]];
        let c = unit_cube().contains(&x).unwrap();
        assert_eq!(c.rows().unwrap(), &array![true, false, true, false]);
        assert!(!c.all());
    }

    #[test]
    fn contains_rank3_flattens_row_flags() {
        let x = ndarray::Array3::<f64>::zeros((2, 3, 3));
        let c = unit_cube().contains(&x).unwrap();
        assert_eq!(c.rows().unwrap().len(), 6);
        assert!(c.all());
    }

    #[test]
    fn nan_is_never_contained() {
        let c = unit_cube().contains(&array![f64::NAN, 0.0, 0.0]).unwrap();
        assert_eq!(c.as_bool(), Some(false));
    }

    #[test]
    fn points_in_bounds_matches_contains() {
        let b = unit_cube();
        let x = array![[0.0, 0.0, 0.0], [3.0, 0.0, 0.0]];
        assert_eq!(b.points_in_bounds(&x).unwrap(), b.contains(&x).unwrap());
    }

    // ── Derived bounds ──────────────────────────────────────────

    #[test]
    fn safe_margin_widens_current_edges() {
        let b = unit_cube().safe_margin(None, None, 1.5).unwrap();
        assert_eq!(b.low(), &array![-1.5, -1.5, -1.5].into_dyn());
        assert_eq!(b.high(), &array![1.5, 1.5, 1.5].into_dyn());
    }

    #[test]
    fn safe_margin_uses_overrides() {
        let b = unit_cube()
            .safe_margin(Some(array![-2.0, 0.0, 1.0].into_dyn()), None, 1.0)
            .unwrap();
        assert_eq!(b.low(), &array![-2.0, 0.0, 1.0].into_dyn());
        assert_eq!(b.high(), &array![1.0, 1.0, 1.0].into_dyn());
    }

    #[test]
    fn safe_margin_does_not_mutate() {
        let b = unit_cube();
        let _ = b.scaled(2.0).unwrap();
        assert_eq!(b, unit_cube());
    }

    // ── Properties ──────────────────────────────────────────────

    fn bounds_and_point() -> impl Strategy<Value = (Bounds, ndarray::Array1<f64>)> {
        (1usize..6).prop_flat_map(|n| {
            (
                proptest::collection::vec((-100.0f64..0.0, 0.0f64..100.0), n),
                proptest::collection::vec(-200.0f64..200.0, n),
            )
                .prop_map(|(pairs, x)| {
                    (
                        Bounds::from_tuples(pairs).unwrap(),
                        ndarray::Array1::from_vec(x),
                    )
                })
        })
    }

    fn rank2_bounds() -> impl Strategy<Value = Bounds> {
        (1usize..5, 1usize..4, 1usize..4).prop_flat_map(|(n, h, w)| {
            proptest::collection::vec(-50.0f64..50.0, n * h * w).prop_map(move |v| {
                let x = ndarray::Array3::from_shape_vec((n, h, w), v).unwrap();
                Bounds::from_array(&x, 1.2).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn clip_is_idempotent((b, x) in bounds_and_point()) {
            let once = b.clip(&x).unwrap();
            let twice = b.clip(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn contains_iff_clip_is_identity((b, x) in bounds_and_point()) {
            let inside = b.contains(&x).unwrap().all();
            let unchanged = b.clip(&x).unwrap() == x.clone().into_dyn();
            prop_assert_eq!(inside, unchanged);
        }

        #[test]
        fn tuples_round_trip((b, _x) in bounds_and_point()) {
            let back = Bounds::from_tuples(b.to_tuples()).unwrap();
            prop_assert_eq!(back.low(), b.low());
            prop_assert_eq!(back.high(), b.high());
        }

        #[test]
        fn tuples_round_trip_keeps_rank2_shape(b in rank2_bounds()) {
            let back = Bounds::from_tuples(b.to_tuples()).unwrap();
            prop_assert_eq!(back.shape(), b.shape());
            prop_assert_eq!(back.low(), b.low());
            prop_assert_eq!(back.high(), b.high());
        }
    }
}
