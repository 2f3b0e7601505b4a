//! Array shapes and co-broadcasting.

use crate::error::BroadcastError;
use smallvec::SmallVec;

/// The extents of an array, outermost axis first.
///
/// Inline for up to four axes, which covers vectors, sample matrices and
/// image batches without allocating.
pub type Shape = SmallVec<[usize; 4]>;

/// Compute the shape two operands co-broadcast to.
///
/// Shapes are aligned on their trailing axes; missing leading axes count
/// as `1`. Each aligned pair must be equal, or one side must be `1`.
///
/// # Examples
///
/// ```
/// use judo_core::broadcast_shape;
///
/// let s = broadcast_shape(&[4, 3], &[3]).unwrap();
/// assert_eq!(s.as_slice(), &[4, 3]);
/// assert!(broadcast_shape(&[4, 3], &[2]).is_err());
/// ```
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Shape, BroadcastError> {
    let ndim = left.len().max(right.len());
    let mut out = Shape::with_capacity(ndim);
    for axis in 0..ndim {
        let l = aligned_extent(left, ndim, axis);
        let r = aligned_extent(right, ndim, axis);
        let extent = if l == r || r == 1 {
            l
        } else if l == 1 {
            r
        } else {
            return Err(BroadcastError {
                left: Shape::from_slice(left),
                right: Shape::from_slice(right),
            });
        };
        out.push(extent);
    }
    Ok(out)
}

/// Extent of `shape` at `axis` once right-aligned to `ndim` axes.
#[inline]
fn aligned_extent(shape: &[usize], ndim: usize, axis: usize) -> usize {
    let offset = ndim - shape.len();
    if axis < offset {
        1
    } else {
        shape[axis - offset]
    }
}
