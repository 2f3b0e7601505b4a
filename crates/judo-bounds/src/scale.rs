//! Proportional widening and narrowing of intervals.

use ndarray::{ArrayBase, ArrayD, Data, Dimension};

/// Scale `low` and `high` by a percentage of their magnitude.
///
/// `scale` is a factor relative to zero, not to the interval midpoint:
/// `1.1` moves each edge 10% further from zero in the widening direction,
/// `0.9` moves each edge 10% in the narrowing direction, and `1.0` is the
/// identity. With `pct = scale - 1`, `grow = 1 + |pct|` and
/// `shrink = 1 - |pct|`:
///
/// | | `pct > 0` | `pct <= 0` |
/// |---|---|---|
/// | `low < 0` | `low * grow` | `low * shrink` |
/// | `low >= 0` | `low * shrink` | `low * shrink` |
/// | `high < 0` | `high * shrink` | `high * grow` |
/// | `high >= 0` | `high * grow` | `high * shrink` |
///
/// # Known asymmetry
///
/// When narrowing, a non-negative `low` is multiplied by `shrink` (moved
/// toward zero, i.e. *down*) while the `high` column is sign-dependent.
/// This mirrors the established behavior of the scaled-margin procedure
/// and is kept for compatibility; whether it is intended has not been
/// confirmed.
///
/// # Examples
///
/// ```
/// use judo_bounds::scaled_intervals;
/// use ndarray::array;
///
/// let (lo, hi) = scaled_intervals(&array![-5.0, 1.0], &array![1.0, 2.0], 1.5);
/// assert_eq!(lo, array![-7.5, 0.5].into_dyn());
/// assert_eq!(hi, array![1.5, 3.0].into_dyn());
/// ```
#[allow(clippy::if_same_then_else)]
pub fn scaled_intervals<Sl, Dl, Sh, Dh>(
    low: &ArrayBase<Sl, Dl>,
    high: &ArrayBase<Sh, Dh>,
    scale: f64,
) -> (ArrayD<f64>, ArrayD<f64>)
where
    Sl: Data<Elem = f64>,
    Dl: Dimension,
    Sh: Data<Elem = f64>,
    Dh: Dimension,
{
    let pct = scale - 1.0;
    let grow = 1.0 + pct.abs();
    let shrink = 1.0 - pct.abs();
    if pct > 0.0 {
        (
            low.mapv(|v| if v < 0.0 { v * grow } else { v * shrink }).into_dyn(),
            high.mapv(|v| if v < 0.0 { v * shrink } else { v * grow }).into_dyn(),
        )
    } else {
        (
            // Both branches shrink; see "Known asymmetry".
            low.mapv(|v| if v < 0.0 { v * shrink } else { v * shrink }).into_dyn(),
            high.mapv(|v| if v < 0.0 { v * grow } else { v * shrink }).into_dyn(),
        )
    }
}
