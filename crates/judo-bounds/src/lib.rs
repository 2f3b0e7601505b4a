//! Closed-interval bounds over arrays.
//!
//! [`Bounds`] owns a pair of per-coordinate `low`/`high` limit arrays and
//! derives everything else from them: clipping values into range,
//! periodic boundary conditions, containment checks, and scaled margins
//! around observed data.
//!
//! # Construction
//!
//! - [`Bounds::new`] / [`Bounds::with_shape`] from scalars, sequences or arrays
//! - [`Bounds::builder`] when the element type must be forced
//! - [`Bounds::from_tuples`] from `(low, high)` pairs
//! - [`Bounds::from_array`] from the column-wise extremes of a sample matrix
//! - [`Bounds::from_space`] from a [`BoxSpace`]
//!
//! Instances are immutable. Operations that derive new limits
//! ([`Bounds::safe_margin`], [`Bounds::scaled`]) return a fresh instance.
//!
//! # Permissiveness
//!
//! Inverted intervals (`low > high`) and non-finite limits are accepted as
//! given. Infinite limits are the defaults. Behavior of clipping and
//! containment under inversion is undefined and is not corrected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod containment;
pub mod error;
pub mod limit;
pub mod scale;
pub mod space;

pub use bounds::{Bounds, BoundsBuilder};
pub use containment::Containment;
pub use error::BoundsError;
pub use limit::{Limit, Scalar};
pub use scale::scaled_intervals;
pub use space::BoxSpace;
