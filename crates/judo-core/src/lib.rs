//! Element types, shapes, and element-wise array primitives for judo.
//!
//! This is the leaf crate with zero internal dependencies. It is the seam
//! between judo's value types and the `ndarray` array layer: everything
//! above it (bounds, hashing) reaches the array library only through the
//! primitives defined here.
//!
//! Arrays are always stored as `f64`. The logical element type of a value
//! is tracked separately as a [`DType`] and applied with [`DType::cast`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod shape;

pub use dtype::DType;
pub use error::BroadcastError;
pub use ops::{floor_mod, max_axis0, min_axis0, zip_with, zip_with3};
pub use shape::{broadcast_shape, Shape};
