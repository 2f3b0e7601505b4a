//! Judo: bounds and hashing utilities for array-based machine-learning research.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! judo sub-crates. For most users, adding `judo` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use judo::prelude::*;
//! use ndarray::array;
//!
//! // Bounds enclosing a batch of samples, widened by 10%.
//! let samples = array![[0.5, 2.0], [1.5, -1.0], [1.0, 0.0]];
//! let bounds = Bounds::from_array(&samples, 1.1).unwrap();
//! assert!(bounds.contains(&samples).unwrap().all());
//!
//! // Pull an out-of-range candidate back inside.
//! let candidate = array![10.0, -10.0];
//! let fixed = bounds.clip(&candidate).unwrap();
//! assert_eq!(bounds.contains(&fixed).unwrap(), Containment::Single(true));
//!
//! // Identify states by content.
//! let mut state = State::new();
//! state.insert("observs", samples.into_dyn());
//! let id = default_hasher().hash_state(&state);
//! # let _ = id;
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `judo-core` | Element types, shapes, element-wise primitives |
//! | [`bounds`] | `judo-bounds` | `Bounds`, scaled intervals, `BoxSpace` |
//! | [`hash`] | `judo-hash` | `Hasher`, `HasherConfig`, `State` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element types, shapes and array primitives (`judo-core`).
pub use judo_core as core;

/// Closed-interval bounds over arrays (`judo-bounds`).
///
/// [`bounds::Bounds`] is the central type; [`bounds::BoxSpace`] is the
/// box constraint used at environment boundaries.
pub use judo_bounds as bounds;

/// Content hashes and random ids (`judo-hash`).
pub use judo_hash as hash;

/// Common imports for typical judo usage.
///
/// ```rust
/// use judo::prelude::*;
/// ```
pub mod prelude {
    pub use judo_core::DType;

    pub use judo_bounds::{scaled_intervals, Bounds, BoundsError, BoxSpace, Containment, Limit};

    pub use judo_hash::{default_hasher, Hasher, HasherConfig, State, StateValue};
}
