//! Stable identifiers for arrays and composite state.
//!
//! A [`Hasher`] either digests content (128-bit xxh3 over element bytes)
//! or hands out fresh random ids, depending on
//! [`HasherConfig::true_hash`]. Content hashes let identical states be
//! recognised; random ids are cheaper when only uniqueness matters.
//!
//! # Architecture
//!
//! - [`Hasher`] hashes tensors, batches of tensors, and [`State`] values
//! - [`HasherConfig`] selects the mode and seed, optionally from the environment
//! - [`default_hasher`] is a process-wide instance configured once
//! - [`HashElement`] lists the element types whose bytes can be hashed

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod hasher;
pub mod state;

pub use config::HasherConfig;
pub use element::HashElement;
pub use error::HashConfigError;
pub use hasher::{default_hasher, Hasher};
pub use state::{State, StateValue};
