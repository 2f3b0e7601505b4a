//! Test utilities and fixtures for judo development.
//!
//! Provides deterministic sample arrays ([`fixtures`]) and a one-call
//! tracing setup so log output from the code under test shows up in
//! `cargo test` output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{center_dip_grid, random_points, random_pairs};

/// Install a `TRACE`-level fmt subscriber routed through the test writer.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
