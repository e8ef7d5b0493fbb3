//! Shared fixtures for the linfit benchmarks.
//!
//! Run with:
//! ```text
//! cargo bench --package benchmarks
//! cargo bench --package benchmarks --bench train
//! ```

pub mod data;

pub use data::{sequence, synthetic_cars};
