//! Rust backend for naive one-parameter (Rasch) item response scoring.
//!
//! This crate provides one closed-form, non-iterative scoring pass over a
//! binary (items x participants) response matrix:
//! - Per-item facility and difficulty estimation
//! - Per-participant ability estimation from difficulty-weighted sums
//!
//! The kernels are plain `ndarray` functions and can be used directly from
//! Rust; the pyo3/numpy wrappers expose them to Python.

use pyo3::prelude::*;

pub mod scoring;
pub mod utils;

pub use scoring::{NaiveEstimates, item_facilities, naive_irt_1pl};

/// Python module for naive_irt_rs
#[pymodule]
fn naive_irt_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    scoring::register(m)?;
    Ok(())
}
