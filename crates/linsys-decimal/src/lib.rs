//! # linsys-decimal
//!
//! Exact decimal arithmetic for the linsys geometry and solver crates.
//!
//! This crate wraps `dashu` to provide:
//! - A fixed-precision decimal scalar (`Scalar`, 30 significant digits)
//! - The single near-zero tolerance used for every degeneracy decision
//! - Helpers for locating the first non-negligible entry of a sequence
//!
//! ## Tolerance
//!
//! `Zero::is_zero` on a `Scalar` is the tolerance predicate, not an exact
//! comparison: anything with magnitude below `10^TOLERANCE_EXPONENT` counts as zero.
//! Exact equality is still available through `==`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scalar;
pub mod tolerance;

#[cfg(test)]
mod proptests;

pub use error::ScalarError;
pub use scalar::Scalar;
pub use tolerance::{approx_eq, first_nonzero_index, PRECISION, TOLERANCE_EXPONENT};
