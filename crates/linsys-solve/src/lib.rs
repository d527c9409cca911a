//! # linsys-solve
//!
//! Gaussian elimination over systems of lines, planes and hyperplanes.
//!
//! This crate provides:
//! - `LinearSystem`: an ordered list of equations sharing one dimension,
//!   with in-place row operations
//! - Forward elimination to triangular form
//! - Back substitution to reduced row-echelon form
//! - `solve`, which reads the reduced rows as no solution, a unique point,
//!   or a parametrized family of solutions
//!
//! ## Tolerance
//!
//! Pivots are chosen with the shared near-zero predicate of
//! `linsys-decimal`, so a coefficient below `1e-10` never becomes a pivot.
//!
//! ## Logging
//!
//! Each elimination phase logs at `debug` level; individual swaps, scalings
//! and eliminations log at `trace` level through the `log` facade.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod error;
pub mod solution;
pub mod system;

#[cfg(test)]
mod proptests;

pub use error::SystemError;
pub use solution::{Parametrization, Solution};
pub use system::LinearSystem;
