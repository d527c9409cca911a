//! # linsys-geometry
//!
//! Analytic geometry primitives over exact decimal scalars.
//!
//! This crate provides:
//! - `Vector`: fixed-dimension coordinate tuples with the usual algebra
//! - `Hyperplane`: a normal vector and constant term, `n · x = k`
//! - `Line` and `Plane`: hyperplanes pinned to two and three dimensions
//! - The `Equation` trait used by the solver to treat any of these as a row
//!
//! ## Degeneracy
//!
//! All "is this zero" questions go through the shared tolerance of
//! `linsys-decimal`. A hyperplane whose normal vector is (near-)zero is
//! degenerate: it has no base point and reads `0 = k`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod equation;
pub mod error;
pub mod format;
pub mod hyperplane;
pub mod line;
pub mod plane;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use equation::Equation;
pub use error::GeometryError;
pub use format::FormatConfig;
pub use hyperplane::Hyperplane;
pub use line::{Intersection, Line};
pub use plane::Plane;
pub use vector::{Projection, Vector};

pub use linsys_decimal::Scalar;
