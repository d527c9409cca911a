//! # linsys
//!
//! Exact decimal analytic geometry and a Gaussian elimination solver.
//!
//! ## Features
//!
//! - **Exact Decimals**: 30 significant digits with one shared near-zero
//!   tolerance
//! - **Vectors**: dot and cross products, angles, projections, parallelism
//! - **Lines and Planes**: equality up to scale, parallelism, line
//!   intersection
//! - **Linear Systems**: triangular and reduced row-echelon forms, solution
//!   sets with free parameters
//!
//! ## Quick Start
//!
//! ```
//! use linsys::prelude::*;
//!
//! let system = LinearSystem::new(vec![
//!     Plane::new(Vector::from_ints([1, 1, 1]), 1).unwrap(),
//!     Plane::new(Vector::from_ints([0, 1, 0]), 2).unwrap(),
//!     Plane::new(Vector::from_ints([1, 1, -1]), 3).unwrap(),
//! ])
//! .unwrap();
//!
//! match system.solve().unwrap() {
//!     Solution::Unique(point) => assert!(point.approx_eq(&Vector::from_ints([0, 2, -1]))),
//!     other => panic!("unexpected {other}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use linsys_decimal as decimal;
pub use linsys_geometry as geometry;
pub use linsys_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use linsys_decimal::Scalar;
    pub use linsys_geometry::format::{DisplayWith, FormatConfig};
    pub use linsys_geometry::{Equation, Hyperplane, Intersection, Line, Plane, Vector};
    pub use linsys_solve::{LinearSystem, Parametrization, Solution};
}
