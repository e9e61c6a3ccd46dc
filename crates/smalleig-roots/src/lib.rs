#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Root classification
//!
//! Both solvers report the qualitative structure of the roots next to their
//! values, so callers can tell which output slots carry real data:
//!
//! ```
//! use smalleig_roots::{solve_quadratic, QuadraticRoot};
//!
//! let sol = solve_quadratic(1.0, -3.0, 2.0);
//! assert_eq!(sol.kind, QuadraticRoot::Two);
//! assert_eq!(sol.roots, [2.0, 1.0]);
//! ```

/// Monic cubic polynomial solver.
pub mod cubic;

/// Quadratic polynomial solver.
pub mod quadratic;

/// Root classification enums.
pub mod types;

pub use cubic::{solve_cubic, CubicSolution};
pub use quadratic::{solve_quadratic, QuadraticSolution};
pub use types::{CubicRoot, ParseRootError, QuadraticRoot};
