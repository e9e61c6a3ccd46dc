#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Conventions
//!
//! - Matrices are row-major `[[f64; N]; N]` arrays.
//! - Eigenvectors are returned as rows: `vectors[i]` belongs to `values[i]`.
//! - Eigenvalues come in descending order. Slots without a real eigenpair hold
//!   NaN, and the root classification tells which slots are meaningful.
//! - 3x3 eigenvector frames are orthonormal and right-handed.
//!
//! ## Example: diffusion tensor
//!
//! ```rust
//! use smalleig_eigen::{eigensolve3, CubicRoot};
//!
//! // prolate tensor, fast diffusion along x
//! let tensor = [[1.7, 0.0, 0.0], [0.0, 0.3, 0.0], [0.0, 0.0, 0.3]];
//! let eig = eigensolve3(&tensor, false);
//!
//! assert_eq!(eig.roots, CubicRoot::SingleDouble);
//! assert!((eig.values[0] - 1.7).abs() < 1e-12);
//! assert!((eig.vectors[0][0].abs() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Example: 6x6 Jacobi
//!
//! ```rust
//! use smalleig_eigen::{eigensolve6_sym, JacobiParams};
//!
//! let mut sym = [0.0; 21];
//! for k in [0, 6, 11, 15, 18, 20] {
//!     sym[k] = 2.0;
//! }
//! sym[1] = 1.0;
//!
//! let eig = eigensolve6_sym(&sym, &JacobiParams::default())?;
//! assert!((eig.values[0] - 3.0).abs() < 1e-12);
//! assert!((eig.values[5] - 1.0).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// 2x2 eigensolver.
pub mod eigen2;

/// General 3x3 eigensolver.
pub mod eigen3;

/// 3x3 eigensolver for matrices with a structurally zero third row and column.
pub mod eigen3_sub;

/// Error types for the eigensolvers.
pub mod error;

/// Jacobi eigensolver for symmetric 6x6 matrices.
pub mod jacobi6;

/// Nullspace helpers.
pub mod nullspace;

/// 3x3 singular value decomposition.
pub mod svd;

pub use eigen2::{eigensolve2, eigenvalues2, Eigen2};
pub use eigen3::{eigensolve3, eigenvalues3, Eigen3};
pub use eigen3_sub::{eigensolve3_sub, eigenvalues3_sub};
pub use error::EigenError;
pub use jacobi6::{eigensolve6_sym, Eigen6, JacobiParams};
pub use smalleig_roots::{CubicRoot, QuadraticRoot};
pub use svd::{svd3, Svd3};
