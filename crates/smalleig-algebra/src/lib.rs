#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Matrices are row-major `[[f64; N]; N]` arrays so they can live on the stack
//! and be handed around by value. Vector arithmetic goes through the `glam`
//! double precision types.

/// Fixed-size matrix helpers.
pub mod mat;

/// Fixed-size vector helpers.
pub mod vec;

pub use glam::{DVec2, DVec3};
pub use mat::{Mat2, Mat3};
