//! Singular value decomposition of 3x3 matrices built on the 3x3 eigensolver.
//!
//! For any matrix `M`:
//!
//! ```text
//! M = U · diag(s) · V
//! ```
//!
//! * the singular values `s` are the square roots of the eigenvalues of `M·Mᵗ`;
//! * the columns of `U` are the eigenvectors of `M·Mᵗ`;
//! * the rows of `V` are the eigenvectors of `Mᵗ·M`.
//!
//! `M·Mᵗ` and `Mᵗ·M` share their eigenvalues, so they are only computed once.

use glam::DVec3;
use smalleig_algebra::mat::{mat3_mul_vec3, matmul3, transpose3, Mat3};
use smalleig_roots::{CubicRoot, CubicSolution};

use crate::eigen3::{eigensolve3, eigenvectors3};

/// Singular values below this fraction of the largest one are treated as zero
/// when matching right singular vectors to left ones.
pub const SVD_RANK_EPS: f64 = 1.0e-10;

/// Singular value decomposition `M = U · diag(s) · V` of a 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Svd3 {
    /// Structure of the eigenvalues of `M·Mᵗ`.
    pub roots: CubicRoot,
    /// Left singular vectors as columns.
    pub u: Mat3,
    /// Singular values in descending order.
    pub s: [f64; 3],
    /// Right singular vectors as rows.
    pub v: Mat3,
}

impl Svd3 {
    /// Multiply the factors back together, `U · diag(s) · V`.
    pub fn reconstruct(&self) -> Mat3 {
        let mut us = self.u;
        for row in us.iter_mut() {
            for (x, s) in row.iter_mut().zip(self.s) {
                *x *= s;
            }
        }
        matmul3(&us, &self.v)
    }
}

/// Compute the singular value decomposition of a 3x3 matrix.
///
/// Negative eigenvalues of `M·Mᵗ` caused by rounding are not clamped, so a
/// singular value of a rank deficient matrix may come out as NaN.
///
/// After the eigenvector pass on `Mᵗ·M`, every right singular vector with a
/// non-negligible singular value is matched to `Mᵗ·uᵢ / sᵢ`: for distinct
/// singular values only its sign is flipped, for repeated ones it is replaced,
/// since any basis of the repeated eigenspace is otherwise unrelated to `U`.
///
/// # Arguments
///
/// * `m` - Row-major 3x3 matrix.
/// * `newton` - Polish the eigenvalues with Newton iterations.
///
/// Example:
///
/// ```
/// use smalleig_eigen::svd::svd3;
///
/// let m = [[1.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 2.0]];
/// let svd = svd3(&m, false);
/// assert!((svd.s[0] - 3.0).abs() < 1e-12);
/// assert!((svd.s[2] - 1.0).abs() < 1e-12);
/// ```
pub fn svd3(m: &Mat3, newton: bool) -> Svd3 {
    let trn = transpose3(m);
    let left = eigensolve3(&matmul3(m, &trn), newton);
    let s = left.values.map(f64::sqrt);
    let u = transpose3(&left.vectors);

    let shared = CubicSolution {
        kind: left.roots,
        roots: left.values,
    };
    let right = eigenvectors3(&matmul3(&trn, m), &shared);
    let mut v = right.vectors;
    match_right_vectors(&mut v, &trn, &left.vectors, &s, left.roots);

    Svd3 {
        roots: left.roots,
        u,
        s,
        v,
    }
}

fn match_right_vectors(v: &mut Mat3, trn: &Mat3, left: &Mat3, s: &[f64; 3], roots: CubicRoot) {
    let s_max = s[0];
    for i in 0..3 {
        // also skips NaN singular values
        if !(s[i] > SVD_RANK_EPS * s_max) {
            continue;
        }
        let target = mat3_mul_vec3(trn, DVec3::from_array(left[i])) / s[i];
        let current = DVec3::from_array(v[i]);
        v[i] = match roots {
            CubicRoot::Three if current.dot(target) < 0.0 => (-current).to_array(),
            CubicRoot::Three => v[i],
            _ => target.to_array(),
        };
    }
}
