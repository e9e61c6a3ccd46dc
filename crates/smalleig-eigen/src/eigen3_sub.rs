//! Eigensolve of a 3x3 matrix whose third row and column are structurally zero.
//!
//! Only the upper-left 2x2 block carries data; the zero eigenvalue it implies
//! along z is always reported last, even when it breaks descending order.

use glam::DVec3;
use smalleig_algebra::{
    mat::{Mat2, Mat3, IDENTITY3},
    vec::{is_finite3, normalize3},
};
use smalleig_roots::{CubicRoot, CubicSolution};

use crate::{eigen3::Eigen3, nullspace::nullspace2_1d};

/// Threshold on the discriminant of the 2x2 block's characteristic polynomial.
pub const SUB_DISCRIMINANT_EPS: f64 = 1.0e-11;

/// Compute the eigenvalues of the upper-left 2x2 block of `m`, plus the implied zero.
///
/// The characteristic polynomial is `λ³ + A·λ² + B·λ`, so the two data-derived
/// eigenvalues come from the quadratic `λ² + A·λ + B` directly. The returned
/// classification counts the zero root:
///
/// * [`CubicRoot::Three`]: `[λ0, λ1, 0]` with `λ0 > λ1`;
/// * [`CubicRoot::SingleDouble`]: the block has a double eigenvalue, `[λ, λ, 0]`;
/// * [`CubicRoot::Single`]: the block's eigenvalues are complex, `[NaN, NaN, 0]`.
///
/// Entries of the third row and column are ignored.
pub fn eigenvalues3_sub(m: &Mat3) -> CubicSolution {
    let a = -m[0][0] - m[1][1];
    let b = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    let dsq = a * a - 4.0 * b;
    if dsq > SUB_DISCRIMINANT_EPS {
        let d = dsq.sqrt();
        CubicSolution {
            kind: CubicRoot::Three,
            roots: [(-a + d) / 2.0, (-a - d) / 2.0, 0.0],
        }
    } else if dsq < -SUB_DISCRIMINANT_EPS {
        CubicSolution {
            kind: CubicRoot::Single,
            roots: [f64::NAN, f64::NAN, 0.0],
        }
    } else {
        CubicSolution {
            kind: CubicRoot::SingleDouble,
            roots: [-a / 2.0, -a / 2.0, 0.0],
        }
    }
}

fn block_eigenvector(m: &Mat3, lambda: f64) -> DVec3 {
    let n: Mat2 = [[m[0][0] - lambda, m[0][1]], [m[1][0], m[1][1] - lambda]];
    nullspace2_1d(&n).extend(0.0)
}

fn eigenvectors3_sub(m: &Mat3, sol: &CubicSolution) -> [[f64; 3]; 3] {
    let vectors = match sol.kind {
        CubicRoot::Three => {
            let v0 = block_eigenvector(m, sol.roots[0]);
            let v1 = block_eigenvector(m, sol.roots[1]);
            let (v1, _) = normalize3(v1 - v1.dot(v0) * v0);
            // the cross product makes the frame right-handed by construction
            [v0.to_array(), v1.to_array(), v0.cross(v1).to_array()]
        }
        // any basis of the xy plane will do
        CubicRoot::SingleDouble | CubicRoot::Triple => IDENTITY3,
        CubicRoot::Single => [
            [f64::NAN, f64::NAN, 0.0],
            [f64::NAN, f64::NAN, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };
    if !vectors.iter().all(is_finite3) {
        log::debug!(
            "eigensolve3_sub: {} roots {:?} for block [{:?}, {:?}] give non-finite eigenvectors",
            sol.kind,
            sol.roots,
            &m[0][..2],
            &m[1][..2],
        );
    }
    vectors
}

/// Compute the eigenvalues and eigenvectors of a 3x3 matrix with zero third row and column.
///
/// The eigenvectors of the 2x2 block lie in the xy plane and the third one is
/// their cross product, which keeps the frame right-handed.
///
/// Example:
///
/// ```
/// use smalleig_eigen::eigen3_sub::eigensolve3_sub;
///
/// let eig = eigensolve3_sub(&[[-1.0, 0.0, 0.0], [0.0, -3.0, 0.0], [0.0, 0.0, 0.0]]);
/// // the structural zero is last even though it is the largest eigenvalue
/// assert_eq!(eig.values, [-1.0, -3.0, 0.0]);
/// ```
pub fn eigensolve3_sub(m: &Mat3) -> Eigen3 {
    let sol = eigenvalues3_sub(m);
    let vectors = eigenvectors3_sub(m, &sol);
    Eigen3 {
        roots: sol.kind,
        values: sol.roots,
        vectors,
    }
}
