use smalleig_algebra::mat::{sub_diagonal2, Mat2};
use smalleig_roots::{solve_quadratic, QuadraticRoot, QuadraticSolution};

use crate::nullspace::nullspace2_1d;

/// Eigensystem of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eigen2 {
    /// Structure of the eigenvalues.
    pub roots: QuadraticRoot,
    /// Eigenvalues in descending order, or for [`QuadraticRoot::Complex`] the
    /// real part and imaginary magnitude of the conjugate pair.
    pub values: [f64; 2],
    /// Unit eigenvectors stored as rows, `vectors[i]` belongs to `values[i]`.
    /// `None` when the eigenvalues are complex.
    pub vectors: Option<[[f64; 2]; 2]>,
}

/// Compute the eigenvalues of a 2x2 matrix, which may be asymmetric.
///
/// The eigenvalues are the roots of the characteristic polynomial
/// `λ² - (m00 + m11)·λ + (m00·m11 - m01·m10)`.
pub fn eigenvalues2(m: &Mat2) -> QuadraticSolution {
    let b = -m[0][0] - m[1][1];
    let c = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    solve_quadratic(1.0, b, c)
}

/// Compute the eigenvalues and eigenvectors of a 2x2 matrix, which may be asymmetric.
///
/// For a double eigenvalue the eigenvector is recovered from `M - λ·I` when
/// that matrix is non-zero and stored in both slots; an isotropic matrix gets
/// the standard basis. Complex eigenvalues have no real eigenvectors.
///
/// Example:
///
/// ```
/// use smalleig_eigen::eigen2::eigensolve2;
///
/// let eig = eigensolve2(&[[2.0, 1.0], [1.0, 2.0]]);
/// assert_eq!(eig.values, [3.0, 1.0]);
/// assert!(eig.vectors.is_some());
/// ```
pub fn eigensolve2(m: &Mat2) -> Eigen2 {
    let sol = eigenvalues2(m);
    let vectors = match sol.kind {
        QuadraticRoot::Two => Some([
            nullspace2_1d(&sub_diagonal2(m, sol.roots[0])).to_array(),
            nullspace2_1d(&sub_diagonal2(m, sol.roots[1])).to_array(),
        ]),
        QuadraticRoot::Double => {
            let nul = sub_diagonal2(m, sol.roots[0]);
            if nul.iter().flatten().map(|x| x * x).sum::<f64>() != 0.0 {
                // asymmetric: there is still one real direction to recover
                let v = nullspace2_1d(&nul).to_array();
                Some([v, v])
            } else {
                Some([[1.0, 0.0], [0.0, 1.0]])
            }
        }
        QuadraticRoot::Complex => None,
    };
    Eigen2 {
        roots: sol.kind,
        values: sol.roots,
        vectors,
    }
}
