use glam::DVec3;
use smalleig_algebra::{
    mat::{frobenius_norm3, from_rows3, scale3, sub_diagonal3, Mat3, IDENTITY3},
    vec::is_finite3,
};
use smalleig_roots::{solve_cubic, CubicRoot, CubicSolution};

use crate::nullspace::{
    enforce_orthogonality3, make_right_handed3, nullspace3_1d, nullspace3_2d,
};

/// Eigensystem of a 3x3 matrix.
///
/// Undefined slots (complex eigenvalues) hold NaN in both `values` and
/// `vectors`; use [`Eigen3::eigenpair`] to get only the defined ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eigen3 {
    /// Structure of the eigenvalues.
    pub roots: CubicRoot,
    /// Eigenvalues in descending order.
    pub values: [f64; 3],
    /// Unit eigenvectors stored as rows, `vectors[i]` belongs to `values[i]`.
    pub vectors: [[f64; 3]; 3],
}

impl Eigen3 {
    /// The `i`-th eigenvalue and eigenvector, if both are defined.
    pub fn eigenpair(&self, i: usize) -> Option<(f64, [f64; 3])> {
        let value = *self.values.get(i)?;
        let vector = self.vectors[i];
        (value.is_finite() && is_finite3(&vector)).then_some((value, vector))
    }

    /// Number of defined eigenpairs.
    pub fn real_count(&self) -> usize {
        (0..3).filter(|&i| self.eigenpair(i).is_some()).count()
    }
}

/// Compute the eigenvalues of a 3x3 matrix, which may be asymmetric.
///
/// The matrix is first divided by its Frobenius norm so that the cubic
/// solver sees coefficients of order one, and the roots are scaled back
/// afterwards. Without it very large tensors overflow to NaN eigenvalues and
/// very small ones have separate roots mistaken for a double root.
///
/// # Arguments
///
/// * `m` - Row-major 3x3 matrix.
/// * `newton` - Polish the roots with Newton iterations.
pub fn eigenvalues3(m: &Mat3, newton: bool) -> CubicSolution {
    let frob = frobenius_norm3(m);
    let scale = if frob != 0.0 { 1.0 / frob } else { 1.0 };
    let n = scale3(m, scale);

    // det(x·I - n) = x³ + a·x² + b·x + c
    let a = -n[0][0] - n[1][1] - n[2][2];
    let b = n[0][0] * n[1][1] - n[1][0] * n[0][1] + n[0][0] * n[2][2] - n[2][0] * n[0][2]
        + n[1][1] * n[2][2]
        - n[2][1] * n[1][2];
    let c = (n[2][0] * n[1][1] - n[1][0] * n[2][1]) * n[0][2]
        + (n[0][0] * n[2][1] - n[2][0] * n[0][1]) * n[1][2]
        + (n[1][0] * n[0][1] - n[0][0] * n[1][1]) * n[2][2];

    let mut sol = solve_cubic(a, b, c, newton);
    sol.roots = sol.roots.map(|x| x / scale);
    sol
}

/// Compute eigenvectors of `m` for eigenvalues already found by [`eigenvalues3`].
///
/// Also used by the SVD, which knows the eigenvalues of `Mᵗ·M` from `M·Mᵗ`.
pub(crate) fn eigenvectors3(m: &Mat3, sol: &CubicSolution) -> Eigen3 {
    let null1 = |lambda: f64| nullspace3_1d(&sub_diagonal3(m, lambda));
    let null2 = |lambda: f64| nullspace3_2d(&sub_diagonal3(m, lambda));

    let mut values = sol.roots;
    let vectors = match sol.kind {
        CubicRoot::Three => {
            let mut v = [null1(values[0]), null1(values[1]), null1(values[2])];
            enforce_orthogonality3(&mut v);
            make_right_handed3(&mut v);
            from_rows3(v)
        }
        CubicRoot::SingleDouble => {
            values.sort_by(|x, y| y.total_cmp(x));
            let [e0, e1, e2] = values;
            let mut v = if e0 > e1 {
                // one big, two small: cigar
                let (v1, v2) = null2(e1);
                [null1(e0), v1, v2]
            } else {
                // two big, one small: pancake
                let (v0, v1) = null2(e0);
                [v0, v1, null1(e2)]
            };
            enforce_orthogonality3(&mut v);
            make_right_handed3(&mut v);
            from_rows3(v)
        }
        // any basis spans the eigenspace of a triple root
        CubicRoot::Triple => IDENTITY3,
        CubicRoot::Single => {
            values = [values[0], f64::NAN, f64::NAN];
            let nan = DVec3::NAN;
            from_rows3([null1(values[0]), nan, nan])
        }
    };

    Eigen3 {
        roots: sol.kind,
        values,
        vectors,
    }
}

/// Compute the eigenvalues and eigenvectors of a 3x3 matrix, which may be asymmetric.
///
/// # Arguments
///
/// * `m` - Row-major 3x3 matrix.
/// * `newton` - Polish the eigenvalues with Newton iterations.
///
/// # Returns
///
/// Eigenvalues in descending order with their eigenvectors as rows:
///
/// * three distinct eigenvalues: one nullspace vector per eigenvalue, made
///   mutually orthogonal and right-handed;
/// * a single and a double eigenvalue: a two dimensional nullspace for the
///   double one, then orthogonal and right-handed as above;
/// * a triple eigenvalue: the standard basis;
/// * one real eigenvalue: the other two slots are NaN.
///
/// Example:
///
/// ```
/// use smalleig_eigen::eigen3::eigensolve3;
/// use smalleig_roots::CubicRoot;
///
/// let eig = eigensolve3(&[[3.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]], false);
/// assert_eq!(eig.roots, CubicRoot::Three);
/// assert!((eig.values[0] - 3.0).abs() < 1e-12);
/// assert!((eig.vectors[0][0].abs() - 1.0).abs() < 1e-12);
/// ```
pub fn eigensolve3(m: &Mat3, newton: bool) -> Eigen3 {
    let sol = eigenvalues3(m, newton);
    eigenvectors3(m, &sol)
}
