//! Jacobi diagonalization of symmetric 6x6 matrices.

use crate::error::EigenError;

/// Symmetric 6x6 matrix of which only the upper triangle is read and written.
type Sym6 = [[f64; 6]; 6];

/// Parameters of the 6x6 Jacobi eigensolver.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JacobiParams {
    /// Convergence threshold on `sum|off-diagonal| / sum|diagonal|`.
    pub eps: f64,
    /// Maximum number of rotations, unlimited if `None`.
    pub max_iterations: Option<usize>,
    /// Accumulate the rotations into eigenvectors.
    pub compute_vectors: bool,
}

impl Default for JacobiParams {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            max_iterations: None,
            compute_vectors: true,
        }
    }
}

/// Eigensystem of a symmetric 6x6 matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eigen6 {
    /// Eigenvalues in descending order.
    pub values: [f64; 6],
    /// Eigenvectors as rows, if requested.
    pub vectors: Option<[[f64; 6]; 6]>,
    /// Number of Jacobi rotations performed.
    pub iterations: usize,
    /// False if the iteration budget ran out before the threshold was met.
    pub converged: bool,
}

fn load_upper(sym: &[f64; 21]) -> Sym6 {
    let mut m = [[0.0; 6]; 6];
    let mut values = sym.iter();
    for (r, row) in m.iter_mut().enumerate() {
        for (x, v) in row[r..].iter_mut().zip(&mut values) {
            *x = *v;
        }
    }
    m
}

#[inline]
fn at(m: &Sym6, r: usize, c: usize) -> f64 {
    m[r.min(c)][r.max(c)]
}

#[inline]
fn set(m: &mut Sym6, r: usize, c: usize, value: f64) {
    m[r.min(c)][r.max(c)] = value;
}

fn identity6() -> [[f64; 6]; 6] {
    let mut m = [[0.0; 6]; 6];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

struct Scan {
    sumon: f64,
    sumoff: f64,
    // largest off-diagonal entry, none if all of them are NaN
    pivot: Option<(usize, usize)>,
}

fn scan(m: &Sym6) -> Scan {
    let sumon = (0..6).map(|i| m[i][i].abs()).sum();
    let mut sumoff = 0.0;
    let mut maxm = -1.0;
    let mut pivot = None;
    for (r, row) in m.iter().enumerate().take(5) {
        for (c, x) in row.iter().enumerate().skip(r + 1) {
            let x = x.abs();
            sumoff += x;
            if x > maxm {
                maxm = x;
                pivot = Some((r, c));
            }
        }
    }
    Scan {
        sumon,
        sumoff,
        pivot,
    }
}

/// Plane rotation zeroing the `(p, q)` entry.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    p: usize,
    q: usize,
    t: f64,
    c: f64,
    s: f64,
}

impl Rotation {
    fn new(m: &Sym6, p: usize, q: usize) -> Self {
        let theta = (m[q][q] - m[p][p]) / (2.0 * m[p][q]);
        let sign = if theta > 0.0 { 1.0 } else { -1.0 };
        let t = sign / (theta.abs() + (theta * theta + 1.0).sqrt());
        let c = 1.0 / (t * t + 1.0).sqrt();
        Self { p, q, t, c, s: c * t }
    }

    /// Write the rotated `cur` into `next`; `cur` is never written.
    fn apply(&self, cur: &Sym6, next: &mut Sym6) {
        let Self { p, q, t, c, s } = *self;
        *next = *cur;
        for r in (0..6).filter(|&r| r != p && r != q) {
            let (rp, rq) = (at(cur, r, p), at(cur, r, q));
            set(next, r, p, c * rp - s * rq);
            set(next, r, q, s * rp + c * rq);
        }
        next[p][p] = cur[p][p] - t * cur[p][q];
        next[q][q] = cur[q][q] + t * cur[p][q];
        next[p][q] = 0.0;
    }

    /// Rotate rows `p` and `q` of the accumulated eigenvectors.
    fn apply_vectors(&self, cur: &[[f64; 6]; 6], next: &mut [[f64; 6]; 6]) {
        let Self { p, q, c, s, .. } = *self;
        *next = *cur;
        for k in 0..6 {
            next[p][k] = c * cur[p][k] - s * cur[q][k];
            next[q][k] = s * cur[p][k] + c * cur[q][k];
        }
    }
}

/// Compute the eigensystem of a symmetric 6x6 matrix with Jacobi rotations.
///
/// Each iteration rotates away the largest off-diagonal entry, reading from
/// one generation of the matrix and writing the next, until the ratio of the
/// summed absolute off-diagonal entries to the summed absolute diagonal
/// entries is no larger than `params.eps`.
///
/// # Arguments
///
/// * `sym` - The 21 entries of the upper triangle, diagonal included, in row-major order.
/// * `params` - Convergence threshold, iteration budget and whether to track eigenvectors.
///
/// # Returns
///
/// Eigenvalues in descending order with the matching eigenvectors as rows.
///
/// # Errors
///
/// [`EigenError::InvalidTolerance`] if `params.eps` is negative or NaN.
///
/// Example:
///
/// ```
/// use smalleig_eigen::jacobi6::{eigensolve6_sym, JacobiParams};
///
/// let mut sym = [0.0; 21];
/// for (i, k) in [0, 6, 11, 15, 18, 20].into_iter().enumerate() {
///     sym[k] = i as f64;
/// }
/// let eig = eigensolve6_sym(&sym, &JacobiParams::default()).unwrap();
/// assert_eq!(eig.values, [5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
/// assert_eq!(eig.iterations, 0);
/// ```
pub fn eigensolve6_sym(sym: &[f64; 21], params: &JacobiParams) -> Result<Eigen6, EigenError> {
    if !(params.eps >= 0.0) {
        return Err(EigenError::InvalidTolerance(params.eps));
    }

    let mut mat = load_upper(sym);
    let mut mat_next = mat;
    let mut evec = identity6();
    let mut evec_next = evec;

    let mut iterations = 0;
    let mut converged = true;
    let mut state = scan(&mat);
    while state.sumoff / state.sumon > params.eps {
        let Some((p, q)) = state.pivot else {
            break;
        };
        if params.max_iterations.is_some_and(|max| iterations >= max) {
            log::warn!(
                "jacobi stopped after {iterations} rotations, off/on = {:e}",
                state.sumoff / state.sumon
            );
            converged = false;
            break;
        }

        let rot = Rotation::new(&mat, p, q);
        log::trace!(
            "jacobi rotation {iterations}: pivot ({p}, {q}), off/on = {:e}",
            state.sumoff / state.sumon
        );
        rot.apply(&mat, &mut mat_next);
        std::mem::swap(&mut mat, &mut mat_next);
        if params.compute_vectors {
            rot.apply_vectors(&evec, &mut evec_next);
            std::mem::swap(&mut evec, &mut evec_next);
        }

        iterations += 1;
        state = scan(&mat);
    }
    log::debug!(
        "jacobi finished after {iterations} rotations, off/on = {:e}",
        state.sumoff / state.sumon
    );

    let mut order: [(f64, usize); 6] = std::array::from_fn(|i| (mat[i][i], i));
    order.sort_by(|a, b| b.0.total_cmp(&a.0));

    Ok(Eigen6 {
        values: order.map(|(value, _)| value),
        vectors: params
            .compute_vectors
            .then(|| order.map(|(_, index)| evec[index])),
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pack_upper(m: &[[f64; 6]; 6]) -> [f64; 21] {
        let mut sym = [0.0; 21];
        let mut k = 0;
        for (r, row) in m.iter().enumerate() {
            for x in &row[r..] {
                sym[k] = *x;
                k += 1;
            }
        }
        sym
    }

    fn random_symmetric(rng: &mut StdRng) -> [[f64; 6]; 6] {
        let mut m = [[0.0; 6]; 6];
        for r in 0..6 {
            for c in r..6 {
                let x: f64 = rng.random_range(-1.0..1.0);
                m[r][c] = x;
                m[c][r] = x;
            }
        }
        m
    }

    // random orthonormal rows by Gram-Schmidt
    fn random_orthonormal(rng: &mut StdRng) -> [[f64; 6]; 6] {
        let mut v = [[0.0; 6]; 6];
        for i in 0..6 {
            let mut row: [f64; 6] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
            for prev in &v[..i] {
                let d: f64 = row.iter().zip(prev).map(|(a, b)| a * b).sum();
                for (x, y) in row.iter_mut().zip(prev) {
                    *x -= d * y;
                }
            }
            let len = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            v[i] = row.map(|x| x / len);
        }
        v
    }

    fn mat_vec(m: &[[f64; 6]; 6], v: &[f64; 6]) -> [f64; 6] {
        std::array::from_fn(|r| m[r].iter().zip(v).map(|(a, b)| a * b).sum())
    }

    #[test]
    fn test_identity_needs_no_rotation() {
        let mut sym = [0.0; 21];
        for k in [0, 6, 11, 15, 18, 20] {
            sym[k] = 1.0;
        }
        let eig = eigensolve6_sym(&sym, &JacobiParams::default()).unwrap();
        assert_eq!(eig.values, [1.0; 6]);
        assert_eq!(eig.iterations, 0);
        assert!(eig.converged);
        assert_eq!(eig.vectors, Some(identity6()));
    }

    #[test]
    fn test_zero_matrix() {
        let eig = eigensolve6_sym(&[0.0; 21], &JacobiParams::default()).unwrap();
        assert_eq!(eig.values, [0.0; 6]);
        assert_eq!(eig.iterations, 0);
    }

    #[test]
    fn test_single_rotation() {
        // [[2, 1], [1, 2]] block has eigenvalues 3 and 1
        let mut m = identity6();
        m[0][0] = 2.0;
        m[1][1] = 2.0;
        m[0][1] = 1.0;
        m[1][0] = 1.0;
        let eig = eigensolve6_sym(&pack_upper(&m), &JacobiParams::default()).unwrap();
        assert_eq!(eig.iterations, 1);
        assert_relative_eq!(eig.values[0], 3.0, epsilon = 1e-14);
        assert_relative_eq!(eig.values[5], 1.0, epsilon = 1e-14);
        let v = eig.vectors.unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(v[0][0].abs(), h, epsilon = 1e-14);
        assert_relative_eq!(v[0][1], v[0][0], epsilon = 1e-14);
    }

    #[test]
    fn test_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(7);
        let lambda = [6.0, 4.5, 3.0, 1.0, -0.5, -2.0];
        for _ in 0..50 {
            let v = random_orthonormal(&mut rng);
            // m = vᵗ · diag(lambda) · v
            let m: [[f64; 6]; 6] = std::array::from_fn(|r| {
                std::array::from_fn(|c| (0..6).map(|k| v[k][r] * lambda[k] * v[k][c]).sum())
            });
            let params = JacobiParams {
                eps: 1e-12,
                ..Default::default()
            };
            let eig = eigensolve6_sym(&pack_upper(&m), &params).unwrap();
            assert!(eig.converged);
            for (value, expected) in eig.values.iter().zip(lambda) {
                assert_relative_eq!(*value, expected, epsilon = 1e-9);
            }
            assert_relative_eq!(
                eig.values.iter().product::<f64>(),
                lambda.iter().product::<f64>(),
                epsilon = 1e-8
            );
            let vectors = eig.vectors.unwrap();
            for (i, row) in vectors.iter().enumerate() {
                // same direction as the known eigenvector, up to sign
                let d: f64 = row.iter().zip(&v[i]).map(|(a, b)| a * b).sum();
                assert_relative_eq!(d.abs(), 1.0, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_random_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let m = random_symmetric(&mut rng);
            let eig = eigensolve6_sym(&pack_upper(&m), &JacobiParams::default()).unwrap();
            assert!(eig.values.windows(2).all(|w| w[0] >= w[1]));
            let trace: f64 = (0..6).map(|i| m[i][i]).sum();
            assert_relative_eq!(eig.values.iter().sum::<f64>(), trace, epsilon = 1e-9);
            let vectors = eig.vectors.unwrap();
            for (value, row) in eig.values.iter().zip(&vectors) {
                let mv = mat_vec(&m, row);
                for (a, b) in mv.iter().zip(row) {
                    assert_relative_eq!(*a, value * b, epsilon = 1e-7);
                }
            }
        }
    }

    #[test]
    fn test_values_without_vectors() {
        let mut rng = StdRng::seed_from_u64(3);
        let sym = pack_upper(&random_symmetric(&mut rng));
        let with = eigensolve6_sym(&sym, &JacobiParams::default()).unwrap();
        let params = JacobiParams {
            compute_vectors: false,
            ..Default::default()
        };
        let without = eigensolve6_sym(&sym, &params).unwrap();
        assert_eq!(without.vectors, None);
        assert_eq!(without.values, with.values);
        assert_eq!(without.iterations, with.iterations);
    }

    #[test]
    fn test_iteration_budget() {
        let mut rng = StdRng::seed_from_u64(5);
        let sym = pack_upper(&random_symmetric(&mut rng));
        let params = JacobiParams {
            max_iterations: Some(1),
            ..Default::default()
        };
        let eig = eigensolve6_sym(&sym, &params).unwrap();
        assert_eq!(eig.iterations, 1);
        assert!(!eig.converged);
    }

    #[test]
    fn test_invalid_tolerance() {
        let params = JacobiParams {
            eps: -1.0,
            ..Default::default()
        };
        assert_eq!(
            eigensolve6_sym(&[0.0; 21], &params),
            Err(EigenError::InvalidTolerance(-1.0))
        );
        let params = JacobiParams {
            eps: f64::NAN,
            ..Default::default()
        };
        assert!(eigensolve6_sym(&[0.0; 21], &params).is_err());
    }
}
