use crate::types::QuadraticRoot;

/// Absolute threshold below which a negative discriminant is still treated as zero.
///
/// Not scale invariant: it only separates double roots from complex pairs
/// correctly for coefficients of order one.
pub const QUADRATIC_DISCRIMINANT_EPS: f64 = 1.0e-12;

/// Roots of a quadratic polynomial together with their classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticSolution {
    /// Structure of the roots.
    pub kind: QuadraticRoot,
    /// For real kinds the roots in descending order, for
    /// [`QuadraticRoot::Complex`] the real part and the imaginary magnitude.
    pub roots: [f64; 2],
}

/// Find the roots of `a·x² + b·x + c`.
///
/// # Arguments
///
/// * `a` - Quadratic coefficient, must be non-zero.
/// * `b` - Linear coefficient.
/// * `c` - Constant coefficient.
///
/// # Returns
///
/// The roots and their classification:
///
/// * [`QuadraticRoot::Two`]: `roots[0] > roots[1]`.
/// * [`QuadraticRoot::Double`]: `roots[0] == roots[1]`, also returned when the
///   discriminant is only very slightly negative.
/// * [`QuadraticRoot::Complex`]: the pair is `roots[0] ± i·roots[1]`.
///
/// PRECONDITION: `a != 0`; a zero leading coefficient divides by zero.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticSolution {
    let disc = b * b - 4.0 * a * c;
    if disc > 0.0 {
        let rd = disc.sqrt();
        let mut roots = [(-b + rd) / (2.0 * a), (-b - rd) / (2.0 * a)];
        if roots[0] < roots[1] {
            roots.swap(0, 1);
        }
        QuadraticSolution {
            kind: QuadraticRoot::Two,
            roots,
        }
    } else if disc < -QUADRATIC_DISCRIMINANT_EPS {
        QuadraticSolution {
            kind: QuadraticRoot::Complex,
            roots: [-b / (2.0 * a), (-disc).sqrt() / (2.0 * a)],
        }
    } else {
        let root = -b / (2.0 * a);
        QuadraticSolution {
            kind: QuadraticRoot::Double,
            roots: [root, root],
        }
    }
}
