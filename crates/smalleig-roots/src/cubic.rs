use std::f64::consts::PI;

use crate::types::CubicRoot;

/// Threshold on the cubic discriminant (and on `Q` for the triple root test).
pub const CUBIC_EPS: f64 = 1.0e-11;

const NEWTON_MAX_STEPS: usize = 8;

/// Roots of a monic cubic polynomial together with their classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSolution {
    /// Structure of the roots.
    pub kind: CubicRoot,
    /// Real roots in descending order. For [`CubicRoot::Single`] only
    /// `roots[0]` is defined and the other slots are NaN.
    pub roots: [f64; 3],
}

impl CubicSolution {
    /// The real roots only, in descending order.
    pub fn real_roots(&self) -> &[f64] {
        &self.roots[..self.kind.real_count()]
    }
}

/// Find the real roots of the monic cubic `x³ + a·x² + b·x + c`.
///
/// Three distinct roots are found with the trigonometric method, a single
/// real root with Cardano's formula. When the discriminant is within
/// [`CUBIC_EPS`] of zero the roots are reported as a triple root or as a
/// single plus a double root; both slots of a double root hold the exact same
/// value.
///
/// # Arguments
///
/// * `a`, `b`, `c` - Coefficients of the monic cubic.
/// * `newton` - Polish every real root with a few guarded Newton steps.
///
/// Example:
///
/// ```
/// use smalleig_roots::{solve_cubic, CubicRoot};
///
/// // (x - 1)(x - 2)(x - 3)
/// let sol = solve_cubic(-6.0, 11.0, -6.0, false);
/// assert_eq!(sol.kind, CubicRoot::Three);
/// assert!((sol.roots[0] - 3.0).abs() < 1e-12);
/// ```
pub fn solve_cubic(a: f64, b: f64, c: f64, newton: bool) -> CubicSolution {
    let shift = a / 3.0;
    let aa = a * a;
    let q = (aa - 3.0 * b) / 9.0;
    let r = (2.0 * a * aa - 9.0 * a * b + 27.0 * c) / 54.0;
    let qqq = q * q * q;
    let d = r * r - qqq;

    let mut sol = if d < -CUBIC_EPS {
        // d < 0 implies q > 0, so the square roots are real
        let theta = (r / qqq.sqrt()).clamp(-1.0, 1.0).acos();
        let t = -2.0 * q.sqrt();
        CubicSolution {
            kind: CubicRoot::Three,
            roots: [
                t * (theta / 3.0).cos() - shift,
                t * ((theta + 2.0 * PI) / 3.0).cos() - shift,
                t * ((theta - 2.0 * PI) / 3.0).cos() - shift,
            ],
        }
    } else if d > CUBIC_EPS {
        let s = -r.signum() * (r.abs() + d.sqrt()).cbrt();
        let t = if s != 0.0 { q / s } else { 0.0 };
        CubicSolution {
            kind: CubicRoot::Single,
            roots: [s + t - shift, f64::NAN, f64::NAN],
        }
    } else if q.abs() < CUBIC_EPS {
        CubicSolution {
            kind: CubicRoot::Triple,
            roots: [-shift; 3],
        }
    } else {
        let u = r.cbrt();
        let single = -2.0 * u - shift;
        let double = u - shift;
        CubicSolution {
            kind: CubicRoot::SingleDouble,
            roots: [single, double, double],
        }
    };

    if newton {
        for root in sol.roots.iter_mut().filter(|x| x.is_finite()) {
            *root = newton_polish(a, b, c, *root);
        }
    }
    if sol.kind != CubicRoot::Single {
        sol.roots.sort_by(|x, y| y.total_cmp(x));
    }
    sol
}

// Newton iterations that are only accepted while they shrink the residual.
fn newton_polish(a: f64, b: f64, c: f64, mut x: f64) -> f64 {
    let f = |x: f64| ((x + a) * x + b) * x + c;
    let df = |x: f64| (3.0 * x + 2.0 * a) * x + b;
    let mut fx = f(x);
    for _ in 0..NEWTON_MAX_STEPS {
        let slope = df(x);
        if fx == 0.0 || slope == 0.0 {
            break;
        }
        let next = x - fx / slope;
        let f_next = f(next);
        if f_next.abs() >= fx.abs() {
            break;
        }
        x = next;
        fx = f_next;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // coefficients of (x - r0)(x - r1)(x - r2)
    fn from_roots(r: [f64; 3]) -> (f64, f64, f64) {
        (
            -(r[0] + r[1] + r[2]),
            r[0] * r[1] + r[0] * r[2] + r[1] * r[2],
            -r[0] * r[1] * r[2],
        )
    }

    #[test]
    fn test_three_distinct() {
        let sol = solve_cubic(-6.0, 11.0, -6.0, false);
        assert_eq!(sol.kind, CubicRoot::Three);
        assert_relative_eq!(sol.roots[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(sol.roots[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(sol.roots[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_real_root() {
        // (x - 1)(x^2 + 1)
        let sol = solve_cubic(-1.0, 1.0, -1.0, false);
        assert_eq!(sol.kind, CubicRoot::Single);
        assert_relative_eq!(sol.roots[0], 1.0, epsilon = 1e-12);
        assert!(sol.roots[1].is_nan());
        assert!(sol.roots[2].is_nan());
        assert_eq!(sol.real_roots().len(), 1);

        let sol = solve_cubic(0.0, 0.0, -1.0, false);
        assert_eq!(sol.kind, CubicRoot::Single);
        assert_relative_eq!(sol.roots[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triple() {
        let sol = solve_cubic(-6.0, 12.0, -8.0, false);
        assert_eq!(sol.kind, CubicRoot::Triple);
        assert_eq!(sol.roots, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_single_double() {
        // (x - 1)^2 (x - 2): double root below the single one
        let sol = solve_cubic(-4.0, 5.0, -2.0, false);
        assert_eq!(sol.kind, CubicRoot::SingleDouble);
        assert_relative_eq!(sol.roots[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(sol.roots[1], 1.0, epsilon = 1e-12);
        assert_eq!(sol.roots[1], sol.roots[2]);

        // (x - 2)^2 (x - 1): double root above the single one
        let sol = solve_cubic(-5.0, 8.0, -4.0, false);
        assert_eq!(sol.kind, CubicRoot::SingleDouble);
        assert_eq!(sol.roots[0], sol.roots[1]);
        assert_relative_eq!(sol.roots[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(sol.roots[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_newton_keeps_double_roots_equal() {
        let sol = solve_cubic(-4.0, 5.0, -2.0, true);
        assert_eq!(sol.kind, CubicRoot::SingleDouble);
        assert_eq!(sol.roots[1], sol.roots[2]);
        assert_relative_eq!(sol.roots[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_distinct_roots() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut expected: [f64; 3] = [
                rng.random_range(-1.0..-0.4),
                rng.random_range(-0.2..0.2),
                rng.random_range(0.4..1.0),
            ];
            let (a, b, c) = from_roots(expected);
            expected.sort_by(|x, y| y.total_cmp(x));
            for newton in [false, true] {
                let sol = solve_cubic(a, b, c, newton);
                assert_eq!(sol.kind, CubicRoot::Three);
                for (x, e) in sol.roots.iter().zip(expected.iter()) {
                    assert_relative_eq!(*x, *e, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_newton_does_not_increase_residual() {
        let mut rng = StdRng::seed_from_u64(11);
        let f = |a: f64, b: f64, c: f64, x: f64| ((x + a) * x + b) * x + c;
        for _ in 0..200 {
            let a: f64 = rng.random_range(-3.0..3.0);
            let b: f64 = rng.random_range(-3.0..3.0);
            let c: f64 = rng.random_range(-3.0..3.0);
            let raw = solve_cubic(a, b, c, false);
            let polished = solve_cubic(a, b, c, true);
            assert_eq!(raw.kind, polished.kind);
            let raw_res: f64 = raw.real_roots().iter().map(|x| f(a, b, c, *x).abs()).sum();
            let pol_res: f64 = polished
                .real_roots()
                .iter()
                .map(|x| f(a, b, c, *x).abs())
                .sum();
            assert!(pol_res <= raw_res + 1e-15);
            assert!(pol_res < 1e-8);
        }
    }
}
