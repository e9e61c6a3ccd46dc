use glam::{DVec2, DVec3};

/// Normalize a 3D vector and return it together with its length before normalization.
///
/// A zero vector produces NaN components; callers are expected to only
/// normalize vectors that are non-zero by construction.
///
/// Example:
///
/// ```
/// use smalleig_algebra::{vec::normalize3, DVec3};
///
/// let (unit, len) = normalize3(DVec3::new(3.0, 0.0, 4.0));
/// assert_eq!(len, 5.0);
/// assert_eq!(unit, DVec3::new(0.6, 0.0, 0.8));
/// ```
#[inline]
pub fn normalize3(v: DVec3) -> (DVec3, f64) {
    let len = v.length();
    (v / len, len)
}

/// Normalize a 2D vector and return it together with its length before normalization.
#[inline]
pub fn normalize2(v: DVec2) -> (DVec2, f64) {
    let len = v.length();
    (v / len, len)
}

/// Compute a vector perpendicular to a non-zero vector `v`.
///
/// The largest magnitude component is swapped with its cyclic successor and
/// one of them is negated; the third component is zeroed. The result is not
/// normalized.
pub fn perp3(v: DVec3) -> DVec3 {
    let a = v.abs();
    let i = if a.x >= a.y && a.x >= a.z {
        0
    } else if a.y >= a.z {
        1
    } else {
        2
    };
    let j = (i + 1) % 3;
    let mut p = DVec3::ZERO;
    p[i] = -v[j];
    p[j] = v[i];
    p
}

/// Return true when every component of the vector is finite.
#[inline]
pub fn is_finite3(v: &[f64; 3]) -> bool {
    v.iter().all(|x| x.is_finite())
}
