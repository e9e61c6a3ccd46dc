//! Nullspace extraction for matrices that are singular by construction.
//!
//! The eigensolvers form `M - λ·I` for an eigenvalue `λ` of `M`; that matrix
//! has a one or two dimensional nullspace which holds the eigenvectors.

use glam::{DVec2, DVec3};
use smalleig_algebra::{
    mat::{rows2, rows3, Mat2, Mat3},
    vec::{normalize2, normalize3, perp3},
};

/// Unit vector spanning the one dimensional nullspace of a singular 2x2 matrix.
///
/// The two rows are combined into the (effectively one dimensional) row
/// direction, which is then rotated by 90 degrees.
///
/// PRECONDITION: the matrix is non-zero, otherwise the result is NaN.
pub fn nullspace2_1d(n: &Mat2) -> DVec2 {
    let [r0, r1] = rows2(n);
    let rowv = if r0.dot(r1) > 0.0 { r0 + r1 } else { r0 - r1 };
    let (ans, _) = normalize2(DVec2::new(rowv.y, -rowv.x));
    ans
}

// Flip the two shorter vectors so that they point in the same half space as the
// longest one; the two shorter ones are not guaranteed to agree with each other.
fn align3(v: &mut [DVec3; 3]) {
    let d = v.map(|x| x.length_squared());
    let longest = if d[0] > d[1] {
        if d[0] > d[2] {
            0
        } else {
            2
        }
    } else if d[1] > d[2] {
        1
    } else {
        2
    };
    for other in [(longest + 1) % 3, (longest + 2) % 3] {
        if v[longest].dot(v[other]) < 0.0 {
            v[other] = -v[other];
        }
    }
}

/// Unit vector spanning the one dimensional nullspace of a rank-2 3x3 matrix.
///
/// Every pairwise cross product of the rows is perpendicular to the row space.
/// After aligning their signs they are summed, so the longest (hence the most
/// accurate) one dominates.
pub fn nullspace3_1d(n: &Mat3) -> DVec3 {
    let [r0, r1, r2] = rows3(n);
    let mut t = [r0.cross(r1), r0.cross(r2), r1.cross(r2)];
    align3(&mut t);
    let (ans, _) = normalize3(t[0] + t[1] + t[2]);
    ans
}

/// Orthonormal pair spanning the two dimensional nullspace of a rank-1 3x3 matrix.
///
/// The aligned rows give the direction of the row space; any two orthonormal
/// vectors perpendicular to it span the nullspace.
pub fn nullspace3_2d(n: &Mat3) -> (DVec3, DVec3) {
    let mut rows = rows3(n);
    align3(&mut rows);
    let (dir, _) = normalize3(rows[0] + rows[1] + rows[2]);
    let (ans0, _) = normalize3(perp3(dir));
    let ans1 = dir.cross(ans0);
    (ans0, ans1)
}

/// Make the three vectors mutually orthogonal.
///
/// `v[0]` is left untouched, `v[1]` is corrected against `v[0]` and `v[2]`
/// against both; the magnitudes of all vectors are preserved.
pub(crate) fn enforce_orthogonality3(v: &mut [DVec3; 3]) {
    let d00 = v[0].length_squared();
    let d10 = v[1].dot(v[0]);
    let d11 = v[1].length_squared();
    let tv = v[1] - (d10 / d00) * v[0];
    v[1] = tv * (d11 / tv.length_squared()).sqrt();

    let d11 = v[1].length_squared();
    let d20 = v[2].dot(v[0]);
    let d21 = v[2].dot(v[1]);
    let d22 = v[2].length_squared();
    let tv = v[2] - (d20 / d00) * v[0] - (d21 / d11) * v[1];
    v[2] = tv * (d22 / tv.length_squared()).sqrt();
}

/// Flip `v[2]` if needed so that `(v[0] × v[1]) · v[2] > 0`.
pub(crate) fn make_right_handed3(v: &mut [DVec3; 3]) {
    if v[0].cross(v[1]).dot(v[2]) < 0.0 {
        v[2] = -v[2];
    }
}
