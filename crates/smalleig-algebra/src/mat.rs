use glam::{DVec2, DVec3};

/// Row-major 2x2 matrix.
pub type Mat2 = [[f64; 2]; 2];

/// Row-major 3x3 matrix.
pub type Mat3 = [[f64; 3]; 3];

/// The 3x3 identity matrix.
pub const IDENTITY3: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Split a 3x3 matrix into its rows.
#[inline]
pub fn rows3(m: &Mat3) -> [DVec3; 3] {
    [
        DVec3::from_array(m[0]),
        DVec3::from_array(m[1]),
        DVec3::from_array(m[2]),
    ]
}

/// Build a 3x3 matrix from its rows.
#[inline]
pub fn from_rows3(rows: [DVec3; 3]) -> Mat3 {
    [rows[0].to_array(), rows[1].to_array(), rows[2].to_array()]
}

/// Split a 2x2 matrix into its rows.
#[inline]
pub fn rows2(m: &Mat2) -> [DVec2; 2] {
    [DVec2::from_array(m[0]), DVec2::from_array(m[1])]
}

/// Transpose a 3x3 matrix.
pub fn transpose3(m: &Mat3) -> Mat3 {
    let mut t = [[0.0; 3]; 3];
    for (r, row) in m.iter().enumerate() {
        for (c, val) in row.iter().enumerate() {
            t[c][r] = *val;
        }
    }
    t
}

/// Multiply two 3x3 matrices, `a * b`.
///
/// Example:
///
/// ```
/// use smalleig_algebra::mat::{matmul3, IDENTITY3};
///
/// let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
/// assert_eq!(matmul3(&a, &IDENTITY3), a);
/// ```
pub fn matmul3(a: &Mat3, b: &Mat3) -> Mat3 {
    let cols = rows3(&transpose3(b));
    let mut m = [[0.0; 3]; 3];
    for (row_out, row_a) in m.iter_mut().zip(rows3(a)) {
        for (val, col) in row_out.iter_mut().zip(cols.iter()) {
            *val = row_a.dot(*col);
        }
    }
    m
}

/// Multiply a 3x3 matrix with a column vector.
#[inline]
pub fn mat3_mul_vec3(m: &Mat3, v: DVec3) -> DVec3 {
    let [r0, r1, r2] = rows3(m);
    DVec3::new(r0.dot(v), r1.dot(v), r2.dot(v))
}

/// Scale every entry of a 3x3 matrix.
pub fn scale3(m: &Mat3, s: f64) -> Mat3 {
    m.map(|row| row.map(|x| x * s))
}

/// Frobenius norm (root of the sum of squared entries) of a 3x3 matrix.
pub fn frobenius_norm3(m: &Mat3) -> f64 {
    m.iter().flatten().map(|x| x * x).sum::<f64>().sqrt()
}

/// Trace of a 3x3 matrix.
#[inline]
pub fn trace3(m: &Mat3) -> f64 {
    m[0][0] + m[1][1] + m[2][2]
}

/// Determinant of a 3x3 matrix.
#[inline]
pub fn det3(m: &Mat3) -> f64 {
    let [r0, r1, r2] = rows3(m);
    r0.dot(r1.cross(r2))
}

/// Compute `m - lambda * I`.
pub fn sub_diagonal3(m: &Mat3, lambda: f64) -> Mat3 {
    let mut n = *m;
    for (i, row) in n.iter_mut().enumerate() {
        row[i] -= lambda;
    }
    n
}

/// Compute `m - lambda * I` for a 2x2 matrix.
pub fn sub_diagonal2(m: &Mat2, lambda: f64) -> Mat2 {
    [[m[0][0] - lambda, m[0][1]], [m[1][0], m[1][1] - lambda]]
}
