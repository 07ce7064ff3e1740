use nalgebra::{Matrix2, Rotation2, Vector2};

/// Rotate `p` about the origin by `degrees` (counter-clockwise).
#[inline]
pub fn rotate_deg(p: Vector2<f64>, degrees: f64) -> Vector2<f64> {
    Rotation2::new(degrees.to_radians()) * p
}

/// `(A·B)ᵗ`.
#[inline]
pub fn mul_transpose(a: &Matrix2<f64>, b: &Matrix2<f64>) -> Matrix2<f64> {
    (a * b).transpose()
}

/// `[m00, m01, m10, m11]` → matrix.
#[inline]
pub fn mat2_from_row_major(m: [f64; 4]) -> Matrix2<f64> {
    Matrix2::new(m[0], m[1], m[2], m[3])
}

/// Matrix → `[m00, m01, m10, m11]`.
#[inline]
pub fn mat2_to_row_major(m: &Matrix2<f64>) -> [f64; 4] {
    [m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]]
}
