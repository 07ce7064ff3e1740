//! Dense n x n helpers: matrix-vector, scalar-vector, and the eigen-relation
//! check `Q(Rx)`, `λ(Rx)`, `Q(R⁻¹x)`, `λ(R⁻¹x)`.
//!
//! Flat buffers are row-major, `n²` entries per matrix.

use nalgebra::{DMatrix, DVector};

use crate::error::{GeomError, GeomResult};

/// Build an `n x n` matrix from a row-major buffer of length `n²`.
pub fn square_from_row_major(n: usize, data: &[f64]) -> GeomResult<DMatrix<f64>> {
    let expected = n * n;
    if data.len() != expected {
        return Err(GeomError::dims(expected, data.len()));
    }
    Ok(DMatrix::from_row_slice(n, n, data))
}

/// `M v` with the usual shape checks.
pub fn mat_vec(m: &DMatrix<f64>, v: &DVector<f64>) -> GeomResult<DVector<f64>> {
    if !m.is_square() {
        return Err(GeomError::dims(m.nrows(), m.ncols()));
    }
    if m.ncols() != v.len() {
        return Err(GeomError::dims(m.ncols(), v.len()));
    }
    Ok(m * v)
}

/// `s v`.
#[inline]
pub fn scale_vec(s: f64, v: &DVector<f64>) -> DVector<f64> {
    v * s
}

/// Both sides of `Q(Rx) = λ(Rx)` and `Q(R⁻¹x) = λ(R⁻¹x)`.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenCheck {
    pub q_rx: DVector<f64>,
    pub lambda_rx: DVector<f64>,
    pub q_rinv_x: DVector<f64>,
    pub lambda_rinv_x: DVector<f64>,
}

impl EigenCheck {
    /// Max-abs residual of `Q(Rx) − λ(Rx)`.
    pub fn rx_residual(&self) -> f64 {
        (&self.q_rx - &self.lambda_rx).amax()
    }

    /// Max-abs residual of `Q(R⁻¹x) − λ(R⁻¹x)`.
    pub fn rinv_x_residual(&self) -> f64 {
        (&self.q_rinv_x - &self.lambda_rinv_x).amax()
    }
}

/// Evaluate the four products used to test whether `Rx` / `R⁻¹x` is an
/// eigenvector of `Q` with eigenvalue `λ`. `r_inv` is taken as given.
pub fn verify_eigen_relation(
    q: &DMatrix<f64>,
    r: &DMatrix<f64>,
    r_inv: &DMatrix<f64>,
    x: &DVector<f64>,
    lambda: f64,
) -> GeomResult<EigenCheck> {
    let n = x.len();
    for m in [q, r, r_inv] {
        if m.nrows() != n || m.ncols() != n {
            return Err(GeomError::dims(n * n, m.nrows() * m.ncols()));
        }
    }
    let rx = mat_vec(r, x)?;
    let rinv_x = mat_vec(r_inv, x)?;
    Ok(EigenCheck {
        q_rx: mat_vec(q, &rx)?,
        lambda_rx: scale_vec(lambda, &rx),
        q_rinv_x: mat_vec(q, &rinv_x)?,
        lambda_rinv_x: scale_vec(lambda, &rinv_x),
    })
}
