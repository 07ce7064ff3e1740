//! 2x2 linear systems `a x + b y = e`, `c x + d y = f`.
//!
//! - `solve_gauss`: augmented-matrix elimination with a single row swap.
//! - `solve_cramer`: explicit determinant; exact-zero singularity test.

use nalgebra::{Matrix2x3, Vector2};

use crate::cfg::PIVOT_EPS;
use crate::error::{GeomError, GeomResult};

/// Coefficients of `a x + b y = e`, `c x + d y = f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSystem2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl LinearSystem2 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Determinant of the coefficient block.
    #[inline]
    pub fn det(&self) -> f64 {
        det2(self.a, self.b, self.c, self.d)
    }

    /// Residual `(a x + b y − e, c x + d y − f)` at `z`.
    #[inline]
    pub fn residual(&self, z: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            self.a * z.x + self.b * z.y - self.e,
            self.c * z.x + self.d * z.y - self.f,
        )
    }
}

/// Determinant of `[[a, b], [c, d]]`.
#[inline]
pub fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Gaussian elimination on the augmented matrix `[A | rhs]`.
///
/// Swaps rows once if the leading pivot is below `PIVOT_EPS`. A pivot that is
/// still too small, or a vanishing second pivot after elimination, yields
/// `GeomError::Singular`.
pub fn solve_gauss(sys: &LinearSystem2) -> GeomResult<Vector2<f64>> {
    let mut aug = Matrix2x3::new(sys.a, sys.b, sys.e, sys.c, sys.d, sys.f);

    if aug[(0, 0)].abs() < PIVOT_EPS {
        aug.swap_rows(0, 1);
    }
    let p0 = aug[(0, 0)];
    if p0.abs() < PIVOT_EPS {
        tracing::debug!(pivot = p0, "gauss: no usable first pivot");
        return Err(GeomError::Singular { pivot: p0 });
    }

    let factor = aug[(1, 0)] / p0;
    aug[(1, 0)] = 0.0;
    aug[(1, 1)] -= factor * aug[(0, 1)];
    aug[(1, 2)] -= factor * aug[(0, 2)];

    let p1 = aug[(1, 1)];
    if p1.abs() < PIVOT_EPS {
        tracing::debug!(pivot = p1, "gauss: second pivot vanished");
        return Err(GeomError::Singular { pivot: p1 });
    }

    let y = aug[(1, 2)] / p1;
    let x = (aug[(0, 2)] - aug[(0, 1)] * y) / p0;
    Ok(Vector2::new(x, y))
}

/// Cramer's rule. Only an exactly zero determinant is rejected.
pub fn solve_cramer(sys: &LinearSystem2) -> GeomResult<Vector2<f64>> {
    let det = sys.det();
    if det == 0.0 {
        return Err(GeomError::Singular { pivot: det });
    }
    let x = det2(sys.e, sys.b, sys.f, sys.d) / det;
    let y = det2(sys.a, sys.e, sys.c, sys.f) / det;
    Ok(Vector2::new(x, y))
}
