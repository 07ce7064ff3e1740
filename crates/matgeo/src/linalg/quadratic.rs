//! Quadratic roots in coefficient form (`a x² + b x + c`) and in
//! trace/determinant form (`λ² − tr·λ + det`).

use nalgebra::{Complex, Matrix2};

use crate::error::{GeomError, GeomResult};

/// Roots of a real quadratic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadRoots {
    /// Two real roots, `hi >= lo`.
    Real { hi: f64, lo: f64 },
    /// Conjugate pair `re ± i·im` with `im > 0`.
    Complex { re: f64, im: f64 },
}

impl QuadRoots {
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, QuadRoots::Real { .. })
    }

    /// Both roots as complex numbers; for a conjugate pair the
    /// positive-imaginary root comes first.
    pub fn as_complex(&self) -> [Complex<f64>; 2] {
        match *self {
            QuadRoots::Real { hi, lo } => [Complex::new(hi, 0.0), Complex::new(lo, 0.0)],
            QuadRoots::Complex { re, im } => [Complex::new(re, im), Complex::new(re, -im)],
        }
    }

    /// The real pair, if any.
    #[inline]
    pub fn real(&self) -> Option<(f64, f64)> {
        match *self {
            QuadRoots::Real { hi, lo } => Some((hi, lo)),
            QuadRoots::Complex { .. } => None,
        }
    }
}

/// Roots of `a x² + b x + c = 0`.
///
/// `a == 0` is rejected with `InvalidArgument` instead of degrading to a
/// linear solve; non-finite coefficients likewise.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> GeomResult<QuadRoots> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeomError::invalid("quadratic coefficients must be finite"));
    }
    if a == 0.0 {
        return Err(GeomError::invalid("leading coefficient a must be non-zero"));
    }
    let disc = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;
    if disc >= 0.0 {
        let s = disc.sqrt();
        let r1 = (-b + s) / two_a;
        let r2 = (-b - s) / two_a;
        Ok(QuadRoots::Real {
            hi: r1.max(r2),
            lo: r1.min(r2),
        })
    } else {
        Ok(QuadRoots::Complex {
            re: -b / two_a,
            im: (-disc).sqrt() / two_a.abs(),
        })
    }
}

/// Roots of the characteristic polynomial `λ² − trace·λ + det`.
pub fn char_roots(trace: f64, det: f64) -> QuadRoots {
    let disc = trace * trace - 4.0 * det;
    if disc >= 0.0 {
        let s = disc.sqrt();
        QuadRoots::Real {
            hi: (trace + s) / 2.0,
            lo: (trace - s) / 2.0,
        }
    } else {
        QuadRoots::Complex {
            re: trace / 2.0,
            im: (-disc).sqrt() / 2.0,
        }
    }
}

/// Eigenvalues of a general 2x2 matrix; a conjugate pair when the
/// discriminant is negative.
#[inline]
pub fn eigenvalues2(m: &Matrix2<f64>) -> QuadRoots {
    char_roots(m.trace(), m.determinant())
}

/// `det(A)` of a 2x2 matrix from `tr(A)` and `tr(A³)`.
///
/// Uses `tr(A³) = tr³ − 3·det·tr`, so `det = (tr³ − tr(A³)) / (3·tr)`.
pub fn det_from_traces(trace_a: f64, trace_a3: f64) -> GeomResult<f64> {
    if trace_a == 0.0 {
        return Err(GeomError::invalid("tr(A) must be non-zero"));
    }
    Ok((trace_a.powi(3) - trace_a3) / (3.0 * trace_a))
}
