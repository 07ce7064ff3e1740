//! Symmetric 2x2 eigen-decomposition and the "lines through a point at a
//! given distance" construction built on it.
//!
//! For `M = [[m11, m12], [m12, m22]]` the eigenvalues come from the
//! trace/determinant quadratic, the leading eigenvector is `(m12, λ1 − m11)`
//! and the second is its 90° rotation. Symmetry makes both facts exact.

use nalgebra::{Matrix2, Vector2};

use super::quadratic::{char_roots, QuadRoots};
use crate::cfg::NORM_EPS;
use crate::error::{GeomError, GeomResult};
use crate::geom2::Line2;

/// Upper triangle of a real symmetric 2x2 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sym2 {
    pub m11: f64,
    pub m12: f64,
    pub m22: f64,
}

impl Sym2 {
    #[inline]
    pub fn new(m11: f64, m12: f64, m22: f64) -> Self {
        Self { m11, m12, m22 }
    }

    /// `P·Pᵗ − d²·I`.
    #[inline]
    pub fn outer_minus_scaled_identity(p: Vector2<f64>, d: f64) -> Self {
        let d2 = d * d;
        Self {
            m11: p.x * p.x - d2,
            m12: p.x * p.y,
            m22: p.y * p.y - d2,
        }
    }

    #[inline]
    pub fn trace(&self) -> f64 {
        self.m11 + self.m22
    }

    #[inline]
    pub fn det(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m12
    }

    #[inline]
    pub fn to_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.m11, self.m12, self.m12, self.m22)
    }

    /// `λ1 − m11` without cancellation.
    ///
    /// With `s = √((m11 − m22)² + 4·m12²)`, this is `(s − (m11 − m22)) / 2`.
    /// For `m11 >= m22` that difference cancels, so it is evaluated as
    /// `2·m12² / ((m11 − m22) + s)`.
    fn lambda1_offset(&self) -> f64 {
        let diff = self.m11 - self.m22;
        let s = diff.hypot(2.0 * self.m12);
        if diff >= 0.0 {
            let den = diff + s;
            if den == 0.0 {
                0.0
            } else {
                2.0 * self.m12 * self.m12 / den
            }
        } else {
            (s - diff) / 2.0
        }
    }
}

/// Eigenvalue with a unit eigenvector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vector2<f64>,
}

/// Eigenpairs of a symmetric 2x2 matrix, larger eigenvalue first.
///
/// Rounding can push the discriminant a hair below zero for (near) repeated
/// eigenvalues; it is clamped since the true value is non-negative.
pub fn sym_eigen2(m: &Sym2) -> [EigenPair; 2] {
    let trace = m.trace();
    let det = m.det();
    let (l1, l2) = match char_roots(trace, det) {
        QuadRoots::Real { hi, lo } => (hi, lo),
        QuadRoots::Complex { re, .. } => (re, re),
    };

    let raw = Vector2::new(m.m12, m.lambda1_offset());
    let norm = raw.norm();
    let v1 = if norm < NORM_EPS {
        Vector2::new(1.0, 0.0)
    } else {
        raw / norm
    };
    let v2 = Vector2::new(-v1.y, v1.x);

    [
        EigenPair {
            value: l1,
            vector: v1,
        },
        EigenPair {
            value: l2,
            vector: v2,
        },
    ]
}

/// Normals `n` of the two lines through `p` at distance `d` from the origin.
///
/// Solves `nᵗ M n = 0` with `M = P·Pᵗ − d²·I` as
/// `n = √(−λ2)·v1 ± √(λ1)·v2`. When `det(M) > 0` the point lies strictly
/// inside the circle of radius `d` and no real line exists.
pub fn line_normals_at_distance(
    p: Vector2<f64>,
    d: f64,
) -> GeomResult<(Vector2<f64>, Vector2<f64>)> {
    let m = Sym2::outer_minus_scaled_identity(p, d);
    let det = m.det();
    if det > 0.0 {
        tracing::debug!(det, "line normals: point inside distance circle");
        return Err(GeomError::NoRealSolution {
            reason: "det(P·Pᵗ − d²·I) > 0",
        });
    }
    let [e1, e2] = sym_eigen2(&m);
    // det <= 0 puts λ1 >= 0 >= λ2; max() absorbs rounding at the boundary.
    let s1 = e1.value.max(0.0).sqrt();
    let s2 = (-e2.value).max(0.0).sqrt();
    let n1 = e1.vector * s2 + e2.vector * s1;
    let n2 = e1.vector * s2 - e2.vector * s1;
    Ok((n1, n2))
}

/// The two lines `n·x − n·p = 0` through `p` at distance `d` from the origin.
pub fn lines_through_point_at_distance(p: Vector2<f64>, d: f64) -> GeomResult<(Line2, Line2)> {
    let (n1, n2) = line_normals_at_distance(p, d)?;
    Ok((Line2::through_with_normal(p, n1), Line2::through_with_normal(p, n2)))
}
