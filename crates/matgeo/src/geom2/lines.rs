//! Implicit lines and point-set predicates.

use nalgebra::{Vector2, Vector3};

use crate::error::{GeomError, GeomResult};
use crate::linalg::{solve_gauss, LinearSystem2};

/// Line `a x + b y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Line through `p` with normal `n`: `n·x − n·p = 0`.
    #[inline]
    pub fn through_with_normal(p: Vector2<f64>, n: Vector2<f64>) -> Self {
        Self {
            a: n.x,
            b: n.y,
            c: -n.dot(&p),
        }
    }

    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    /// `a x + b y + c` at `p`; zero on the line.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// `|c| / ‖(a, b)‖`; infinite for a zero normal.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.c.abs() / self.normal().norm()
    }

    /// Same line up to a non-zero scale factor: the unit coefficient vectors
    /// agree up to sign within `tol`.
    pub fn is_equivalent(&self, other: &Line2, tol: f64) -> bool {
        let u = Vector3::new(self.a, self.b, self.c);
        let v = Vector3::new(other.a, other.b, other.c);
        let (nu, nv) = (u.norm(), v.norm());
        if nu == 0.0 || nv == 0.0 {
            return nu == nv;
        }
        let (u, v) = (u / nu, v / nv);
        (u - v).norm().min((u + v).norm()) <= tol
    }
}

/// Signed determinant of `[[x1, y1, 1], [x2, y2, 1], [x3, y3, 1]]`.
///
/// Twice the signed triangle area; zero iff the points are collinear.
#[inline]
pub fn collinearity(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)
}

/// `|collinearity| <= tol`.
#[inline]
pub fn is_collinear(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>, tol: f64) -> bool {
    collinearity(p1, p2, p3).abs() <= tol
}

/// Unsigned area of the triangle `p1 p2 p3`.
#[inline]
pub fn triangle_area(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    0.5 * collinearity(p1, p2, p3).abs()
}

/// Reflection of `src` across `mirror`, or `DegenerateMirror` when the mirror
/// normal is zero.
pub fn try_reflect_line(src: &Line2, mirror: &Line2) -> GeomResult<Line2> {
    let k1 = src.a * mirror.a + src.b * mirror.b;
    let k2 = mirror.a * mirror.a + mirror.b * mirror.b;
    if k2 == 0.0 {
        return Err(GeomError::DegenerateMirror);
    }
    Ok(Line2 {
        a: 2.0 * mirror.a * k1 - src.a * k2,
        b: 2.0 * mirror.b * k1 - src.b * k2,
        c: 2.0 * mirror.c * k1 - src.c * k2,
    })
}

/// Reflection of `src` across `mirror`; a degenerate mirror leaves `src`
/// unchanged.
pub fn reflect_line(src: &Line2, mirror: &Line2) -> Line2 {
    try_reflect_line(src, mirror).unwrap_or_else(|_| {
        tracing::debug!(?mirror, "reflect: degenerate mirror, returning source line");
        *src
    })
}

/// Intersection point of two lines (Gaussian path).
pub fn intersect_lines(l1: &Line2, l2: &Line2) -> GeomResult<Vector2<f64>> {
    let sys = LinearSystem2::new(l1.a, l1.b, l2.a, l2.b, -l1.c, -l2.c);
    solve_gauss(&sys)
}

/// `n` evenly spaced points from `a` to `b` inclusive (`λ = i / (n − 1)`).
pub fn sample_segment(a: Vector2<f64>, b: Vector2<f64>, n: usize) -> GeomResult<Vec<Vector2<f64>>> {
    if n < 2 {
        return Err(GeomError::invalid(format!(
            "segment sampling needs at least 2 points, got {n}"
        )));
    }
    let m = b - a;
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| a + m * (i as f64 / last)).collect())
}
