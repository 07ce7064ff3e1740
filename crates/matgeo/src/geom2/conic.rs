//! Conics `xᵗVx + 2uᵗx + f = 0` against parametric lines, and the
//! intersection of two hyperbola normals.

use nalgebra::{Matrix2, Vector2};

use crate::error::{GeomError, GeomResult};
use crate::linalg::{solve_cramer, LinearSystem2};

/// Conic `xᵗVx + 2uᵗx + f = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conic2 {
    pub v: Matrix2<f64>,
    pub u: Vector2<f64>,
    pub f: f64,
}

impl Conic2 {
    #[inline]
    pub fn new(v: Matrix2<f64>, u: Vector2<f64>, f: f64) -> Self {
        Self { v, u, f }
    }

    /// `xᵗVx + 2uᵗx + f`.
    #[inline]
    pub fn eval(&self, x: Vector2<f64>) -> f64 {
        x.dot(&(self.v * x)) + 2.0 * self.u.dot(&x) + self.f
    }
}

/// Line `x = h + κ m`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamLine2 {
    pub h: Vector2<f64>,
    pub m: Vector2<f64>,
}

impl ParamLine2 {
    #[inline]
    pub fn new(h: Vector2<f64>, m: Vector2<f64>) -> Self {
        Self { h, m }
    }

    #[inline]
    pub fn at(&self, kappa: f64) -> Vector2<f64> {
        self.h + self.m * kappa
    }
}

/// Parameters `(κ1, κ2)` where `line` meets `conic`.
///
/// Substituting `x = h + κm` gives
/// `κ²·mᵗVm + 2κ·mᵗ(Vh + u) + g(h) = 0`, so
/// `κ = (−mᵗ(Vh + u) ± √(mᵗ(Vh + u))² − g(h)·mᵗVm) / mᵗVm`.
pub fn conic_line_intersection(conic: &Conic2, line: &ParamLine2) -> GeomResult<(f64, f64)> {
    let (h, m) = (line.h, line.m);
    let mvm = m.dot(&(conic.v * m));
    if mvm == 0.0 {
        return Err(GeomError::DegenerateDirection { value: mvm });
    }
    let g = conic.eval(h);
    let k = m.dot(&(conic.v * h + conic.u));
    let disc = k * k - g * mvm;
    if disc < 0.0 {
        tracing::debug!(disc, "conic/line: no real intersection");
        return Err(GeomError::NoRealSolution {
            reason: "negative discriminant in conic/line substitution",
        });
    }
    let s = disc.sqrt();
    Ok(((-k + s) / mvm, (-k - s) / mvm))
}

/// Intersection of the normals to `x²/a² − y²/b² = 1` at parameters `θ` and
/// `φ = π/2 − θ`.
///
/// The normal at `θ` is `a·tanθ·x + b·secθ·y = (a² + b²)·tanθ·secθ`.
/// Parallel normals fall out as `Singular` from Cramer's rule.
pub fn hyperbola_normals_intersection(a: f64, b: f64, theta: f64) -> GeomResult<Vector2<f64>> {
    let phi = std::f64::consts::FRAC_PI_2 - theta;
    let normal = |t: f64| {
        let sec = 1.0 / t.cos();
        let tan = t.tan();
        (a * tan, b * sec, (a * a + b * b) * tan * sec)
    };
    let (a1, b1, c1) = normal(theta);
    let (a2, b2, c2) = normal(phi);
    solve_cramer(&LinearSystem2::new(a1, b1, a2, b2, c1, c2))
}
