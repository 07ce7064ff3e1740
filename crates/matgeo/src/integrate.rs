//! Composite trapezoidal rule.

use crate::error::{GeomError, GeomResult};

/// `∫ₐᵇ f(x) dx` with `n` trapezoids of width `h = (b − a)/n`.
///
/// `b < a` yields the negated integral; `n == 0` and non-finite bounds are
/// rejected.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> GeomResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(GeomError::invalid("trapezoid count must be positive"));
    }
    if !(a.is_finite() && b.is_finite()) {
        return Err(GeomError::invalid("integration bounds must be finite"));
    }
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    Ok(h * (0.5 * (f(a) + f(b)) + inner))
}

/// `y = 3√x`, the upper branch of the parabola `y² = 9x`.
#[inline]
pub fn root_curve(x: f64) -> f64 {
    3.0 * x.sqrt()
}

/// Area under `y = 3√x` on `[a, b]`; requires `a, b >= 0`.
pub fn area_under_root_curve(a: f64, b: f64, n: usize) -> GeomResult<f64> {
    if a < 0.0 || b < 0.0 {
        return Err(GeomError::invalid("3√x is only real for x >= 0"));
    }
    trapezoid(root_curve, a, b, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Antiderivative of 3√x.
    fn closed_form(x: f64) -> f64 {
        2.0 * x.powf(1.5)
    }

    #[test]
    fn root_curve_converges_to_closed_form() {
        let exact = closed_form(4.0) - closed_form(0.0);
        assert_eq!(exact, 16.0);
        let approx = area_under_root_curve(0.0, 4.0, 100_000).unwrap();
        assert!(((approx - exact) / exact).abs() < 1e-6, "approx {approx}");
        // coarser grids underestimate a concave integrand
        let coarse = area_under_root_curve(0.0, 4.0, 10).unwrap();
        assert!(coarse < exact && coarse > 15.0);
    }

    #[test]
    fn trapezoid_exact_for_linear_and_reversed_bounds() {
        let v = trapezoid(|x| 2.0 * x + 1.0, 0.0, 3.0, 1).unwrap();
        assert!((v - 12.0).abs() < 1e-12);
        let r = trapezoid(|x| 2.0 * x + 1.0, 3.0, 0.0, 7).unwrap();
        assert!((r + 12.0).abs() < 1e-12);
        assert_eq!(trapezoid(|x| x, 1.0, 1.0, 4).unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(trapezoid(|x| x, 0.0, 1.0, 0).is_err());
        assert!(trapezoid(|x| x, 0.0, f64::INFINITY, 3).is_err());
        assert!(area_under_root_curve(-1.0, 4.0, 10).is_err());
    }
}
