//! Boundary lowering of tagged outcomes.
//!
//! The kernels report failures as `GeomResult<T>`. Callers that speak the
//! older conventions pick one here:
//! - `or_nan()` fills the value with NaN (scalars, points, pairs of either);
//! - `status_code()` maps to `0` / `-1`.

use nalgebra::Vector2;

use crate::error::GeomResult;

/// Status code for a successful computation.
pub const STATUS_OK: i32 = 0;
/// Status code for any failure.
pub const STATUS_FAIL: i32 = -1;

/// Values that have an all-NaN representative.
pub trait NanSentinel: Sized {
    /// The all-NaN value of this shape.
    fn nan() -> Self;

    /// True if any component is NaN.
    fn is_sentinel(&self) -> bool;
}

impl NanSentinel for f64 {
    #[inline]
    fn nan() -> Self {
        f64::NAN
    }
    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_nan()
    }
}

impl NanSentinel for Vector2<f64> {
    #[inline]
    fn nan() -> Self {
        Vector2::new(f64::NAN, f64::NAN)
    }
    #[inline]
    fn is_sentinel(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<T: NanSentinel> NanSentinel for (T, T) {
    #[inline]
    fn nan() -> Self {
        (T::nan(), T::nan())
    }
    #[inline]
    fn is_sentinel(&self) -> bool {
        self.0.is_sentinel() || self.1.is_sentinel()
    }
}

/// Lower a result to its NaN sentinel on failure.
pub trait OrNan<T> {
    /// The success value, or [`NanSentinel::nan`] on failure.
    fn or_nan(self) -> T;
}

impl<T: NanSentinel> OrNan<T> for GeomResult<T> {
    fn or_nan(self) -> T {
        match self {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(%err, "lowered to NaN sentinel");
                T::nan()
            }
        }
    }
}

/// `0` on success, `-1` on failure.
#[inline]
pub fn status_code<T>(res: &GeomResult<T>) -> i32 {
    if res.is_ok() {
        STATUS_OK
    } else {
        STATUS_FAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeomError;
    use nalgebra::vector;

    #[test]
    fn failures_lower_to_nan_and_minus_one() {
        let bad: GeomResult<(Vector2<f64>, Vector2<f64>)> =
            Err(GeomError::Singular { pivot: 0.0 });
        assert_eq!(status_code(&bad), STATUS_FAIL);
        let (p, q) = bad.or_nan();
        assert!(p.x.is_nan() && p.y.is_nan() && q.x.is_nan() && q.y.is_nan());

        let bad_scalar: GeomResult<f64> = Err(GeomError::DegenerateMirror);
        assert!(bad_scalar.or_nan().is_nan());
    }

    #[test]
    fn successes_pass_through() {
        let ok: GeomResult<Vector2<f64>> = Ok(vector![1.0, 2.0]);
        assert_eq!(status_code(&ok), STATUS_OK);
        let p = ok.or_nan();
        assert!(!p.is_sentinel());
        assert_eq!(p, vector![1.0, 2.0]);
        assert!((f64::nan(), 1.0).is_sentinel());
    }
}
