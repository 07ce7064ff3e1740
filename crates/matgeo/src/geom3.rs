//! 3D vector helpers: work along a displacement, angle between line
//! directions, and the fixed-length integer combination `3A + 2B + C`.

use nalgebra::Vector3;

use crate::error::{GeomError, GeomResult};

/// Work done by a constant `force` moving a particle from `a` to `b`.
#[inline]
pub fn work_done(force: Vector3<f64>, a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    force.dot(&(b - a))
}

/// Direction cosines of `d` (the unit vector along it).
pub fn direction_cosines(d: Vector3<f64>) -> GeomResult<Vector3<f64>> {
    let norm = d.norm();
    if !norm.is_finite() || norm == 0.0 {
        return Err(GeomError::DegenerateDirection { value: norm });
    }
    Ok(d / norm)
}

/// Angle in degrees between two lines given by their direction ratios.
pub fn direction_angle_deg(d1: Vector3<f64>, d2: Vector3<f64>) -> GeomResult<f64> {
    let c1 = direction_cosines(d1)?;
    let c2 = direction_cosines(d2)?;
    let cos = c1.dot(&c2).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// `3A + 2B + C` component-wise; `InvalidArgument` if any component
/// overflows `i64`.
pub fn combine4(a: [i64; 4], b: [i64; 4], c: [i64; 4]) -> GeomResult<[i64; 4]> {
    let mut d = [0i64; 4];
    for i in 0..4 {
        d[i] = a[i]
            .checked_mul(3)
            .zip(b[i].checked_mul(2))
            .and_then(|(a3, b2)| a3.checked_add(b2))
            .and_then(|s| s.checked_add(c[i]))
            .ok_or_else(|| GeomError::invalid(format!("3A + 2B + C overflows i64 at index {i}")))?;
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn work_along_displacement() {
        let f = vector![2.0, -5.0, 6.0];
        let a = vector![6.0, 1.0, -3.0];
        let b = vector![4.0, -3.0, -2.0];
        assert_eq!(work_done(f, a, b), 22.0);
        // no displacement, no work
        assert_eq!(work_done(f, a, a), 0.0);
    }

    #[test]
    fn angle_between_directions() {
        let deg = direction_angle_deg(vector![0.0, 1.0, -1.0], vector![1.0, 0.0, -1.0]).unwrap();
        assert!((deg - 60.0).abs() < 1e-9);
        let par = direction_angle_deg(vector![1.0, 2.0, 3.0], vector![2.0, 4.0, 6.0]).unwrap();
        assert!(par.abs() < 1e-5);
        let c = direction_cosines(vector![3.0, 0.0, 4.0]).unwrap();
        assert!((c - vector![0.6, 0.0, 0.8]).norm() < 1e-12);
        assert!(matches!(
            direction_angle_deg(vector![0.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]),
            Err(GeomError::DegenerateDirection { .. })
        ));
    }

    #[test]
    fn integer_combination() {
        let d = combine4([1, 2, 3, 4], [0, -1, 5, 2], [7, 7, -20, 0]).unwrap();
        assert_eq!(d, [10, 11, -1, 16]);
        assert_eq!(combine4([0; 4], [0; 4], [0; 4]).unwrap(), [0; 4]);
    }

    #[test]
    fn integer_combination_overflow_is_an_error() {
        let big = i64::MAX / 2;
        assert!(matches!(
            combine4([big, 0, 0, 0], [0; 4], [0; 4]),
            Err(GeomError::InvalidArgument { .. })
        ));
        assert!(combine4([0; 4], [0, 0, i64::MIN, 0], [0; 4]).is_err());
        // 3A + 2B alone overflows, C brings it back: still rejected
        assert!(combine4([0; 4], [big + 1, 0, 0, 0], [-big, 0, 0, 0]).is_err());
        // largest in-range result
        assert_eq!(combine4([0; 4], [0; 4], [i64::MAX; 4]).unwrap(), [i64::MAX; 4]);
    }
}
