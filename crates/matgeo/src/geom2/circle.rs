use nalgebra::Vector2;

use crate::error::{GeomError, GeomResult};

/// Contact points of the tangents from `(px, 0)` to the circle of radius `r`
/// centred at the origin.
///
/// The chord of contact is `x = r²/px`; the points are `(x, ±√(r² − x²))`,
/// upper point first. A point inside the circle (including `px = 0`) gives a
/// negative or NaN radicand and is rejected.
pub fn tangent_points(r: f64, px: f64) -> GeomResult<(Vector2<f64>, Vector2<f64>)> {
    let r2 = r * r;
    let x = r2 / px;
    let radicand = r2 - x * x;
    if radicand.is_nan() || radicand < 0.0 {
        tracing::debug!(r, px, radicand, "tangents: point inside circle");
        return Err(GeomError::PointInsideCircle { radicand });
    }
    let y = radicand.sqrt();
    Ok((Vector2::new(x, y), Vector2::new(x, -y)))
}
