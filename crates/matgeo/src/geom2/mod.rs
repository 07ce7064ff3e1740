//! Closed-form 2D geometry on top of the `linalg` kernel.
//!
//! Purpose
//! - Lines in implicit form `a x + b y + c = 0` (reflection, intersection,
//!   collinearity, sampling), circle tangents, conic/line intersection,
//!   hyperbola normals, and the small 2x2 transforms.
//! - Each routine is pure; failures come back as `GeomError`, never NaN.
//!
//! Code cross-refs: `linalg::{solve_gauss, solve_cramer}`, `sentinel::OrNan`

mod circle;
mod conic;
mod lines;
mod transform;

pub use circle::tangent_points;
pub use conic::{conic_line_intersection, hyperbola_normals_intersection, Conic2, ParamLine2};
pub use lines::{
    collinearity, intersect_lines, is_collinear, reflect_line, sample_segment, triangle_area,
    try_reflect_line, Line2,
};
pub use transform::{mat2_from_row_major, mat2_to_row_major, mul_transpose, rotate_deg};
