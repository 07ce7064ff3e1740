//! Small analytic-geometry and 2x2 linear-algebra routines.
//!
//! Layout
//! - `linalg`: the shared kernel (2x2 solves, quadratic roots, symmetric
//!   eigenpairs, dense n x n products).
//! - `geom2`, `geom3`, `integrate`: closed-form problems built on it.
//! - `sentinel`: lowering of `GeomResult` to NaN / status codes for callers
//!   that expect those conventions.
//!
//! Every routine is pure and returns fresh values; nothing is cached.

pub mod cfg;
pub mod error;
pub mod geom2;
pub mod geom3;
pub mod integrate;
pub mod linalg;
pub mod sentinel;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, GeomResult};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::geom2::{
        collinearity, conic_line_intersection, hyperbola_normals_intersection, intersect_lines,
        is_collinear, mat2_from_row_major, mat2_to_row_major, mul_transpose, reflect_line,
        rotate_deg, sample_segment, tangent_points, triangle_area, try_reflect_line, Conic2,
        Line2, ParamLine2,
    };
    pub use crate::geom3::{combine4, direction_angle_deg, direction_cosines, work_done};
    pub use crate::integrate::{area_under_root_curve, trapezoid};
    pub use crate::linalg::{
        char_roots, det2, det_from_traces, eigenvalues2, line_normals_at_distance,
        lines_through_point_at_distance, solve_cramer, solve_gauss, solve_quadratic, sym_eigen2,
        EigenPair, LinearSystem2, QuadRoots, Sym2,
    };
    pub use crate::sentinel::{status_code, NanSentinel, OrNan};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2, Vector3 as Vec3};
}
