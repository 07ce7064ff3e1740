//! 2x2 linear-algebra and root-finding kernel.
//!
//! Purpose
//! - One implementation of the patterns every geometric routine leans on:
//!   2x2 linear solves (elimination and Cramer), quadratic roots in
//!   coefficient or trace/determinant form, symmetric 2x2 eigenpairs.
//! - A small dense n x n corner for matrix-vector products and the
//!   eigen-relation check; nothing else here generalizes past 2D.
//!
//! Code cross-refs: `geom2::{conic, lines, circle}` consume these kernels.

pub mod dense;
mod eigen;
mod linear;
mod quadratic;

pub use dense::{mat_vec, scale_vec, square_from_row_major, verify_eigen_relation, EigenCheck};
pub use eigen::{
    line_normals_at_distance, lines_through_point_at_distance, sym_eigen2, EigenPair, Sym2,
};
pub use linear::{det2, solve_cramer, solve_gauss, LinearSystem2};
pub use quadratic::{char_roots, det_from_traces, eigenvalues2, solve_quadratic, QuadRoots};
