//! Tolerance defaults shared by the 2x2 kernels.
//!
//! Policy
//! - One numeric value (`1e-9`) under role names, so call sites read as
//!   "pivot check" or "norm check" rather than a bare literal.
//! - Cramer's rule keeps an exact `det == 0` test and collinearity leaves the
//!   tolerance to the caller; neither reads from here.

/// Smallest admissible pivot during Gaussian elimination.
pub const PIVOT_EPS: f64 = 1e-9;
/// Below this norm an eigenvector candidate is treated as the zero vector.
pub const NORM_EPS: f64 = 1e-9;
