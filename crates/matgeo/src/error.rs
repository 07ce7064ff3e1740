//! Failure taxonomy for every fallible routine in the crate.
//!
//! Routines return `GeomResult<T>`; callers that need the older conventions
//! (NaN sentinel, `-1` status code) lower it through [`crate::sentinel`].

use thiserror::Error;

/// Result alias used across the crate.
pub type GeomResult<T> = Result<T, GeomError>;

/// Why a computation produced no value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Zero or near-zero pivot/determinant in a 2x2 solve.
    #[error("singular system (pivot {pivot:.3e})")]
    Singular {
        /// The offending pivot or determinant.
        pivot: f64,
    },

    /// A direction that must be non-degenerate is not (zero vector, `mᵗVm = 0`).
    #[error("degenerate direction (measure {value:.3e})")]
    DegenerateDirection {
        /// The vanishing quantity.
        value: f64,
    },

    /// Tangents requested from a point inside the circle.
    #[error("point lies inside the circle (radicand {radicand:.3e})")]
    PointInsideCircle {
        /// `r² − x²`, negative or NaN.
        radicand: f64,
    },

    /// The underlying equation has no real root.
    #[error("no real solution: {reason}")]
    NoRealSolution {
        /// Short description of the failed condition.
        reason: &'static str,
    },

    /// Reflection mirror with `a = b = 0`.
    #[error("mirror line has a zero normal")]
    DegenerateMirror,

    /// Buffer or matrix dimensions disagree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Caller-contract violation.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which contract was broken.
        reason: String,
    },
}

impl GeomError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dims(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_details() {
        let e = GeomError::dims(9, 4);
        assert!(e.to_string().contains("expected 9, got 4"));
        let e = GeomError::invalid("a must be non-zero");
        assert!(e.to_string().contains("a must be non-zero"));
        let e = GeomError::NoRealSolution { reason: "det(M) > 0" };
        assert!(e.to_string().contains("det(M) > 0"));
    }
}
