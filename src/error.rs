//! Errors raised when input does not have the shape or axis structure a rotation needs.
//!
//! Only the boundary constructors fail ([`col_vec`](crate::col_vec), [`mat3`](crate::mat3),
//! [`Axis`](crate::Axis) and [`EulerSequence`](crate::EulerSequence) conversions). The numeric
//! conversions themselves are infallible: degenerate geometry (zero rotation, gimbal lock) is
//! handled numerically rather than reported.

use thiserror::Error;

/// Everything that can go wrong when handing values to this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vector did not have exactly 3 elements.
    #[error("expected {expected} elements, found {found}")]
    Shape { expected: usize, found: usize },

    /// A matrix that should have been 3×3 was not.
    #[error("expected a 3x3 matrix, found {rows}x{cols}")]
    MatrixShape { rows: usize, cols: usize },

    /// An axis index other than 1, 2 or 3.
    #[error("axis index {0} is not one of 1, 2, or 3")]
    InvalidAxis(u8),

    /// The middle axis of a sequence repeats one of its neighbours, so the three rotations do not
    /// span every orientation.
    #[error("axis sequence {}-{}-{} repeats an axis in adjacent rotations", .0[0], .0[1], .0[2])]
    DegenerateSequence([u8; 3]),
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
