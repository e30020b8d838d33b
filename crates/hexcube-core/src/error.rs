//! Error types for coordinate construction and layout configuration.

use std::error::Error;
use std::fmt;

/// Errors arising from coordinate construction or layout setup.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordError {
    /// The components of a cube coordinate do not sum to zero.
    InvalidCoordinate {
        /// X component.
        x: i32,
        /// Y component.
        y: i32,
        /// Z component.
        z: i32,
    },
    /// A direction index outside `0..6`.
    InvalidDirection {
        /// The offending index.
        index: usize,
    },
    /// Layout parameters are not finite and positive.
    InvalidLayout {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { x, y, z } => {
                write!(
                    f,
                    "invalid cube coordinate ({x}, {y}, {z}): components sum to {}",
                    *x as i64 + *y as i64 + *z as i64
                )
            }
            Self::InvalidDirection { index } => {
                write!(f, "direction index {index} out of range 0..6")
            }
            Self::InvalidLayout { reason } => write!(f, "invalid layout: {reason}"),
        }
    }
}

impl Error for CoordError {}
