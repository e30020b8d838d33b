//! Error types for path queries.

use hexcube_core::Cube;
use std::error::Error;
use std::fmt;

/// Failure of a path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// No sequence of present, adjacent cells links the endpoints. Also
    /// returned when either endpoint is missing from the container.
    PathNotFound {
        /// Query start.
        origin: Cube,
        /// Query goal.
        target: Cube,
    },
    /// The search expanded its configured maximum of cells without reaching
    /// the target.
    ExpansionLimit {
        /// The configured cap.
        limit: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound { origin, target } => {
                write!(f, "no path from {origin} to {target}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} cells")
            }
        }
    }
}

impl Error for PathError {}
