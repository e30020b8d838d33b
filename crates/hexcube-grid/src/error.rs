//! Errors from grid operations.

use hexcube_core::Cube;
use hexcube_path::PathError;
use std::error::Error;
use std::fmt;

/// Failure of a [`GridBuilder`](crate::GridBuilder) operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The operation needs `origin` to be on the map and it is not.
    OriginNotPresent {
        /// The missing coordinate.
        origin: Cube,
    },
    /// A path query failed.
    Path(PathError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginNotPresent { origin } => write!(f, "origin {origin} is not on the map"),
            Self::Path(e) => write!(f, "path: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            Self::OriginNotPresent { .. } => None,
        }
    }
}

impl From<PathError> for GridError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
