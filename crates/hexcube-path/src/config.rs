//! Search limits.

/// Configuration for a [`PathFinder`](crate::PathFinder).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathConfig {
    /// Maximum number of cells a single query may expand before giving up
    /// with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit).
    /// `None` = unbounded. Default: `None`.
    pub max_expansions: Option<usize>,
}

impl PathConfig {
    /// Config with an expansion cap.
    pub fn with_max_expansions(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }
}
