//! Grid configuration and validation.

use hexcube_core::{CoordError, HexLayout};
use hexcube_path::PathConfig;
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Hex radius or scale is unusable.
    Layout(CoordError),
    /// `path.max_expansions` is `Some(0)`, which fails every non-trivial query.
    ZeroExpansionLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::ZeroExpansionLimit => write!(f, "path.max_expansions must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::ZeroExpansionLimit => None,
        }
    }
}

impl From<CoordError> for ConfigError {
    fn from(e: CoordError) -> Self {
        Self::Layout(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Configuration for a [`GridBuilder`](crate::GridBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Unscaled hex radius in world units. Default: 1.0.
    pub hex_radius: f64,
    /// Multiplier applied to `hex_radius`. Default: 1.0.
    pub scale: f64,
    /// Search limits for path queries.
    pub path: PathConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_radius: 1.0,
            scale: 1.0,
            path: PathConfig::default(),
        }
    }
}

impl GridConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout()?;
        if self.path.max_expansions == Some(0) {
            return Err(ConfigError::ZeroExpansionLimit);
        }
        Ok(())
    }

    /// The layout described by `hex_radius` and `scale`.
    pub fn layout(&self) -> Result<HexLayout, ConfigError> {
        Ok(HexLayout::new(self.hex_radius, self.scale)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.layout().unwrap(), HexLayout::default());
    }

    #[test]
    fn bad_radius_is_a_layout_error() {
        let cfg = GridConfig {
            hex_radius: -2.0,
            ..GridConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Layout(CoordError::InvalidLayout { reason })) => {
                assert!(reason.contains("hex_radius"), "{reason}");
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn nan_scale_is_rejected() {
        let cfg = GridConfig {
            scale: f64::NAN,
            ..GridConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Layout(_))));
        assert!(cfg.validate().unwrap_err().source().is_some());
    }

    #[test]
    fn zero_expansion_limit_is_rejected() {
        let cfg = GridConfig {
            path: PathConfig::with_max_expansions(0),
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroExpansionLimit));
        let cfg = GridConfig {
            path: PathConfig::with_max_expansions(1),
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }
}
