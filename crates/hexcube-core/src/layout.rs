//! World-space layout for flat-top hexes.
//!
//! [`HexLayout`] replaces process-wide spacing constants with an explicit
//! value: callers own it and pass it wherever grid positions turn into
//! world positions or back.

use crate::cube::{Axial, Cube, FracAxial, FracCube};
use crate::error::CoordError;
use crate::math;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A position in world space. Generated positions lie on the `y = 0` plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPos {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth axis.
    pub z: f64,
}

impl WorldPos {
    /// Create a world position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Hex size and spacing for converting between grid and world space.
///
/// The effective radius is `hex_radius * scale`. Column spacing is
/// `1.5 * radius` and row spacing is `sqrt(3) * radius`; odd columns sit
/// half a row lower, with rows growing towards negative world `z`.
///
/// # Examples
///
/// ```
/// use hexcube_core::{Cube, HexLayout};
///
/// let layout = HexLayout::new(2.0, 1.0).unwrap();
/// let c = Cube::from_axial(3, -1);
/// let pos = layout.cube_to_world(c);
/// assert_eq!(pos.x, 9.0);
/// assert_eq!(layout.world_to_cube(pos), c);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    hex_radius: f64,
    scale: f64,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            hex_radius: 1.0,
            scale: 1.0,
        }
    }
}

impl HexLayout {
    /// Create a layout. Both parameters must be finite and positive.
    pub fn new(hex_radius: f64, scale: f64) -> Result<Self, CoordError> {
        if !hex_radius.is_finite() || hex_radius <= 0.0 {
            return Err(CoordError::InvalidLayout {
                reason: format!("hex_radius must be finite and positive, got {hex_radius}"),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CoordError::InvalidLayout {
                reason: format!("scale must be finite and positive, got {scale}"),
            });
        }
        Ok(Self { hex_radius, scale })
    }

    /// Unscaled hex radius.
    pub fn hex_radius(&self) -> f64 {
        self.hex_radius
    }

    /// Scale multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Effective radius, `hex_radius * scale`.
    pub fn radius(&self) -> f64 {
        self.hex_radius * self.scale
    }

    /// Distance between adjacent column centers along world `x`.
    pub fn spacing_x(&self) -> f64 {
        1.5 * self.radius()
    }

    /// Distance between adjacent row centers along world `z`.
    pub fn spacing_z(&self) -> f64 {
        SQRT_3 * self.radius()
    }

    /// World position of the center of an axial hex.
    pub fn axial_to_world(&self, axial: Axial) -> WorldPos {
        let q = axial.q as f64;
        let r = axial.r as f64;
        WorldPos {
            x: q * self.spacing_x(),
            y: 0.0,
            z: -self.spacing_z() * (q / 2.0 + r),
        }
    }

    /// World position of the center of a cube hex.
    pub fn cube_to_world(&self, cube: Cube) -> WorldPos {
        self.axial_to_world(cube.into())
    }

    /// Fractional axial coordinate under a world position, before rounding.
    pub fn world_to_frac_axial(&self, pos: WorldPos) -> FracAxial {
        let radius = self.radius();
        FracAxial {
            q: (pos.x * (2.0 / 3.0)) / radius,
            r: (-pos.x / 3.0 - (SQRT_3 / 3.0) * pos.z) / radius,
        }
    }

    /// The axial hex containing a world position.
    pub fn world_to_axial(&self, pos: WorldPos) -> Axial {
        round_axial(self.world_to_frac_axial(pos))
    }

    /// The cube hex containing a world position.
    pub fn world_to_cube(&self, pos: WorldPos) -> Cube {
        math::round(FracCube::from(self.world_to_frac_axial(pos)))
    }
}

/// Snap a fractional axial coordinate onto the grid via cube rounding.
pub fn round_axial(axial: FracAxial) -> Axial {
    math::round(FracCube::from(axial)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_bad_parameters() {
        assert!(HexLayout::new(0.0, 1.0).is_err());
        assert!(HexLayout::new(-1.0, 1.0).is_err());
        assert!(HexLayout::new(1.0, f64::NAN).is_err());
        assert!(HexLayout::new(f64::INFINITY, 1.0).is_err());
        assert!(HexLayout::new(0.5, 3.0).is_ok());
    }

    #[test]
    fn spacing_from_radius_and_scale() {
        let l = HexLayout::new(2.0, 0.5).unwrap();
        assert_eq!(l.radius(), 1.0);
        assert_eq!(l.spacing_x(), 1.5);
        assert!((l.spacing_z() - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn origin_maps_to_world_origin() {
        let l = HexLayout::default();
        assert_eq!(l.cube_to_world(Cube::ORIGIN), WorldPos::default());
    }

    #[test]
    fn adjacent_centers_are_sqrt3_radius_apart() {
        let l = HexLayout::new(1.5, 2.0).unwrap();
        let o = l.cube_to_world(Cube::ORIGIN);
        for n in math::neighbors(Cube::ORIGIN) {
            let p = l.cube_to_world(n);
            let d = ((p.x - o.x).powi(2) + (p.z - o.z).powi(2)).sqrt();
            assert!((d - l.spacing_z()).abs() < 1e-9, "{n}: {d}");
        }
    }

    #[test]
    fn world_point_inside_hex_snaps_to_it() {
        let l = HexLayout::default();
        let c = Cube::from_axial(2, -3);
        let p = l.cube_to_world(c);
        let nudged = WorldPos::new(p.x + 0.3, 0.0, p.z - 0.2);
        assert_eq!(l.world_to_cube(nudged), c);
        assert_eq!(l.world_to_axial(nudged), Axial::new(2, -3));
    }

    proptest! {
        #[test]
        fn world_round_trip(
            q in -200i32..200,
            r in -200i32..200,
            radius in 0.1f64..10.0,
            scale in 0.1f64..4.0,
        ) {
            let l = HexLayout::new(radius, scale).unwrap();
            let c = Cube::from_axial(q, r);
            prop_assert_eq!(l.world_to_cube(l.cube_to_world(c)), c);
        }
    }
}
