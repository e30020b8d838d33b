//! Cube, axial and fractional coordinate types.

use crate::error::CoordError;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A validated cube coordinate on a hexagonal grid.
///
/// The three components always satisfy `x + y + z == 0`. Fields are private
/// and every constructor checks or preserves the invariant, so a `Cube` in
/// hand is always a real hex.
///
/// The axial form `(q, r)` maps to `x = q`, `z = r`, `y = -q - r`.
///
/// # Range
///
/// Components are `i32`. [`Cube::from_axial`] and the arithmetic operators
/// use plain integer arithmetic and overflow (panicking in debug builds)
/// once a result leaves that range. Axial inputs within `±i32::MAX / 2` are
/// always safe; use [`Cube::checked_from_axial`] for untrusted input.
///
/// # Examples
///
/// ```
/// use hexcube_core::{Axial, Cube};
///
/// let c = Cube::new(1, -3, 2).unwrap();
/// assert_eq!(Axial::from(c), Axial { q: 1, r: 2 });
/// assert!(Cube::new(1, 1, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl Cube {
    /// The grid origin `(0, 0, 0)`.
    pub const ORIGIN: Cube = Cube { x: 0, y: 0, z: 0 };

    /// Create a cube coordinate, rejecting triples that do not sum to zero.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, CoordError> {
        if x as i64 + y as i64 + z as i64 != 0 {
            return Err(CoordError::InvalidCoordinate { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Create a cube coordinate from axial `(q, r)`. Always valid.
    ///
    /// Overflows when `-q - r` does not fit in `i32`; see the type-level
    /// range notes.
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self {
            x: q,
            y: -q - r,
            z: r,
        }
    }

    /// Like [`from_axial`](Self::from_axial), returning `None` when the
    /// derived `y` component does not fit in `i32`.
    pub fn checked_from_axial(q: i32, r: i32) -> Option<Self> {
        let y = i32::try_from(-(q as i64) - r as i64).ok()?;
        Some(Self { x: q, y, z: r })
    }

    /// Construct without validation. Callers must guarantee the sum is zero.
    pub(crate) const fn raw(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// X component (equal to axial `q`).
    pub fn x(self) -> i32 {
        self.x
    }

    /// Y component.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Z component (equal to axial `r`).
    pub fn z(self) -> i32 {
        self.z
    }

    /// Components as an `[x, y, z]` array.
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Lossless conversion to floating point.
    pub fn to_frac(self) -> FracCube {
        FracCube {
            x: self.x as f64,
            y: self.y as f64,
            z: self.z as f64,
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl TryFrom<[i32; 3]> for Cube {
    type Error = CoordError;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        Cube::new(x, y, z)
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Cube {
        Cube::raw(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Cube {
    fn add_assign(&mut self, rhs: Cube) {
        *self = *self + rhs;
    }
}

impl Sub for Cube {
    type Output = Cube;

    fn sub(self, rhs: Cube) -> Cube {
        Cube::raw(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Cube {
    type Output = Cube;

    fn mul(self, k: i32) -> Cube {
        Cube::raw(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Cube {
    type Output = Cube;

    fn neg(self) -> Cube {
        Cube::raw(-self.x, -self.y, -self.z)
    }
}

/// Two-component axial coordinate `(q, r)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axial {
    /// Column axis (cube `x`).
    pub q: i32,
    /// Row axis (cube `z`).
    pub r: i32,
}

impl Axial {
    /// Create an axial coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<Cube> for Axial {
    fn from(c: Cube) -> Self {
        Axial { q: c.x, r: c.z }
    }
}

impl From<Axial> for Cube {
    fn from(a: Axial) -> Self {
        Cube::from_axial(a.q, a.r)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.q, self.r)
    }
}

/// A cube coordinate with floating-point components.
///
/// Produced by interpolation and world-space conversion. The sum-zero
/// invariant holds only approximately; use [`math::round`](crate::math::round)
/// to snap back onto the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FracCube {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl FracCube {
    /// Create a fractional cube coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Cube> for FracCube {
    fn from(c: Cube) -> Self {
        c.to_frac()
    }
}

/// An axial coordinate with floating-point components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FracAxial {
    /// Column axis.
    pub q: f64,
    /// Row axis.
    pub r: f64,
}

impl FracAxial {
    /// Create a fractional axial coordinate.
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }
}

impl From<FracAxial> for FracCube {
    fn from(a: FracAxial) -> Self {
        FracCube {
            x: a.q,
            y: -a.q - a.r,
            z: a.r,
        }
    }
}
