//! The six fixed hex directions and their diagonal counterparts.
//!
//! The ordering is part of the public contract: ring and spiral
//! enumeration walk the sides in this order, starting from direction 4.

use crate::cube::Cube;
use crate::error::CoordError;

/// Unit step vectors in cube `(x, y, z)` order, indexed 0..6.
pub const DIRECTIONS: [Cube; 6] = [
    Cube::raw(1, -1, 0),
    Cube::raw(1, 0, -1),
    Cube::raw(0, 1, -1),
    Cube::raw(-1, 1, 0),
    Cube::raw(-1, 0, 1),
    Cube::raw(0, -1, 1),
];

/// Unit diagonal vectors in cube `(x, y, z)` order, indexed 0..6.
pub const DIAGONALS: [Cube; 6] = [
    Cube::raw(2, -1, -1),
    Cube::raw(1, 1, -2),
    Cube::raw(-1, 2, -1),
    Cube::raw(-2, 1, 1),
    Cube::raw(-1, -1, 2),
    Cube::raw(1, -2, 1),
];

/// One of the six hex directions.
///
/// # Examples
///
/// ```
/// use hexcube_core::{Cube, Direction};
///
/// assert_eq!(Direction::from_index(4), Some(Direction::D4));
/// assert_eq!(Direction::D0.vector(), Cube::new(1, -1, 0).unwrap());
/// assert_eq!(Direction::D0.opposite(), Direction::D3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(1, -1, 0)`
    D0 = 0,
    /// `(1, 0, -1)`
    D1 = 1,
    /// `(0, 1, -1)`
    D2 = 2,
    /// `(-1, 1, 0)`
    D3 = 3,
    /// `(-1, 0, 1)`
    D4 = 4,
    /// `(0, -1, 1)`
    D5 = 5,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::D0,
        Direction::D1,
        Direction::D2,
        Direction::D3,
        Direction::D4,
        Direction::D5,
    ];

    /// Look up a direction by index. Returns `None` outside `0..6`.
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// Index of this direction in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit step vector.
    pub fn vector(self) -> Cube {
        DIRECTIONS[self.index()]
    }

    /// Unit diagonal vector.
    pub fn diagonal(self) -> Cube {
        DIAGONALS[self.index()]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 3) % 6]
    }
}

impl TryFrom<usize> for Direction {
    type Error = CoordError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::from_index(index).ok_or(CoordError::InvalidDirection { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_are_valid_cubes() {
        for v in DIRECTIONS.iter().chain(DIAGONALS.iter()) {
            assert_eq!(v.x() + v.y() + v.z(), 0, "{v} breaks the invariant");
        }
    }

    #[test]
    fn directions_are_unit_steps() {
        for d in Direction::ALL {
            let [x, y, z] = d.vector().to_array();
            assert_eq!(x.abs().max(y.abs()).max(z.abs()), 1);
        }
    }

    #[test]
    fn diagonal_is_sum_of_adjacent_directions() {
        for d in Direction::ALL {
            let next = Direction::ALL[(d.index() + 1) % 6];
            assert_eq!(d.diagonal(), d.vector() + next.vector());
        }
    }

    #[test]
    fn opposite_cancels() {
        for d in Direction::ALL {
            assert_eq!(d.vector() + d.opposite().vector(), Cube::ORIGIN);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Direction::try_from(5), Ok(Direction::D5));
        assert_eq!(
            Direction::try_from(6),
            Err(CoordError::InvalidDirection { index: 6 })
        );
    }
}
