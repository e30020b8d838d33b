//! Pure cube-coordinate geometry: neighbours, distance, lines, rings,
//! spirals, rounding and rotation.
//!
//! Every function here is referentially transparent. Direction-indexed
//! operations use the fixed ordering in [`direction`](crate::direction).

use crate::cube::{Cube, FracCube};
use crate::direction::{Direction, DIRECTIONS};
use smallvec::SmallVec;

/// The cube `distance` steps from `origin` along `direction`.
pub fn neighbor(origin: Cube, direction: Direction, distance: i32) -> Cube {
    origin + direction.vector() * distance
}

/// The six adjacent cubes, in direction order.
pub fn neighbors(origin: Cube) -> SmallVec<[Cube; 6]> {
    DIRECTIONS.iter().map(|&d| origin + d).collect()
}

/// Every cube within `radius` of `origin`.
///
/// A `radius == 1` query is a neighbour query and excludes `origin`; any
/// other radius is a region scan and includes it as the center point.
///
/// # Examples
///
/// ```
/// use hexcube_core::{math, Cube};
///
/// assert_eq!(math::neighbors_within(Cube::ORIGIN, 1).len(), 6);
/// assert_eq!(math::neighbors_within(Cube::ORIGIN, 2).len(), 19);
/// ```
pub fn neighbors_within(origin: Cube, radius: u32) -> Vec<Cube> {
    let mut out = hexagon(origin, radius);
    if radius == 1 {
        out.retain(|&c| c != origin);
    }
    out
}

/// The filled hexagon of `radius` around `center`, center included.
///
/// Bounded scan over the enclosing cube, ordered by `x` then `y`.
/// Contains exactly `1 + 3 * radius * (radius + 1)` cubes.
pub fn hexagon(center: Cube, radius: u32) -> Vec<Cube> {
    let r = radius as i32;
    let n = 1 + 3 * radius as usize * (radius as usize + 1);
    let mut out = Vec::with_capacity(n);
    for dx in -r..=r {
        for dy in -r..=r {
            let dz = -dx - dy;
            if dz.abs() > r {
                continue;
            }
            out.push(center + Cube::raw(dx, dy, dz));
        }
    }
    out
}

/// The cube `distance` diagonal steps from `origin` along `direction`.
pub fn diagonal_neighbor(origin: Cube, direction: Direction, distance: i32) -> Cube {
    origin + direction.diagonal() * distance
}

/// Diagonal neighbours of `origin` at steps `1..=distance`, grouped by
/// direction.
pub fn diagonal_neighbors(origin: Cube, distance: u32) -> Vec<Cube> {
    let mut out = Vec::with_capacity(6 * distance as usize);
    for dir in Direction::ALL {
        for step in 1..=distance as i32 {
            out.push(diagonal_neighbor(origin, dir, step));
        }
    }
    out
}

/// Grid distance: `max(|dx|, |dy|, |dz|)`.
pub fn distance(a: Cube, b: Cube) -> u32 {
    let dx = (a.x() as i64 - b.x() as i64).unsigned_abs();
    let dy = (a.y() as i64 - b.y() as i64).unsigned_abs();
    let dz = (a.z() as i64 - b.z() as i64).unsigned_abs();
    dx.max(dy).max(dz) as u32
}

/// Componentwise linear interpolation, `t` in `[0, 1]`.
pub fn lerp(a: impl Into<FracCube>, b: impl Into<FracCube>, t: f64) -> FracCube {
    let a = a.into();
    let b = b.into();
    FracCube {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

/// Snap a fractional cube onto the grid.
///
/// Each component is rounded to the nearest integer (halves to even), then
/// the component with the largest rounding residual is rebuilt from the
/// other two. The residual comparison checks `x` first, then `y`, and falls
/// back to `z`; ties resolve in that order.
///
/// # Examples
///
/// ```
/// use hexcube_core::{math, Cube, FracCube};
///
/// let c = math::round(FracCube::new(0.6, -0.2, -0.4));
/// assert_eq!(c, Cube::new(1, 0, -1).unwrap());
/// ```
pub fn round(frac: FracCube) -> Cube {
    let mut rx = frac.x.round_ties_even();
    let mut ry = frac.y.round_ties_even();
    let mut rz = frac.z.round_ties_even();

    let x_diff = (rx - frac.x).abs();
    let y_diff = (ry - frac.y).abs();
    let z_diff = (rz - frac.z).abs();

    if x_diff > y_diff && x_diff > z_diff {
        rx = -ry - rz;
    } else if y_diff > z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    Cube::raw(rx as i32, ry as i32, rz as i32)
}

/// Cubes on the straight line from `a` to `b`, both endpoints included.
///
/// Samples `round(lerp(a, b, i / d))` for `i` in `0..=d` where
/// `d = distance(a, b)`, giving `d + 1` cubes. `line(a, a)` is `[a]`.
pub fn line(a: Cube, b: Cube) -> Vec<Cube> {
    let d = distance(a, b);
    if d == 0 {
        return vec![a];
    }
    let steps = d as f64;
    (0..=d)
        .map(|i| round(lerp(a, b, i as f64 / steps)))
        .collect()
}

/// The `step`-th cube of [`line(a, b)`](line). `step` is clamped to the
/// line's length.
pub fn point_on_line(a: Cube, b: Cube, step: u32) -> Cube {
    let d = distance(a, b);
    if d == 0 {
        return a;
    }
    let step = step.min(d);
    round(lerp(a, b, step as f64 / d as f64))
}

/// The hexagonal ring of cubes at exactly `radius` from `origin`.
///
/// `ring(origin, 0)` is `[origin]`. Otherwise the walk starts at
/// `origin + D4 * radius` and takes six sides of `radius` steps, side `i`
/// stepping along direction `i`, for `6 * radius` cubes.
pub fn ring(origin: Cube, radius: u32) -> Vec<Cube> {
    if radius == 0 {
        return vec![origin];
    }
    let mut out = Vec::with_capacity(6 * radius as usize);
    let mut current = neighbor(origin, Direction::D4, radius as i32);
    for side in DIRECTIONS {
        for _ in 0..radius {
            out.push(current);
            current += side;
        }
    }
    out
}

/// `origin` followed by every ring from 1 to `radius`, innermost first.
///
/// Contains `1 + 3 * radius * (radius + 1)` cubes with no repeats.
pub fn spiral(origin: Cube, radius: u32) -> Vec<Cube> {
    let n = 1 + 3 * radius as usize * (radius as usize + 1);
    let mut out = Vec::with_capacity(n);
    out.push(origin);
    for r in 1..=radius {
        out.extend(ring(origin, r));
    }
    out
}

/// Rotate 60° clockwise about the grid origin: `(-z, -x, -y)`.
pub fn rotate_right(cube: Cube) -> Cube {
    Cube::raw(-cube.z(), -cube.x(), -cube.y())
}

/// Rotate 60° counter-clockwise about the grid origin: `(-y, -z, -x)`.
pub fn rotate_left(cube: Cube) -> Cube {
    Cube::raw(-cube.y(), -cube.z(), -cube.x())
}
