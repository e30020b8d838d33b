//! Reusable maps.

use hexcube_core::{math, Cube};
use hexcube_grid::{GridBuilder, GridConfig};

/// A default-config grid filled with a hexagon of `radius`.
pub fn radial_grid(radius: u32) -> GridBuilder {
    let mut grid = match GridBuilder::new(GridConfig::default()) {
        Ok(g) => g,
        Err(e) => panic!("default grid config rejected: {e}"),
    };
    grid.build_radial(radius);
    grid
}

/// Deterministic pseudo-random pick of roughly `per_mille / 1000` of the
/// cells of a hexagon of `radius`, never including the origin.
pub fn scattered_holes(radius: u32, seed: u64, per_mille: u64) -> Vec<Cube> {
    math::hexagon(Cube::ORIGIN, radius)
        .into_iter()
        .enumerate()
        .filter(|&(i, c)| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407));
            c != Cube::ORIGIN && (h >> 33) % 1000 < per_mille
        })
        .map(|(_, c)| c)
        .collect()
}

/// A radial grid with [`scattered_holes`] removed.
pub fn holey_grid(radius: u32, seed: u64, per_mille: u64) -> GridBuilder {
    let mut grid = radial_grid(radius);
    grid.remove_many(&scattered_holes(radius, seed, per_mille));
    grid
}

/// A radial grid of `radius` whose ring at `wall` is removed except for
/// the cells listed in `gaps` (indices into that ring).
pub fn walled_grid(radius: u32, wall: u32, gaps: &[usize]) -> GridBuilder {
    let mut grid = radial_grid(radius);
    let ring: Vec<Cube> = math::ring(Cube::ORIGIN, wall)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !gaps.contains(i))
        .map(|(_, c)| c)
        .collect();
    grid.remove_many(&ring);
    grid
}
