//! Benchmark profiles for the hexcube crates.
//!
//! - [`reference_profile`]: radius-30 map (2791 tiles) with 10% holes
//! - [`stress_profile`]: radius-100 map (30301 tiles) with 25% holes
//! - [`query_pairs`]: deterministic origin/target pairs over a map

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexcube_core::{math, Cube};
use hexcube_grid::{GridBuilder, GridConfig};

/// Radius-30 map with roughly 10% of tiles removed, pruned to the origin's
/// component.
pub fn reference_profile(seed: u64) -> GridBuilder {
    profile(30, seed, 100)
}

/// Radius-100 map with roughly 25% of tiles removed, pruned to the origin's
/// component.
pub fn stress_profile(seed: u64) -> GridBuilder {
    profile(100, seed, 250)
}

fn profile(radius: u32, seed: u64, per_mille: u64) -> GridBuilder {
    let mut grid = GridBuilder::new(GridConfig::default()).unwrap();
    grid.build_radial(radius);
    let holes: Vec<Cube> = grid
        .all()
        .all_coords()
        .into_iter()
        .enumerate()
        .filter(|&(i, c)| c != Cube::ORIGIN && mix(seed, i as u64) % 1000 < per_mille)
        .map(|(_, c)| c)
        .collect();
    grid.remove_many(&holes);
    grid.prune_to_reachable(Cube::ORIGIN, radius * 4).unwrap();
    grid
}

fn mix(seed: u64, i: u64) -> u64 {
    (seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407)))
        >> 33
}

/// `n` deterministic origin/target pairs drawn from the tiles of `grid`.
pub fn query_pairs(grid: &GridBuilder, n: usize, seed: u64) -> Vec<(Cube, Cube)> {
    let coords = grid.all().all_coords();
    if coords.is_empty() {
        return Vec::new();
    }
    let len = coords.len() as u64;
    (0..n as u64)
        .map(|i| {
            let a = coords[(mix(seed, i) % len) as usize];
            let b = coords[(mix(seed ^ 0x9e37_79b9, i + 7) % len) as usize];
            (a, b)
        })
        .collect()
}

/// Total hex distance over `pairs`, a lower bound on total path length.
pub fn distance_sum(pairs: &[(Cube, Cube)]) -> u64 {
    pairs
        .iter()
        .map(|&(a, b)| u64::from(math::distance(a, b)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_is_connected() {
        let grid = reference_profile(42);
        assert!(grid.all().len() > 2000);
        let mut g = grid.clone();
        assert_eq!(g.prune_to_reachable(Cube::ORIGIN, 1000), Ok(0));
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(7).all().all_coords();
        let b = reference_profile(7).all().all_coords();
        assert_eq!(a, b);
    }

    #[test]
    fn query_pairs_are_on_the_map() {
        let grid = reference_profile(3);
        let pairs = query_pairs(&grid, 50, 3);
        assert_eq!(pairs.len(), 50);
        for (a, b) in &pairs {
            assert!(grid.all().contains(*a) && grid.all().contains(*b));
        }
        assert!(distance_sum(&pairs) > 0);
    }
}
