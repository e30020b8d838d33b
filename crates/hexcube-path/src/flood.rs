//! Breadth-first reachability.

use hexcube_core::Cube;
use hexcube_index::Container;
use indexmap::IndexSet;
use tracing::trace;

/// Cells reachable from `origin` in at most `steps` moves through present
/// cells, grouped by step count. Fringe 0 is `[origin]`; fringe `i` holds
/// the cells first reached on step `i`. Trailing empty fringes are dropped.
///
/// Returns no fringes when `origin` is absent.
pub fn flood_fringes(container: &Container, origin: Cube, steps: u32) -> Vec<Vec<Cube>> {
    if !container.contains(origin) {
        return Vec::new();
    }
    let mut visited: IndexSet<Cube> = IndexSet::new();
    visited.insert(origin);
    let mut fringes = vec![vec![origin]];

    for _ in 0..steps {
        let mut next = Vec::new();
        if let Some(last) = fringes.last() {
            for &cube in last {
                for n in container.neighbors(cube) {
                    if visited.insert(n) {
                        next.push(n);
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        fringes.push(next);
    }
    fringes
}

/// Every cell reachable from `origin` in at most `steps` moves through
/// present cells, in discovery order with `origin` first.
///
/// Returns an empty list when `origin` is absent.
///
/// # Examples
///
/// ```
/// use hexcube_core::{math, Cube, HexLayout};
/// use hexcube_index::SpatialIndex;
/// use hexcube_path::flood_fill;
///
/// let mut index = SpatialIndex::new(HexLayout::default());
/// for cube in math::hexagon(Cube::ORIGIN, 3) {
///     index.spawn(cube);
/// }
/// assert_eq!(flood_fill(index.all(), Cube::ORIGIN, 2).len(), 19);
/// ```
pub fn flood_fill(container: &Container, origin: Cube, steps: u32) -> Vec<Cube> {
    trace!(%origin, steps, "flood fill");
    flood_fringes(container, origin, steps)
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcube_core::{math, HexLayout};
    use hexcube_index::Entity;
    use proptest::prelude::*;

    fn container_of(cubes: &[Cube]) -> Container {
        let layout = HexLayout::default();
        let mut c = Container::new();
        c.add_many(cubes.iter().map(|&cube| Entity::shared(&layout, cube)));
        c
    }

    #[test]
    fn absent_origin_yields_nothing() {
        let c = container_of(&math::hexagon(Cube::ORIGIN, 1));
        assert!(flood_fill(&c, Cube::from_axial(4, 4), 3).is_empty());
        assert!(flood_fringes(&c, Cube::from_axial(4, 4), 3).is_empty());
    }

    #[test]
    fn zero_steps_is_origin_only() {
        let c = container_of(&math::hexagon(Cube::ORIGIN, 1));
        assert_eq!(flood_fill(&c, Cube::ORIGIN, 0), vec![Cube::ORIGIN]);
    }

    #[test]
    fn fringes_on_a_full_disk_are_rings() {
        let c = container_of(&math::hexagon(Cube::ORIGIN, 3));
        let fringes = flood_fringes(&c, Cube::ORIGIN, 10);
        assert_eq!(fringes.len(), 4);
        for (i, fringe) in fringes.iter().enumerate() {
            let expected: IndexSet<Cube> = math::ring(Cube::ORIGIN, i as u32).into_iter().collect();
            let got: IndexSet<Cube> = fringe.iter().copied().collect();
            assert_eq!(got, expected, "fringe {i}");
        }
    }

    #[test]
    fn walls_limit_reach() {
        let mut cubes = math::hexagon(Cube::ORIGIN, 3);
        let ring2 = math::ring(Cube::ORIGIN, 2);
        cubes.retain(|c| !ring2.contains(c));
        let c = container_of(&cubes);
        let reached = flood_fill(&c, Cube::ORIGIN, 10);
        assert_eq!(reached.len(), 7);
        assert_eq!(reached[0], Cube::ORIGIN);
    }

    #[test]
    fn detour_costs_steps() {
        // Ring 1 minus one gap: reaching ring 2 behind the wall takes longer.
        let mut cubes = math::hexagon(Cube::ORIGIN, 2);
        let wall: Vec<Cube> = math::ring(Cube::ORIGIN, 1).into_iter().skip(1).collect();
        cubes.retain(|c| !wall.contains(c));
        let c = container_of(&cubes);
        let near = flood_fill(&c, Cube::ORIGIN, 1);
        assert_eq!(near.len(), 2);
        let all = flood_fill(&c, Cube::ORIGIN, 20);
        assert_eq!(all.len(), cubes.len());
    }

    proptest! {
        #[test]
        fn flood_is_within_steps_and_unique(
            holes in prop::collection::vec((-4i32..=4, -4i32..=4), 0..25),
            steps in 0u32..8,
        ) {
            let mut cubes = math::hexagon(Cube::ORIGIN, 4);
            let holes: Vec<Cube> = holes
                .into_iter()
                .map(|(q, r)| Cube::from_axial(q, r))
                .filter(|h| *h != Cube::ORIGIN)
                .collect();
            cubes.retain(|c| !holes.contains(c));
            let c = container_of(&cubes);
            let reached = flood_fill(&c, Cube::ORIGIN, steps);
            let set: IndexSet<Cube> = reached.iter().copied().collect();
            prop_assert_eq!(set.len(), reached.len());
            prop_assert_eq!(reached[0], Cube::ORIGIN);
            for r in &reached {
                prop_assert!(c.contains(*r));
                prop_assert!(math::distance(Cube::ORIGIN, *r) <= steps);
            }
        }
    }
}
