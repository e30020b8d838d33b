//! A* search across the cells of a container.

use crate::config::PathConfig;
use crate::error::PathError;
use hexcube_core::{math, Cube};
use hexcube_index::Container;
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Cost bookkeeping for one cell during a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathCost {
    /// Steps taken from the origin along the best known route.
    pub g: u32,
    /// Hex distance to the target.
    pub h: u32,
}

impl PathCost {
    /// Estimated total cost, `g + h`.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Outcome of a successful [`PathFinder::search`].
#[derive(Clone, Debug, Default)]
pub struct Search {
    /// Origin to target inclusive. Empty when origin and target coincide.
    pub path: Vec<Cube>,
    /// Number of cells taken off the open set and expanded.
    pub expansions: usize,
    /// Best known cost for every cell the search discovered, in discovery
    /// order.
    pub costs: IndexMap<Cube, PathCost>,
}

#[derive(Clone, Copy, Debug)]
struct Node {
    cost: PathCost,
    parent: Option<Cube>,
}

#[derive(Debug, PartialEq, Eq)]
struct Open {
    cube: Cube,
    cost: PathCost,
    seq: u64,
}

// BinaryHeap pops the greatest element, so the ordering is reversed:
// lowest f first, then lowest h, then earliest push.
impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .f()
            .cmp(&self.cost.f())
            .then_with(|| other.cost.h.cmp(&self.cost.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* over the present cells of a [`Container`].
///
/// The finder holds only configuration. All per-query state (open heap,
/// closed set, cost table) is created inside each call, so one finder and
/// one container can serve any number of queries, including concurrent
/// ones over a shared `&Container`.
///
/// # Examples
///
/// ```
/// use hexcube_core::{math, Cube, HexLayout};
/// use hexcube_index::SpatialIndex;
/// use hexcube_path::{PathConfig, PathFinder};
///
/// let mut index = SpatialIndex::new(HexLayout::default());
/// for cube in math::hexagon(Cube::ORIGIN, 2) {
///     index.spawn(cube);
/// }
/// let finder = PathFinder::new(PathConfig::default());
/// let target = Cube::from_axial(2, -1);
/// let path = finder.find(index.all(), Cube::ORIGIN, target).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.first(), Some(&Cube::ORIGIN));
/// assert_eq!(path.last(), Some(&target));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    config: PathConfig,
}

impl PathFinder {
    /// Create a finder.
    pub fn new(config: PathConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Shortest path from `origin` to `target` through cells present in
    /// `container`, both endpoints included.
    ///
    /// Returns an empty path when `origin == target`. Fails with
    /// [`PathError::PathNotFound`] when either endpoint is absent or the
    /// two are disconnected, and with [`PathError::ExpansionLimit`] when
    /// the configured cap is reached first.
    pub fn find(
        &self,
        container: &Container,
        origin: Cube,
        target: Cube,
    ) -> Result<Vec<Cube>, PathError> {
        self.search(container, origin, target).map(|s| s.path)
    }

    /// Like [`find`](Self::find), also returning the explored cost table
    /// and expansion count.
    pub fn search(
        &self,
        container: &Container,
        origin: Cube,
        target: Cube,
    ) -> Result<Search, PathError> {
        trace!(%origin, %target, "path search");
        if origin == target {
            return Ok(Search::default());
        }
        let not_found = PathError::PathNotFound { origin, target };
        if !container.contains(target) || !container.contains(origin) {
            debug!(%origin, %target, "path endpoint not present");
            return Err(not_found);
        }

        let mut nodes: IndexMap<Cube, Node> = IndexMap::new();
        let mut closed: IndexSet<Cube> = IndexSet::new();
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;
        let mut expansions = 0usize;

        let start = PathCost {
            g: 0,
            h: math::distance(origin, target),
        };
        nodes.insert(
            origin,
            Node {
                cost: start,
                parent: None,
            },
        );
        open.push(Open {
            cube: origin,
            cost: start,
            seq,
        });

        while let Some(Open { cube, cost, .. }) = open.pop() {
            if closed.contains(&cube) || nodes.get(&cube).is_some_and(|n| cost.g > n.cost.g) {
                continue;
            }
            if cube == target {
                let path = reconstruct(&nodes, target);
                debug!(%origin, %target, steps = path.len() - 1, expansions, "path found");
                return Ok(Search {
                    path,
                    expansions,
                    costs: nodes.into_iter().map(|(c, n)| (c, n.cost)).collect(),
                });
            }
            if let Some(limit) = self.config.max_expansions {
                if expansions >= limit {
                    debug!(%origin, %target, limit, "path search hit expansion limit");
                    return Err(PathError::ExpansionLimit { limit });
                }
            }
            expansions += 1;
            closed.insert(cube);

            for next in container.neighbors(cube) {
                if closed.contains(&next) {
                    continue;
                }
                let g = cost.g + math::distance(cube, next);
                if nodes.get(&next).is_some_and(|n| g >= n.cost.g) {
                    continue;
                }
                let next_cost = PathCost {
                    g,
                    h: math::distance(next, target),
                };
                nodes.insert(
                    next,
                    Node {
                        cost: next_cost,
                        parent: Some(cube),
                    },
                );
                seq += 1;
                open.push(Open {
                    cube: next,
                    cost: next_cost,
                    seq,
                });
            }
        }

        debug!(%origin, %target, expansions, "no path");
        Err(not_found)
    }
}

fn reconstruct(nodes: &IndexMap<Cube, Node>, target: Cube) -> Vec<Cube> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = nodes.get(&current).and_then(|n| n.parent) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Shortest path with an unbounded [`PathFinder`].
pub fn find_path(container: &Container, origin: Cube, target: Cube) -> Result<Vec<Cube>, PathError> {
    PathFinder::default().find(container, origin, target)
}
