//! hexcube: hex grids in cube coordinates.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hexcube sub-crates. For most users, adding `hexcube` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexcube::prelude::*;
//!
//! let mut grid = GridBuilder::new(GridConfig::default()).unwrap();
//! grid.build_radial(4);
//!
//! // Knock out most of ring 2, leaving one gap to squeeze through.
//! let wall: Vec<Cube> = math::ring(Cube::ORIGIN, 2).into_iter().skip(1).collect();
//! grid.remove_many(&wall);
//!
//! let target = Cube::from_axial(-4, 2);
//! let path = grid.find_path(Cube::ORIGIN, target).unwrap();
//! assert_eq!(path.first(), Some(&Cube::ORIGIN));
//! assert_eq!(path.last(), Some(&target));
//!
//! // Tag the route in its own container.
//! grid.copy_to("path", &path);
//! assert_eq!(grid.index().container("path").unwrap().len(), path.len());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`coords`] | `hexcube-core` | `Cube`, directions, geometry, set algebra, layout |
//! | [`index`] | `hexcube-index` | Entities, containers, the spatial index |
//! | [`path`] | `hexcube-path` | A* and flood fill |
//! | [`grid`] | `hexcube-grid` | Map building, pruning, presenters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates and geometry (`hexcube-core`).
///
/// The free functions live in [`coords::math`] and [`coords::sets`].
pub use hexcube_core as coords;

/// Entities and named containers (`hexcube-index`).
pub use hexcube_index as index;

/// Pathfinding (`hexcube-path`).
///
/// [`path::PathFinder`] for A*, [`path::flood_fill`] for reachability.
pub use hexcube_path as path;

/// Map building (`hexcube-grid`).
///
/// [`grid::GridBuilder`] owns an index and a path finder;
/// [`grid::TilePresenter`] is the hook for attaching visuals.
pub use hexcube_grid as grid;

/// Common imports for typical hexcube usage.
///
/// ```rust
/// use hexcube::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use hexcube_core::{math, sets, Axial, Cube, Direction, HexLayout, WorldPos};

    // Index
    pub use hexcube_index::{Container, EntityRef, PayloadHandle, SpatialIndex, ALL_LABEL};

    // Pathfinding
    pub use hexcube_path::{find_path, flood_fill, PathConfig, PathFinder};

    // Grid
    pub use hexcube_grid::{GridBuilder, GridConfig, NullPresenter, TilePresenter};

    // Errors
    pub use hexcube_core::CoordError;
    pub use hexcube_grid::{ConfigError, GridError};
    pub use hexcube_path::PathError;
}
