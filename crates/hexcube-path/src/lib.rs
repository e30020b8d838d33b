//! Pathfinding over hexcube containers.
//!
//! [`PathFinder`] runs A* across the cells present in a
//! [`Container`](hexcube_index::Container): a cell is walkable exactly when
//! the container holds it, every step costs 1, and the heuristic is hex
//! distance. Costs live in a table owned by each query, so a container can
//! be searched by many queries at once.
//!
//! [`flood_fill`] is the breadth-first companion: every present cell
//! reachable from an origin within a step budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod config;
pub mod error;
pub mod flood;

pub use astar::{find_path, PathCost, PathFinder, Search};
pub use config::PathConfig;
pub use error::PathError;
pub use flood::{flood_fill, flood_fringes};
