//! Map construction for hexcube grids.
//!
//! [`GridBuilder`] owns a [`SpatialIndex`](hexcube_index::SpatialIndex) and
//! a [`PathFinder`](hexcube_path::PathFinder). It fills the index from a
//! radius or an explicit list, removes cells, prunes everything an origin
//! cannot reach, and hands each tile to a [`TilePresenter`] so a renderer
//! can attach its own object.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod error;
pub mod present;

pub use builder::GridBuilder;
pub use config::{ConfigError, GridConfig};
pub use error::GridError;
pub use present::{NullPresenter, TilePresenter};
