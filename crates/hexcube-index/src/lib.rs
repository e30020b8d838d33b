//! Spatial index for hexcube grids.
//!
//! A [`SpatialIndex`] owns a set of named [`Container`]s, each mapping a
//! [`Cube`](hexcube_core::Cube) to a shared [`Entity`]. One entity can sit
//! in many containers at once; each container is one logical view of the
//! grid ("all", "visible", "path", ...).
//!
//! The canonical [`ALL_LABEL`] container exists from construction and is
//! where grid builders insert freshly created entities.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod container;
pub mod entity;
pub mod index;

pub use container::Container;
pub use entity::{Entity, EntityRef, PayloadHandle};
pub use index::{SpatialIndex, ALL_LABEL};
