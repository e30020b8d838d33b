//! Core types and geometry for the hexcube grid framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! validated [`Cube`] coordinate, its axial and fractional companions, the
//! fixed [`Direction`] ordering, the pure geometry functions in [`math`],
//! coordinate set algebra in [`sets`], and the world-space [`HexLayout`].
//!
//! # Examples
//!
//! ```
//! use hexcube_core::{math, Cube};
//!
//! let origin = Cube::ORIGIN;
//! let far = Cube::new(3, -1, -2).unwrap();
//! assert_eq!(math::distance(origin, far), 3);
//! assert_eq!(math::line(origin, far).len(), 4);
//! assert_eq!(math::spiral(origin, 2).len(), 19);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod direction;
pub mod error;
pub mod layout;
pub mod math;
pub mod sets;

pub use cube::{Axial, Cube, FracAxial, FracCube};
pub use direction::Direction;
pub use error::CoordError;
pub use layout::{HexLayout, WorldPos};
