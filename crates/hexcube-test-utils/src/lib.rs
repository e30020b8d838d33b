//! Test utilities and mock presenters for hexcube development.
//!
//! - [`RecordingPresenter`] hands out sequential handles and remembers every
//!   tile it was shown.
//! - [`fixtures`] builds common maps: filled disks, disks with deterministic
//!   holes, walled rings.
//! - [`assert_walk`] checks the structural properties every returned path
//!   must have.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hexcube_core::{math, Cube, WorldPos};
use hexcube_grid::TilePresenter;
use hexcube_index::{Container, PayloadHandle};

/// Presenter that returns handles `first, first + 1, ...` and records each
/// call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    next: u64,
    pub calls: Vec<(Cube, WorldPos, PayloadHandle)>,
}

impl RecordingPresenter {
    pub fn new(first: u64) -> Self {
        Self {
            next: first,
            calls: Vec::new(),
        }
    }

    /// Handle issued for `cube`, if it was presented.
    pub fn handle_for(&self, cube: Cube) -> Option<PayloadHandle> {
        self.calls
            .iter()
            .find(|(c, _, _)| *c == cube)
            .map(|(_, _, h)| *h)
    }
}

impl TilePresenter for RecordingPresenter {
    fn present(&mut self, cube: Cube, position: WorldPos) -> Option<PayloadHandle> {
        let handle = PayloadHandle(self.next);
        self.next += 1;
        self.calls.push((cube, position, handle));
        Some(handle)
    }
}

/// Presenter that only creates objects for tiles on even rings around the
/// origin, returning `None` elsewhere.
#[derive(Debug, Default)]
pub struct EvenRingPresenter {
    pub skipped: usize,
}

impl TilePresenter for EvenRingPresenter {
    fn present(&mut self, cube: Cube, _position: WorldPos) -> Option<PayloadHandle> {
        let ring = math::distance(Cube::ORIGIN, cube);
        if ring % 2 == 0 {
            Some(PayloadHandle(u64::from(ring)))
        } else {
            self.skipped += 1;
            None
        }
    }
}

/// Assert that `path` runs from `origin` to `target` through cells present
/// in `container`, one hex step at a time, without revisiting a cell.
pub fn assert_walk(container: &Container, path: &[Cube], origin: Cube, target: Cube) {
    assert_eq!(path.first(), Some(&origin), "path must start at origin");
    assert_eq!(path.last(), Some(&target), "path must end at target");
    for w in path.windows(2) {
        assert_eq!(
            math::distance(w[0], w[1]),
            1,
            "{} -> {} is not a single step",
            w[0],
            w[1]
        );
    }
    for (i, c) in path.iter().enumerate() {
        assert!(container.contains(*c), "{c} is not present");
        assert!(!path[..i].contains(c), "{c} is visited twice");
    }
}
