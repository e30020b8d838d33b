//! Hooks for turning tiles into caller-side objects.

use hexcube_core::{Cube, WorldPos};
use hexcube_index::PayloadHandle;

/// Creates the visual (or any other) object for a tile.
///
/// [`GridBuilder::present`](crate::GridBuilder::present) calls this once per
/// tile on the map. A returned handle is stored on the tile's entity and is
/// visible from every container holding it.
pub trait TilePresenter {
    /// Create the object for the tile at `cube`, centered at `position`.
    fn present(&mut self, cube: Cube, position: WorldPos) -> Option<PayloadHandle>;
}

/// Presenter that creates nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl TilePresenter for NullPresenter {
    fn present(&mut self, _cube: Cube, _position: WorldPos) -> Option<PayloadHandle> {
        None
    }
}

impl<F> TilePresenter for F
where
    F: FnMut(Cube, WorldPos) -> Option<PayloadHandle>,
{
    fn present(&mut self, cube: Cube, position: WorldPos) -> Option<PayloadHandle> {
        self(cube, position)
    }
}
