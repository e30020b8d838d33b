//! Grid entities and the opaque payload handle attached by presenters.

use hexcube_core::{Cube, HexLayout, WorldPos};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Opaque reference to a caller-owned object, such as a tile in a scene
/// graph. The index stores it and hands it back; it never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayloadHandle(pub u64);

impl fmt::Display for PayloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PayloadHandle {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Shared reference to an [`Entity`]. Containers hold these; an entity is
/// dropped once no container (and no caller) holds it.
pub type EntityRef = Arc<Entity>;

/// One hex on the map: its coordinate, world position, and optional payload.
///
/// The coordinate and position are fixed at construction. The payload slot
/// is interior-mutable so a presenter can attach a handle while the entity
/// is shared across containers.
#[derive(Debug)]
pub struct Entity {
    cube: Cube,
    position: WorldPos,
    payload: Mutex<Option<PayloadHandle>>,
}

impl Entity {
    /// Create an entity at `cube` with an explicit world position.
    pub fn new(cube: Cube, position: WorldPos) -> Self {
        Self {
            cube,
            position,
            payload: Mutex::new(None),
        }
    }

    /// Create a shared entity at `cube`, deriving its position from `layout`.
    pub fn shared(layout: &HexLayout, cube: Cube) -> EntityRef {
        Arc::new(Self::new(cube, layout.cube_to_world(cube)))
    }

    /// Grid coordinate.
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// World position of the hex center.
    pub fn position(&self) -> WorldPos {
        self.position
    }

    /// The attached payload handle, if any.
    pub fn payload(&self) -> Option<PayloadHandle> {
        *self.slot()
    }

    /// Attach a payload handle, returning the one it replaces.
    pub fn set_payload(&self, handle: PayloadHandle) -> Option<PayloadHandle> {
        self.slot().replace(handle)
    }

    /// Detach and return the payload handle.
    pub fn take_payload(&self) -> Option<PayloadHandle> {
        self.slot().take()
    }

    // The slot is a plain `Option<Copy>`, so a poisoned lock still holds a
    // consistent value.
    fn slot(&self) -> MutexGuard<'_, Option<PayloadHandle>> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
