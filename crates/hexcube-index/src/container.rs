//! A single named view of the grid: coordinate to shared entity.

use crate::entity::EntityRef;
use hexcube_core::{math, Cube, HexLayout, WorldPos};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// Mapping from [`Cube`] to [`EntityRef`], iterated in insertion order.
///
/// A coordinate holds at most one entity. Insertion is first-writer-wins:
/// adding an entity whose coordinate is already taken leaves the existing
/// entry in place.
#[derive(Clone, Debug, Default)]
pub struct Container {
    entries: IndexMap<Cube, EntityRef>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` at its own coordinate. Returns `false` if the
    /// coordinate was already occupied.
    pub fn add(&mut self, entity: EntityRef) -> bool {
        match self.entries.entry(entity.cube()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entity);
                true
            }
        }
    }

    /// Insert every entity, returning how many were new.
    pub fn add_many<I>(&mut self, entities: I) -> usize
    where
        I: IntoIterator<Item = EntityRef>,
    {
        entities.into_iter().map(|e| self.add(e)).filter(|added| *added).count()
    }

    /// Remove the entry at `cube`, if any. Remaining entries keep their order.
    pub fn remove(&mut self, cube: Cube) -> Option<EntityRef> {
        self.entries.shift_remove(&cube)
    }

    /// Remove every listed coordinate, returning how many were present.
    pub fn remove_many(&mut self, cubes: &[Cube]) -> usize {
        let targets: IndexSet<Cube> = cubes.iter().copied().collect();
        let before = self.entries.len();
        self.entries.retain(|c, _| !targets.contains(c));
        before - self.entries.len()
    }

    /// Remove entries in `targets`, recording each removed coordinate.
    pub(crate) fn drain_into(&mut self, targets: &IndexSet<Cube>, removed: &mut IndexSet<Cube>) {
        self.entries.retain(|c, _| {
            if targets.contains(c) {
                removed.insert(*c);
                false
            } else {
                true
            }
        });
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entity at `cube`.
    pub fn get(&self, cube: Cube) -> Option<&EntityRef> {
        self.entries.get(&cube)
    }

    /// Entities at the listed coordinates, in argument order. Missing
    /// coordinates are skipped.
    pub fn get_many(&self, cubes: &[Cube]) -> Vec<EntityRef> {
        cubes
            .iter()
            .filter_map(|c| self.entries.get(c))
            .cloned()
            .collect()
    }

    /// The entity whose hex contains the world position `pos`.
    pub fn get_at_world(&self, layout: &HexLayout, pos: WorldPos) -> Option<&EntityRef> {
        self.get(layout.world_to_cube(pos))
    }

    /// Every entity, in insertion order.
    pub fn all(&self) -> Vec<EntityRef> {
        self.entries.values().cloned().collect()
    }

    /// Every occupied coordinate, in insertion order.
    pub fn all_coords(&self) -> Vec<Cube> {
        self.entries.keys().copied().collect()
    }

    /// Whether `cube` is occupied.
    pub fn contains(&self, cube: Cube) -> bool {
        self.entries.contains_key(&cube)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(coordinate, entity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Cube, &EntityRef)> + '_ {
        self.entries.iter().map(|(c, e)| (*c, e))
    }

    /// The subset of `cubes` present here, in argument order.
    ///
    /// Scopes pure geometry to the map: `retain_present(&math::ring(c, 2))`
    /// is the part of that ring that exists.
    pub fn retain_present(&self, cubes: &[Cube]) -> Vec<Cube> {
        cubes.iter().copied().filter(|c| self.contains(*c)).collect()
    }

    /// Present cubes adjacent to `cube`, in direction order.
    pub fn neighbors(&self, cube: Cube) -> SmallVec<[Cube; 6]> {
        math::neighbors(cube)
            .into_iter()
            .filter(|n| self.contains(*n))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Cube, &'a EntityRef);
    type IntoIter = indexmap::map::Iter<'a, Cube, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
