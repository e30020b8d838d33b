//! The registry of named containers.

use crate::container::Container;
use crate::entity::{Entity, EntityRef};
use hexcube_core::{Cube, HexLayout};
use indexmap::{IndexMap, IndexSet};

/// Label of the canonical container holding every entity on the map.
pub const ALL_LABEL: &str = "all";

/// Named containers over one grid, plus the layout that places them.
///
/// The [`ALL_LABEL`] container always exists. Other labels are created on
/// first use and listed in creation order after it.
///
/// # Examples
///
/// ```
/// use hexcube_core::{math, Cube, HexLayout};
/// use hexcube_index::{SpatialIndex, ALL_LABEL};
///
/// let mut index = SpatialIndex::new(HexLayout::default());
/// for cube in math::hexagon(Cube::ORIGIN, 1) {
///     index.spawn(cube);
/// }
/// let visible = index.all().get_many(&[Cube::ORIGIN]);
/// index.get_or_create("visible").add_many(visible);
///
/// assert!(index.discard(Cube::ORIGIN));
/// assert_eq!(index.all().len(), 6);
/// assert!(index.container("visible").unwrap().is_empty());
/// assert_eq!(index.labels().collect::<Vec<_>>(), vec![ALL_LABEL, "visible"]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    layout: HexLayout,
    all: Container,
    named: IndexMap<String, Container>,
}

impl SpatialIndex {
    /// Create an index with an empty [`ALL_LABEL`] container.
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            all: Container::new(),
            named: IndexMap::new(),
        }
    }

    /// Layout used to position spawned entities.
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Create an entity at `cube` and add it to [`ALL_LABEL`], unless that
    /// coordinate is already occupied. Returns whether an entity was created.
    pub fn spawn(&mut self, cube: Cube) -> bool {
        if self.all.contains(cube) {
            return false;
        }
        self.all.add(Entity::shared(&self.layout, cube))
    }

    /// The container named `label`, created empty if missing.
    pub fn get_or_create(&mut self, label: &str) -> &mut Container {
        if label == ALL_LABEL {
            return &mut self.all;
        }
        self.named.entry(label.to_owned()).or_default()
    }

    /// The container named `label`, if it exists.
    pub fn container(&self, label: &str) -> Option<&Container> {
        if label == ALL_LABEL {
            Some(&self.all)
        } else {
            self.named.get(label)
        }
    }

    /// Mutable access to the container named `label`, if it exists.
    pub fn container_mut(&mut self, label: &str) -> Option<&mut Container> {
        if label == ALL_LABEL {
            Some(&mut self.all)
        } else {
            self.named.get_mut(label)
        }
    }

    /// Drop a named container. [`ALL_LABEL`] cannot be dropped; use
    /// [`clear`](Self::clear) to empty it.
    pub fn remove_container(&mut self, label: &str) -> Option<Container> {
        if label == ALL_LABEL {
            return None;
        }
        self.named.shift_remove(label)
    }

    /// The canonical container.
    pub fn all(&self) -> &Container {
        &self.all
    }

    /// Mutable access to the canonical container.
    pub fn all_mut(&mut self) -> &mut Container {
        &mut self.all
    }

    /// Every label, [`ALL_LABEL`] first, then creation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(ALL_LABEL).chain(self.named.keys().map(String::as_str))
    }

    /// The entity at `cube` in the canonical container.
    pub fn entity(&self, cube: Cube) -> Option<&EntityRef> {
        self.all.get(cube)
    }

    /// Remove `cube` from every container. Returns whether any container
    /// held it.
    pub fn discard(&mut self, cube: Cube) -> bool {
        let mut hit = self.all.remove(cube).is_some();
        for container in self.named.values_mut() {
            hit |= container.remove(cube).is_some();
        }
        hit
    }

    /// Remove every listed coordinate from every container. Returns the
    /// number of distinct coordinates that at least one container held.
    pub fn discard_many(&mut self, cubes: &[Cube]) -> usize {
        let targets: IndexSet<Cube> = cubes.iter().copied().collect();
        let mut removed = IndexSet::new();
        self.all.drain_into(&targets, &mut removed);
        for container in self.named.values_mut() {
            container.drain_into(&targets, &mut removed);
        }
        removed.len()
    }

    /// Drop every named container and empty [`ALL_LABEL`].
    pub fn clear(&mut self) {
        self.named.clear();
        self.all.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(HexLayout::default())
    }
}
