//! The map builder.

use crate::config::{ConfigError, GridConfig};
use crate::error::GridError;
use crate::present::TilePresenter;
use hexcube_core::{math, sets, Cube, HexLayout};
use hexcube_index::{Container, SpatialIndex};
use hexcube_path::{flood_fill, PathFinder};
use tracing::{debug, trace, warn};

/// Builds and edits one hex map.
///
/// Every created tile lands in the canonical `"all"` container of the owned
/// [`SpatialIndex`]. Removal goes through the index, so a removed tile
/// disappears from every container at once.
///
/// # Examples
///
/// ```
/// use hexcube_core::Cube;
/// use hexcube_grid::{GridBuilder, GridConfig};
///
/// let mut grid = GridBuilder::new(GridConfig::default()).unwrap();
/// assert_eq!(grid.build_radial(2), 19);
/// grid.remove(Cube::new(1, -1, 0).unwrap());
/// let path = grid.find_path(Cube::ORIGIN, Cube::new(2, -2, 0).unwrap()).unwrap();
/// // Two steps straight through the removed tile become a three-step detour.
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GridBuilder {
    config: GridConfig,
    index: SpatialIndex,
    finder: PathFinder,
}

impl GridBuilder {
    /// Validate `config` and create an empty map.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = config.layout()?;
        let finder = PathFinder::new(config.path.clone());
        Ok(Self {
            config,
            index: SpatialIndex::new(layout),
            finder,
        })
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// World layout of the map.
    pub fn layout(&self) -> &HexLayout {
        self.index.layout()
    }

    /// The owned index.
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Mutable access to the owned index, for maintaining extra containers.
    pub fn index_mut(&mut self) -> &mut SpatialIndex {
        &mut self.index
    }

    /// The canonical container of every tile.
    pub fn all(&self) -> &Container {
        self.index.all()
    }

    /// Add a filled hexagon of `radius` around the origin. Tiles already on
    /// the map are kept. Returns the number of tiles created.
    pub fn build_radial(&mut self, radius: u32) -> usize {
        let created = self.insert(&math::hexagon(Cube::ORIGIN, radius));
        debug!(radius, created, total = self.index.all().len(), "built radial grid");
        created
    }

    /// Add a tile at each listed coordinate. Tiles already on the map are
    /// kept. Returns the number of tiles created.
    pub fn build_from_list(&mut self, cubes: &[Cube]) -> usize {
        let created = self.insert(cubes);
        debug!(requested = cubes.len(), created, "built grid from list");
        created
    }

    fn insert(&mut self, cubes: &[Cube]) -> usize {
        cubes.iter().filter(|&&c| self.index.spawn(c)).count()
    }

    /// Remove the tile at `cube` from every container.
    pub fn remove(&mut self, cube: Cube) -> bool {
        trace!(%cube, "remove tile");
        self.index.discard(cube)
    }

    /// Remove every listed tile from every container. Returns the number of
    /// tiles removed.
    pub fn remove_many(&mut self, cubes: &[Cube]) -> usize {
        let removed = self.index.discard_many(cubes);
        debug!(requested = cubes.len(), removed, "removed tiles");
        removed
    }

    /// Copy the tiles at `cubes` from `"all"` into the container `label`,
    /// creating it if needed. Coordinates not on the map are skipped.
    /// Returns the number of tiles newly added to `label`.
    pub fn copy_to(&mut self, label: &str, cubes: &[Cube]) -> usize {
        let entities = self.index.all().get_many(cubes);
        self.index.get_or_create(label).add_many(entities)
    }

    /// Remove every tile that cannot be reached from `origin` within
    /// `max_steps` moves. Returns the number of tiles removed.
    ///
    /// Fails without touching the map when `origin` is not on it.
    pub fn prune_to_reachable(&mut self, origin: Cube, max_steps: u32) -> Result<usize, GridError> {
        if !self.index.all().contains(origin) {
            warn!(%origin, "prune origin is not on the map");
            return Err(GridError::OriginNotPresent { origin });
        }
        let reachable = flood_fill(self.index.all(), origin, max_steps);
        let unreachable = sets::difference(&self.index.all().all_coords(), &reachable);
        let removed = self.index.discard_many(&unreachable);
        debug!(
            %origin,
            max_steps,
            kept = reachable.len(),
            removed,
            "pruned to reachable"
        );
        Ok(removed)
    }

    /// Shortest path across the whole map.
    pub fn find_path(&self, origin: Cube, target: Cube) -> Result<Vec<Cube>, GridError> {
        Ok(self.finder.find(self.index.all(), origin, target)?)
    }

    /// Shortest path through the container `label` only. An unknown label
    /// behaves as an empty container.
    pub fn find_path_in(
        &self,
        label: &str,
        origin: Cube,
        target: Cube,
    ) -> Result<Vec<Cube>, GridError> {
        let empty;
        let container = match self.index.container(label) {
            Some(c) => c,
            None => {
                empty = Container::new();
                &empty
            }
        };
        Ok(self.finder.find(container, origin, target)?)
    }

    /// Hand every tile to `presenter`, storing each returned handle on the
    /// tile. Returns the number of handles stored.
    ///
    /// Handles go into each entity's payload slot, so the map itself is only
    /// read.
    pub fn present(&self, presenter: &mut dyn TilePresenter) -> usize {
        let mut attached = 0;
        for (cube, entity) in self.index.all().iter() {
            if let Some(handle) = presenter.present(cube, entity.position()) {
                entity.set_payload(handle);
                attached += 1;
            }
        }
        debug!(tiles = self.index.all().len(), attached, "presented grid");
        attached
    }

    /// Remove every tile and every container.
    pub fn clear(&mut self) {
        debug!(tiles = self.index.all().len(), "clearing grid");
        self.index.clear();
    }
}
