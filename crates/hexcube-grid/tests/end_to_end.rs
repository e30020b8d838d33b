use hexcube_core::{math, Cube};
use hexcube_grid::{GridBuilder, GridConfig, GridError, NullPresenter};
use hexcube_path::PathError;
use hexcube_test_utils::fixtures::{holey_grid, radial_grid, walled_grid};
use hexcube_test_utils::{assert_walk, EvenRingPresenter, RecordingPresenter};
use proptest::prelude::*;

#[test]
fn radial_map_routes_around_a_removed_tile() {
    let mut grid = GridBuilder::new(GridConfig::default()).unwrap();
    assert_eq!(grid.build_radial(2), 19);
    assert_eq!(grid.all().len(), 3 * 2 * 2 + 3 * 2 + 1);

    let blocked = Cube::new(1, -1, 0).unwrap();
    let target = Cube::new(2, -2, 0).unwrap();
    assert!(grid.remove(blocked));

    let path = grid.find_path(Cube::ORIGIN, target).unwrap();
    let steps = path.len() - 1;
    assert_eq!(steps as u32, math::distance(Cube::ORIGIN, target) + 1);
    assert!(!path.contains(&blocked));
    assert_walk(grid.all(), &path, Cube::ORIGIN, target);
}

#[test]
fn pruning_behind_a_wall_drops_the_outside() {
    // Ring 2 removed entirely: ring 3 and beyond are cut off.
    let mut grid = walled_grid(4, 2, &[]);
    assert_eq!(grid.all().len(), 61 - 12);
    let removed = grid.prune_to_reachable(Cube::ORIGIN, 100).unwrap();
    assert_eq!(removed, 18 + 24);
    assert_eq!(grid.all().len(), 7);
    assert!(matches!(
        grid.find_path(Cube::ORIGIN, Cube::from_axial(3, 0)),
        Err(GridError::Path(PathError::PathNotFound { .. }))
    ));
}

#[test]
fn a_gap_in_the_wall_keeps_the_outside() {
    let mut grid = walled_grid(4, 2, &[3]);
    let before = grid.all().len();
    assert_eq!(grid.prune_to_reachable(Cube::ORIGIN, 100), Ok(0));
    assert_eq!(grid.all().len(), before);

    let gap = math::ring(Cube::ORIGIN, 2)[3];
    let target = Cube::ORIGIN - (gap - Cube::ORIGIN) * 2;
    let path = grid.find_path(Cube::ORIGIN, target).unwrap();
    assert!(path.contains(&gap));
    assert_walk(grid.all(), &path, Cube::ORIGIN, target);
}

#[test]
fn pruned_tiles_leave_every_view() {
    let mut grid = radial_grid(3);
    let outer = math::ring(Cube::ORIGIN, 3);
    grid.copy_to("outer", &outer);
    grid.prune_to_reachable(Cube::ORIGIN, 2).unwrap();
    assert!(grid.index().container("outer").unwrap().is_empty());
}

#[test]
fn presented_handles_are_shared_by_every_view() {
    let mut grid = radial_grid(2);
    grid.copy_to("inner", &math::hexagon(Cube::ORIGIN, 1));

    let mut presenter = RecordingPresenter::new(1000);
    assert_eq!(grid.present(&mut presenter), 19);
    assert_eq!(presenter.calls.len(), 19);

    let inner = grid.index().container("inner").unwrap();
    for (cube, entity) in inner.iter() {
        assert_eq!(entity.payload(), presenter.handle_for(cube));
    }
    for (cube, position, _) in &presenter.calls {
        assert_eq!(*position, grid.layout().cube_to_world(*cube));
    }
}

#[test]
fn presenters_may_skip_tiles() {
    let grid = radial_grid(2);
    assert_eq!(grid.present(&mut NullPresenter), 0);
    let mut presenter = EvenRingPresenter::default();
    assert_eq!(grid.present(&mut presenter), 1 + 12);
    assert_eq!(presenter.skipped, 6);
    assert_eq!(grid.all().get(Cube::from_axial(1, 0)).unwrap().payload(), None);
}

#[test]
fn holey_map_paths_are_walks() {
    let grid = holey_grid(8, 42, 200);
    let mut found = 0;
    for target in math::ring(Cube::ORIGIN, 8) {
        if !grid.all().contains(target) {
            continue;
        }
        match grid.find_path(Cube::ORIGIN, target) {
            Ok(path) => {
                assert_walk(grid.all(), &path, Cube::ORIGIN, target);
                found += 1;
            }
            Err(GridError::Path(PathError::PathNotFound { .. })) => {}
            Err(e) => panic!("unexpected error {e}"),
        }
    }
    assert!(found > 0);
}

proptest! {
    #[test]
    fn prune_keeps_exactly_the_flood(seed in 0u64..500, steps in 0u32..10) {
        let mut grid = holey_grid(6, seed, 300);
        let before = grid.all().all_coords();
        let reachable = hexcube_path::flood_fill(grid.all(), Cube::ORIGIN, steps);
        let removed = grid.prune_to_reachable(Cube::ORIGIN, steps).unwrap();
        prop_assert_eq!(removed, before.len() - reachable.len());
        for c in &reachable {
            prop_assert!(grid.all().contains(*c));
        }
        prop_assert_eq!(grid.all().len(), reachable.len());
    }
}
