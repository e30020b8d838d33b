use hexcube_core::{math, sets, Cube, HexLayout};
use hexcube_index::{Container, PayloadHandle, SpatialIndex, ALL_LABEL};
use proptest::prelude::*;

fn radial(layout: HexLayout, radius: u32) -> SpatialIndex {
    let mut index = SpatialIndex::new(layout);
    for cube in math::hexagon(Cube::ORIGIN, radius) {
        index.spawn(cube);
    }
    index
}

#[test]
fn ring_view_tracks_discards_in_all() {
    let mut index = radial(HexLayout::default(), 3);
    let ring = index.all().retain_present(&math::ring(Cube::ORIGIN, 2));
    let entities = index.all().get_many(&ring);
    index.get_or_create("ring").add_many(entities);
    assert_eq!(index.container("ring").unwrap().len(), 12);

    index.discard_many(&ring[..4]);
    assert_eq!(index.container("ring").unwrap().len(), 8);
    assert_eq!(index.all().len(), 37 - 4);
}

#[test]
fn world_lookup_uses_the_index_layout() {
    let layout = HexLayout::new(0.5, 4.0).unwrap();
    let index = radial(layout, 2);
    for (cube, entity) in index.all().iter() {
        let hit = index.all().get_at_world(index.layout(), entity.position());
        assert_eq!(hit.map(|e| e.cube()), Some(cube));
    }
}

#[test]
fn payloads_survive_moving_between_views() {
    let mut index = radial(HexLayout::default(), 1);
    for (i, entity) in index.all().all().iter().enumerate() {
        entity.set_payload(PayloadHandle(i as u64));
    }
    let origin_handle = index.entity(Cube::ORIGIN).unwrap().payload();
    let picked = index.all().get_many(&[Cube::ORIGIN, Cube::from_axial(1, 0)]);
    index.get_or_create("selected").add_many(picked);
    index.all_mut().remove(Cube::ORIGIN);

    let selected = index.container("selected").unwrap();
    assert_eq!(selected.get(Cube::ORIGIN).unwrap().payload(), origin_handle);
    assert!(origin_handle.is_some());
    assert!(!index.all().contains(Cube::ORIGIN));
}

#[test]
fn unknown_label_is_absent_until_created() {
    let mut index = SpatialIndex::default();
    assert!(index.container("nope").is_none());
    assert!(index.container_mut("nope").is_none());
    assert!(index.get_or_create("nope").is_empty());
    assert_eq!(index.labels().collect::<Vec<_>>(), vec![ALL_LABEL, "nope"]);
}

proptest! {
    #[test]
    fn discard_many_matches_set_difference(
        radius in 0u32..5,
        picks in prop::collection::vec((-5i32..=5, -5i32..=5), 0..40),
    ) {
        let mut index = radial(HexLayout::default(), radius);
        let before = index.all().all_coords();
        let doomed: Vec<Cube> = picks.iter().map(|&(q, r)| Cube::from_axial(q, r)).collect();

        let removed = index.discard_many(&doomed);

        let expected = sets::difference(&before, &doomed);
        prop_assert_eq!(index.all().all_coords(), expected.clone());
        prop_assert_eq!(removed, before.len() - expected.len());
    }

    #[test]
    fn neighbors_are_present_and_adjacent(radius in 0u32..5, q in -5i32..=5, r in -5i32..=5) {
        let index = radial(HexLayout::default(), radius);
        let all: &Container = index.all();
        let cube = Cube::from_axial(q, r);
        for n in all.neighbors(cube) {
            prop_assert!(all.contains(n));
            prop_assert_eq!(math::distance(cube, n), 1);
        }
    }
}
