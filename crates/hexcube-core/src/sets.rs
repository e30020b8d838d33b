//! Set algebra over coordinate collections.
//!
//! Inputs are slices that may contain repeats; every result is
//! de-duplicated and keeps the first-seen order of its inputs.

use crate::cube::Cube;
use indexmap::IndexSet;

fn to_set(cubes: &[Cube]) -> IndexSet<Cube> {
    cubes.iter().copied().collect()
}

/// Union of `a` and `b`: `a`'s elements in order, then those only in `b`.
///
/// # Examples
///
/// ```
/// use hexcube_core::{sets, Cube};
///
/// let a = [Cube::from_axial(0, 0), Cube::from_axial(1, 0)];
/// let b = [Cube::from_axial(1, 0), Cube::from_axial(2, 0)];
/// assert_eq!(
///     sets::combine(&a, &b),
///     vec![Cube::from_axial(0, 0), Cube::from_axial(1, 0), Cube::from_axial(2, 0)],
/// );
/// ```
pub fn combine(a: &[Cube], b: &[Cube]) -> Vec<Cube> {
    let mut out = to_set(a);
    out.extend(b.iter().copied());
    out.into_iter().collect()
}

/// Elements of `a` that are not in `b`.
pub fn difference(a: &[Cube], b: &[Cube]) -> Vec<Cube> {
    let b = to_set(b);
    to_set(a).into_iter().filter(|c| !b.contains(c)).collect()
}

/// Elements of `a` that are also in `b`, in `a`'s order.
pub fn intersect(a: &[Cube], b: &[Cube]) -> Vec<Cube> {
    let b = to_set(b);
    to_set(a).into_iter().filter(|c| b.contains(c)).collect()
}

/// Elements in exactly one of `a` and `b`: `combine(a, b)` minus
/// `intersect(a, b)`.
pub fn symmetric_difference(a: &[Cube], b: &[Cube]) -> Vec<Cube> {
    difference(&combine(a, b), &intersect(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math;
    use proptest::prelude::*;

    fn arb_cubes() -> impl Strategy<Value = Vec<Cube>> {
        prop::collection::vec(
            (-4i32..=4, -4i32..=4).prop_map(|(q, r)| Cube::from_axial(q, r)),
            0..30,
        )
    }

    #[test]
    fn disk_minus_disk_is_annulus() {
        let outer = math::hexagon(Cube::ORIGIN, 3);
        let inner = math::hexagon(Cube::ORIGIN, 2);
        let annulus = difference(&outer, &inner);
        assert_eq!(annulus.len(), 18);
        for c in &annulus {
            assert_eq!(math::distance(Cube::ORIGIN, *c), 3);
        }
    }

    #[test]
    fn symmetric_difference_of_overlapping_disks() {
        let a = math::hexagon(Cube::ORIGIN, 1);
        let b = math::hexagon(Cube::from_axial(1, 0), 1);
        let x = symmetric_difference(&a, &b);
        // Two 7-cell disks whose centers are adjacent share 4 cells.
        assert_eq!(x.len(), 6);
        let shared = intersect(&a, &b);
        assert_eq!(shared.len(), 4);
        assert!(x.iter().all(|c| !shared.contains(c)));
    }

    #[test]
    fn symmetric_difference_of_disjoint_inputs_is_union() {
        let a = vec![Cube::from_axial(0, 0)];
        let b = vec![Cube::from_axial(5, 5)];
        assert_eq!(symmetric_difference(&a, &b), combine(&a, &b));
    }

    #[test]
    fn empty_inputs() {
        let a = math::ring(Cube::ORIGIN, 2);
        assert_eq!(combine(&[], &a), a);
        assert!(intersect(&[], &a).is_empty());
        assert_eq!(difference(&a, &[]), a);
        assert!(symmetric_difference(&[], &[]).is_empty());
    }

    proptest! {
        #[test]
        fn combine_is_duplicate_free_superset(a in arb_cubes(), b in arb_cubes()) {
            let u = combine(&a, &b);
            let set: IndexSet<Cube> = u.iter().copied().collect();
            prop_assert_eq!(set.len(), u.len());
            prop_assert!(a.iter().all(|c| set.contains(c)));
            prop_assert!(b.iter().all(|c| set.contains(c)));
        }

        #[test]
        fn combine_preserves_left_order(a in arb_cubes(), b in arb_cubes()) {
            let u = combine(&a, &b);
            let left: Vec<Cube> = to_set(&a).into_iter().collect();
            prop_assert_eq!(&u[..left.len()], left.as_slice());
        }

        #[test]
        fn self_identities(a in arb_cubes()) {
            prop_assert!(difference(&a, &a).is_empty());
            prop_assert!(symmetric_difference(&a, &a).is_empty());
            let dedup: Vec<Cube> = to_set(&a).into_iter().collect();
            prop_assert_eq!(intersect(&a, &a), dedup);
        }

        #[test]
        fn symmetric_difference_is_exclusive_membership(a in arb_cubes(), b in arb_cubes()) {
            let sa = to_set(&a);
            let sb = to_set(&b);
            let x: IndexSet<Cube> = symmetric_difference(&a, &b).into_iter().collect();
            for c in sa.iter().chain(sb.iter()) {
                prop_assert_eq!(x.contains(c), sa.contains(c) != sb.contains(c));
            }
        }
    }
}
