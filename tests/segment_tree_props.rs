use proptest::prelude::*;
use segtree::groups::{Concat, FloatMin, Monoid, Sum};
use segtree::{Error, SegmentTree};

/// Folds `values[start..stop]`, with everything past the end contributing the identity.
fn naive<M: Monoid>(m: &M, values: &[M::Elem], start: usize, stop: usize) -> M::Elem {
    values
        .iter()
        .take(stop)
        .skip(start)
        .cloned()
        .fold(m.id(), |acc, x| m.op(acc, x))
}

proptest! {
    #[test]
    fn build_keeps_values_and_pads(values in proptest::collection::vec(-1000i64..1000, 0..70)) {
        let tree = SegmentTree::new(Sum::new(), values.clone()).expect("tree builds");
        let n = tree.capacity();

        prop_assert!(n.is_power_of_two() && n > values.len());
        for i in 0..n {
            let expected = values.get(i).cloned().unwrap_or(0);
            prop_assert_eq!(*tree.get(i).expect("in range"), expected);
        }
        prop_assert_eq!(*tree.root(), values.iter().sum::<i64>());
    }

    #[test]
    fn sum_matches_slice(
        values in proptest::collection::vec(-1000i64..1000, 0..70),
        start in 0usize..150,
        len in 0usize..150,
    ) {
        let tree = SegmentTree::new(Sum::new(), values.clone()).expect("tree builds");
        let stop = start + len;
        prop_assert_eq!(tree.query(start, stop).expect("valid range"), naive(tree.monoid(), &values, start, stop));
    }

    #[test]
    fn open_ended_fold_matches_suffix(
        values in proptest::collection::vec(-1000i64..1000, 0..70),
        start in 0usize..150,
    ) {
        let tree = SegmentTree::new(Sum::new(), values.clone()).expect("tree builds");
        prop_assert_eq!(
            tree.fold(start..).expect("open range is valid"),
            naive(tree.monoid(), &values, start, usize::MAX)
        );
        prop_assert_eq!(
            tree.fold(..start).expect("open range is valid"),
            naive(tree.monoid(), &values, 0, start)
        );
    }

    #[test]
    fn min_matches_slice(
        values in proptest::collection::vec(-1e6f64..1e6, 1..40),
        start in 0usize..80,
        len in 0usize..80,
    ) {
        let tree = SegmentTree::new(FloatMin::new(), values.clone()).expect("tree builds");
        let stop = start + len;
        let expected = values
            .iter()
            .take(stop)
            .skip(start)
            .cloned()
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!(tree.query(start, stop).expect("valid range"), expected);
    }

    #[test]
    fn concat_keeps_left_to_right_order(
        values in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..3), 0..33),
        start in 0usize..70,
        len in 0usize..70,
    ) {
        let tree = SegmentTree::new(Concat::new(), values.clone()).expect("tree builds");
        let stop = start + len;
        let expected: Vec<u8> = values.iter().take(stop).skip(start).flatten().cloned().collect();
        prop_assert_eq!(tree.query(start, stop).expect("valid range"), expected);
    }

    #[test]
    fn set_is_visible_only_to_covering_ranges(
        values in proptest::collection::vec(-100i64..100, 1..50),
        index in any::<proptest::sample::Index>(),
        value in -100i64..100,
        start in 0usize..64,
        len in 0usize..64,
    ) {
        let mut tree = SegmentTree::new(Sum::new(), values.clone()).expect("tree builds");
        let i = index.index(tree.capacity());
        let stop = start + len;
        let before = tree.query(start, stop).expect("valid range");

        let old = tree.set(i, value).expect("in range");
        prop_assert_eq!(old, values.get(i).cloned().unwrap_or(0));
        prop_assert_eq!(*tree.get(i).expect("in range"), value);

        let after = tree.query(start, stop).expect("valid range");
        if start <= i && i < stop.min(tree.capacity()) {
            prop_assert_eq!(after, before - old + value);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn reversed_ranges_are_rejected(
        values in proptest::collection::vec(0i64..10, 0..20),
        stop in 0usize..40,
        gap in 1usize..40,
    ) {
        let tree = SegmentTree::new(Sum::new(), values).expect("tree builds");
        let start = stop + gap;
        prop_assert_eq!(tree.query(start, stop), Err(Error::InvalidRange { start, stop }));
    }

    #[test]
    fn point_access_past_capacity_fails(
        values in proptest::collection::vec(0i64..10, 0..20),
        extra in 0usize..100,
    ) {
        let mut tree = SegmentTree::new(Sum::new(), values).expect("tree builds");
        let capacity = tree.capacity();
        let index = capacity + extra;
        let err = Error::IndexOutOfRange { index, capacity };
        prop_assert_eq!(tree.get(index), Err(err));
        prop_assert_eq!(tree.set(index, 1), Err(err));
    }
}
