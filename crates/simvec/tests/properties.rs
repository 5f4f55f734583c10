//! Property tests for the container's observable contract.

use proptest::prelude::*;
use simvec::prelude::*;

fn arb_vector() -> impl Strategy<Value = SimpleVector<i32>> {
    (
        proptest::collection::vec(any::<i32>(), 0..48),
        0usize..32,
    )
        .prop_map(|(values, extra)| {
            let mut v = SimpleVector::new();
            v.reserve(extra);
            v.extend(values);
            v
        })
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(
        values in proptest::collection::vec(any::<u8>(), 0..128),
        pops in 0usize..32,
    ) {
        let mut v = SimpleVector::new();
        for x in values {
            v.push_back(x);
            prop_assert!(v.len() <= v.capacity());
        }
        for _ in 0..pops {
            v.pop_back();
            prop_assert!(v.len() <= v.capacity());
        }
    }

    #[test]
    fn append_growth(len in 0usize..200) {
        let mut v: SimpleVector<u8> = SimpleVector::new();
        for _ in 0..len {
            let before = v.capacity();
            let full = v.len() == before;
            v.push_back(0);
            let expected = match (full, before) {
                (false, c) => c,
                (true, 0) => 1,
                (true, c) => c * 2,
            };
            prop_assert_eq!(v.capacity(), expected);
        }
    }

    #[test]
    fn insert_places_value_and_shifts_right(v in arb_vector(), index in 0usize..64, value: i32) {
        let mut v = v;
        let before: Vec<i32> = v.iter().copied().collect();
        let index = index % (before.len() + 1);
        let pos = v.insert(v.begin() + index, value).unwrap();
        prop_assert_eq!(pos.index(), index);
        prop_assert_eq!(&v.as_slice()[..index], &before[..index]);
        prop_assert_eq!(v[index], value);
        prop_assert_eq!(&v.as_slice()[index + 1..], &before[index..]);
    }

    #[test]
    fn erase_removes_and_shifts_left(v in arb_vector(), index in 0usize..64) {
        prop_assume!(!v.is_empty());
        let mut v = v;
        let before: Vec<i32> = v.iter().copied().collect();
        let index = index % before.len();
        let capacity = v.capacity();
        v.erase(v.begin() + index).unwrap();
        let mut expected = before.clone();
        expected.remove(index);
        prop_assert_eq!(v.as_slice(), expected.as_slice());
        prop_assert_eq!(v.capacity(), capacity);
    }

    #[test]
    fn copy_round_trips_and_is_independent(v in arb_vector()) {
        let mut copy = v.clone();
        prop_assert_eq!(&copy, &v);
        prop_assert_eq!(copy.capacity(), v.len());
        copy.push_back(1);
        prop_assert_ne!(copy.len(), v.len());
    }

    #[test]
    fn take_empties_source(v in arb_vector()) {
        let mut source = v.clone();
        let moved = source.take();
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(moved, v);
    }

    #[test]
    fn checked_access(v in arb_vector(), index in 0usize..96) {
        if index < v.len() {
            prop_assert_eq!(v.at(index), Ok(&v.as_slice()[index]));
        } else {
            prop_assert!(
                matches!(v.at(index), Err(VectorError::OutOfRange { .. })),
                "expected out-of-range error"
            );
        }
    }

    #[test]
    fn ordering_matches_slices(a in arb_vector(), b in arb_vector()) {
        prop_assert_eq!(a == b, a.as_slice() == b.as_slice());
        prop_assert_eq!(a.cmp(&b), a.as_slice().cmp(b.as_slice()));
        prop_assert_eq!(a < b, b > a);
        prop_assert_eq!(a <= b, !(b < a));
        prop_assert_eq!(a >= b, !(a < b));
    }

    #[test]
    fn equality_is_an_equivalence(a in arb_vector()) {
        let b = a.clone();
        let c = b.clone();
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a == &b, &b == &a);
        prop_assert!(a == b && b == c && a == c);
    }
}
