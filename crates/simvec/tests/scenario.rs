//! End-to-end walkthroughs of the container contract.

use simvec::prelude::*;
use simvec_test_utils::{full, grown};

#[test]
fn append_insert_erase_walkthrough() {
    let mut v = SimpleVector::new();
    assert_eq!((v.len(), v.capacity()), (0, 0));

    v.push_back(1);
    assert_eq!((v.len(), v.capacity()), (1, 1));
    v.push_back(2);
    assert_eq!((v.len(), v.capacity()), (2, 2));
    v.push_back(3);
    assert_eq!((v.len(), v.capacity()), (3, 4));

    let inserted = v.insert(v.begin() + 1, 9).unwrap();
    assert_eq!(v[inserted], 9);
    assert_eq!(v, [1, 9, 2, 3]);
    assert_eq!(v.len(), 4);

    let next = v.erase(v.begin() + 2).unwrap();
    assert_eq!(v[next], 3);
    assert_eq!(v, [1, 9, 3]);
    assert_eq!(v.len(), 3);

    assert_eq!(
        v.at(5),
        Err(VectorError::OutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn clear_then_refill_up_to_capacity_does_not_reallocate() {
    let mut v = grown(5);
    let capacity = v.capacity();
    let generation = v.generation();
    v.clear();
    assert_eq!(v.capacity(), capacity);
    for i in 0..capacity as i32 {
        v.push_back(i);
    }
    assert_eq!(v.generation(), generation);
    assert_eq!(v.len(), capacity);
    v.push_back(-1);
    assert_ne!(v.generation(), generation);
}

#[test]
fn insert_into_full_vector_returns_handle_in_new_buffer() {
    let mut v = full(4);
    let old_begin = v.begin();
    let pos = v.insert(v.begin() + 2, 100).unwrap();
    assert_eq!(v.capacity(), 8);
    assert_ne!(pos.generation(), old_begin.generation());
    assert_eq!(v[pos], 100);
    assert_eq!(v, [0, 1, 100, 2, 3]);
    assert!(matches!(
        v.insert(old_begin, 5),
        Err(VectorError::StalePosition { .. })
    ));
}

#[test]
fn erase_then_insert_with_returned_handles() {
    let mut v = full(5);
    let mut pos = v.begin() + 1;
    // Drop every odd element by walking the returned handles.
    while pos.index() < v.len() {
        pos = v.erase(pos).unwrap();
        pos += 1;
    }
    assert_eq!(v, [0, 2, 4]);
    let pos = v.insert(v.end(), 6).unwrap();
    assert_eq!(pos.index(), 3);
    assert_eq!(v, [0, 2, 4, 6]);
}

#[test]
fn reserve_then_resize_paths() {
    let mut v: SimpleVector<u16> = SimpleVector::from(reserve(10));
    assert!(v.is_empty());
    v.resize(4);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v, [0, 0, 0, 0]);
    v.resize(10);
    assert_eq!(v.capacity(), 20);
    assert_eq!(v.len(), 10);
    v.resize(0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 20);
}

#[test]
fn exact_resize_policy() {
    let policy = GrowthPolicy {
        resize_headroom: 1,
        ..GrowthPolicy::default()
    };
    let mut v: SimpleVector<i8> = SimpleVector::with_policy(policy).unwrap();
    v.resize(7);
    assert_eq!(v.capacity(), 7);
    assert_eq!(v.policy().resize_headroom, 1);
}

#[test]
fn copy_assignment_is_copy_then_swap() {
    let source = simple_vector![1, 2, 3];
    let mut target = grown(20);
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 3);
}

#[test]
fn string_elements_move_through_growth() {
    let mut v = SimpleVector::new();
    for word in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        v.push_back(word.to_string());
    }
    v.insert(v.begin(), "zero".to_string()).unwrap();
    v.erase(v.begin() + 3).unwrap();
    let joined: Vec<String> = v.into_iter().collect();
    assert_eq!(joined, ["zero", "alpha", "beta", "delta", "epsilon"]);
}
