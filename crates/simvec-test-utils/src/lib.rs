//! Test utilities and fixtures for simvec development.
//!
//! Provides a [`Ledger`]-backed [`Tracked`] element type for observing
//! clones and drops, plus builders that put a [`SimpleVector`] into a
//! known length/capacity state through its public growth path.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Ledger, Tracked};

use simvec::SimpleVector;

/// Build `0..len` by repeated `push_back`, so capacity follows the
/// doubling rule (`len == 5` gives capacity 8).
pub fn grown(len: i32) -> SimpleVector<i32> {
    let mut v = SimpleVector::new();
    for i in 0..len {
        v.push_back(i);
    }
    v
}

/// Build `0..len` with `len() == capacity()`, so the next append or
/// insert must reallocate.
pub fn full(len: i32) -> SimpleVector<i32> {
    (0..len).collect()
}

/// Build a vector of `len` tracked elements with ids `0..len`, sized
/// exactly.
pub fn tracked(ledger: &std::sync::Arc<Ledger>, len: u32) -> SimpleVector<Tracked> {
    (0..len).map(|id| ledger.track(id)).collect()
}
