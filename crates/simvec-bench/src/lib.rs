//! Benchmark workloads for the simvec container.
//!
//! Provides deterministic inputs shared by the criterion benches and the
//! examples:
//!
//! - [`scattered_positions`]: pseudo-random insert/erase indices from a seed
//! - [`prefilled`]: a vector grown through `push_back` to a given length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use simvec::SimpleVector;

/// Element counts used by the benches.
pub const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Deterministic pseudo-random indices for a vector that starts at
/// `start_len` and grows by one per step.
///
/// Step `i` yields an index in `0..=start_len + i`, so every value is a
/// valid insertion point at the time it is used.
pub fn scattered_positions(start_len: usize, steps: usize, seed: u64) -> Vec<usize> {
    // SplitMix64.
    let mut state = seed;
    (0..steps)
        .map(|i| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^= z >> 31;
            (z % (start_len + i + 1) as u64) as usize
        })
        .collect()
}

/// A vector holding `0..len` built by repeated `push_back`.
pub fn prefilled(len: usize) -> SimpleVector<u64> {
    let mut v = SimpleVector::new();
    for i in 0..len as u64 {
        v.push_back(i);
    }
    v
}
