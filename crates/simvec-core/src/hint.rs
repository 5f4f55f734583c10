//! Capacity hints for pre-reserving construction.
//!
//! A [`CapacityHint`] tags a constructor argument as "reserve at least
//! this many slots" rather than "create this many elements". It carries
//! no other behavior.

/// Immutable request to pre-reserve a container's capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    /// Wrap a requested capacity.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Build a [`CapacityHint`] for `capacity` slots.
///
/// ```
/// use simvec_core::reserve;
///
/// let hint = reserve(16);
/// assert_eq!(hint.capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_wraps_capacity() {
        assert_eq!(reserve(7), CapacityHint::new(7));
        assert_eq!(reserve(0).capacity(), 0);
    }
}
