//! Growth policy configuration.

use crate::error::PolicyError;

/// Configuration for how a `SimpleVector` grows its backing buffer.
///
/// The defaults reproduce the classic doubling contract: a full vector
/// doubles, an empty one grows to a single slot, a reallocating `resize`
/// leaves 2x headroom, and clones are sized to the source's length.
/// Validated by [`GrowthPolicy::validate`]; a policy attached to a vector
/// is immutable for the vector's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the capacity when append or insert find the
    /// vector full.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// Capacity used when growing a vector whose capacity is zero.
    ///
    /// Default: 1. Must be non-zero.
    pub min_capacity: usize,

    /// Multiplier applied to the requested length when `resize` has to
    /// reallocate.
    ///
    /// Default: 2. Must be non-zero; 1 sizes the buffer exactly.
    pub resize_headroom: usize,

    /// Whether cloning keeps the source's capacity.
    ///
    /// Default: `false`, a clone's capacity equals the source's length.
    pub clone_preserves_capacity: bool,
}

impl GrowthPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default capacity when growing from zero.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Default headroom multiplier for a reallocating `resize`.
    pub const DEFAULT_RESIZE_HEADROOM: usize = 2;

    /// Create the default policy.
    pub const fn new() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            resize_headroom: Self::DEFAULT_RESIZE_HEADROOM,
            clone_preserves_capacity: false,
        }
    }

    /// Check every field against its documented bound.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.growth_factor < 2 {
            return Err(PolicyError::GrowthFactorTooSmall {
                factor: self.growth_factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(PolicyError::ZeroMinimumCapacity);
        }
        if self.resize_headroom == 0 {
            return Err(PolicyError::ZeroResizeHeadroom);
        }
        Ok(())
    }

    /// Capacity to grow to when a vector of capacity `current` is full.
    ///
    /// Saturates instead of overflowing; the allocator rejects the
    /// saturated request.
    pub fn grown_capacity(&self, current: usize) -> usize {
        if current == 0 {
            self.min_capacity
        } else {
            current.saturating_mul(self.growth_factor)
        }
    }

    /// Capacity to allocate when `resize(new_len)` has to reallocate.
    pub fn resize_capacity(&self, new_len: usize) -> usize {
        new_len.saturating_mul(self.resize_headroom)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert_eq!(GrowthPolicy::default().validate(), Ok(()));
    }

    #[test]
    fn zero_becomes_one_then_doubles() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.grown_capacity(0), 1);
        assert_eq!(policy.grown_capacity(1), 2);
        assert_eq!(policy.grown_capacity(2), 4);
        assert_eq!(policy.grown_capacity(48), 96);
    }

    #[test]
    fn resize_headroom_doubles_request() {
        assert_eq!(GrowthPolicy::new().resize_capacity(5), 10);
    }

    #[test]
    fn growth_saturates() {
        assert_eq!(GrowthPolicy::new().grown_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn rejects_factor_of_one() {
        let policy = GrowthPolicy {
            growth_factor: 1,
            ..GrowthPolicy::new()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::GrowthFactorTooSmall { factor: 1 })
        );
    }

    #[test]
    fn rejects_zero_min_capacity() {
        let policy = GrowthPolicy {
            min_capacity: 0,
            ..GrowthPolicy::new()
        };
        assert_eq!(policy.validate(), Err(PolicyError::ZeroMinimumCapacity));
    }

    #[test]
    fn rejects_zero_headroom() {
        let policy = GrowthPolicy {
            resize_headroom: 0,
            ..GrowthPolicy::new()
        };
        assert_eq!(policy.validate(), Err(PolicyError::ZeroResizeHeadroom));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_policy_always_grows(
                factor in 2usize..8,
                min in 1usize..16,
                current in 0usize..1_000_000,
            ) {
                let policy = GrowthPolicy {
                    growth_factor: factor,
                    min_capacity: min,
                    ..GrowthPolicy::new()
                };
                prop_assert!(policy.validate().is_ok());
                prop_assert!(policy.grown_capacity(current) > current);
            }
        }
    }
}
