//! Error types for the simvec containers.
//!
//! Organized by layer: the owned buffer (allocation), the growth policy
//! (configuration validation), and the sequence container (bounds and
//! handle checks). Unchecked indexing past the logical length is a caller
//! contract violation and has no variant here.

use std::error::Error;
use std::fmt;

/// Errors from the owned buffer collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The heap allocator refused the requested block, or the requested
    /// byte size overflowed.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "buffer allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for BufferError {}

/// Validation failures for a [`GrowthPolicy`](crate::GrowthPolicy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// `growth_factor` must be at least 2, otherwise a full vector never grows.
    GrowthFactorTooSmall {
        /// The rejected factor.
        factor: usize,
    },
    /// `min_capacity` must be non-zero, otherwise growing from empty stalls.
    ZeroMinimumCapacity,
    /// `resize_headroom` must be non-zero.
    ZeroResizeHeadroom,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFactorTooSmall { factor } => {
                write!(f, "growth factor {factor} is below the minimum of 2")
            }
            Self::ZeroMinimumCapacity => write!(f, "minimum capacity must be non-zero"),
            Self::ZeroResizeHeadroom => write!(f, "resize headroom must be non-zero"),
        }
    }
}

impl Error for PolicyError {}

/// Errors from `SimpleVector` operations.
///
/// `OutOfRange` is the recoverable failure raised by checked access and
/// by insert/erase with a position outside the valid bounds. The other
/// variants come from the fallible extensions (`try_reserve`,
/// `with_policy`) and from stale position handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// An index or position lies outside the container's valid bounds.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length of the container at the time of the call.
        len: usize,
    },
    /// A position handle was created before the most recent reallocation.
    StalePosition {
        /// The generation encoded in the handle.
        handle_generation: u64,
        /// The container's current buffer generation.
        current_generation: u64,
    },
    /// Growing the backing buffer failed.
    AllocationFailed(BufferError),
    /// A custom growth policy failed validation.
    InvalidPolicy(PolicyError),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::StalePosition {
                handle_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale position: generation {handle_generation}, current {current_generation}"
                )
            }
            Self::AllocationFailed(e) => write!(f, "reallocation failed: {e}"),
            Self::InvalidPolicy(e) => write!(f, "invalid growth policy: {e}"),
        }
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed(e) => Some(e),
            Self::InvalidPolicy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for VectorError {
    fn from(e: BufferError) -> Self {
        Self::AllocationFailed(e)
    }
}

impl From<PolicyError> for VectorError {
    fn from(e: PolicyError) -> Self {
        Self::InvalidPolicy(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let e = VectorError::OutOfRange { index: 5, len: 3 };
        assert_eq!(e.to_string(), "index 5 out of range for length 3");
    }

    #[test]
    fn allocation_failure_chains_source() {
        let e: VectorError = BufferError::AllocationFailed { requested: 10 }.into();
        let source = e.source().unwrap();
        assert_eq!(
            source.to_string(),
            "buffer allocation failed: requested 10 slots"
        );
    }

    #[test]
    fn out_of_range_has_no_source() {
        let e = VectorError::OutOfRange { index: 0, len: 0 };
        assert!(e.source().is_none());
    }

    #[test]
    fn policy_error_converts() {
        let e: VectorError = PolicyError::ZeroMinimumCapacity.into();
        assert_eq!(e, VectorError::InvalidPolicy(PolicyError::ZeroMinimumCapacity));
        assert!(e.to_string().contains("minimum capacity"));
    }
}
