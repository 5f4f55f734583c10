//! The owned buffer collaborator.

use std::fmt;
use std::ops::{Index, IndexMut};

use simvec_core::BufferError;

/// A fixed-length, exclusively owned block of element slots.
///
/// Every slot holds a constructed value at all times; slots the container
/// considers logically unused simply hold `T::default()` or a stale value.
/// The block is released when the buffer is dropped. `OwnedBuffer` is
/// move-only and does not implement `Clone`.
pub struct OwnedBuffer<T> {
    /// Backing storage. Its length is fixed at construction.
    slots: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Create a zero-length buffer. Does not allocate.
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of slots in the block.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the block has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared view of every slot.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of every slot.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange ownership of the blocks held by `self` and `other`.
    ///
    /// Constant time; never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Release the block as a `Vec<T>` holding every slot.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocate `len` default-constructed slots.
    ///
    /// # Panics
    ///
    /// Allocation failure is handled the way the global allocator handles
    /// it for `Vec` (abort or panic). Use [`OwnedBuffer::try_new`] for a
    /// recoverable error.
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, T::default);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Allocate `len` default-constructed slots, reporting failure.
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if the byte size
    /// overflows or the allocator refuses the block.
    pub fn try_new(len: usize) -> Result<Self, BufferError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: len })?;
        slots.resize_with(len, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Move the value out of slot `index`, leaving `T::default()` behind.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn take(&mut self, index: usize) -> T {
        std::mem::take(&mut self.slots[index])
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    /// Adopt `values` as the block, one slot per value.
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_boxed_slice(),
        }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("len", &self.slots.len())
            .finish()
    }
}
