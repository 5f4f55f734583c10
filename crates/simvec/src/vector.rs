//! The sequence container.
//!
//! [`SimpleVector`] wraps an [`OwnedBuffer`] plus a logical length. The
//! buffer length is the capacity; slots past the logical length hold
//! default or stale values that are never reachable through the public
//! API. All growth goes through one reallocation path that moves the live
//! elements into a fresh buffer, swaps it in, and advances the buffer
//! generation.

use std::fmt;
use std::ops::{Index, IndexMut};

use simvec_buffer::OwnedBuffer;
use simvec_core::{CapacityHint, GrowthPolicy, VectorError};
use tracing::{debug, trace};

use crate::position::Position;

/// A contiguous, growable sequence of `T`.
///
/// # Invariants
///
/// - `len() <= capacity()` in every observable state.
/// - Slots `[0, len())` hold the sequence; slots `[len(), capacity())` are
///   constructed but logically unused.
/// - `generation()` advances on every capacity change; [`Position`]
///   handles from an older generation are rejected as stale.
/// - A new or moved-from vector has `len() == capacity() == 0`.
pub struct SimpleVector<T> {
    /// Backing slots. Its length is the capacity.
    buffer: OwnedBuffer<T>,
    /// Number of logically valid elements.
    size: usize,
    /// Reallocation counter stamped into every issued [`Position`].
    generation: u64,
    policy: GrowthPolicy,
}

impl<T> SimpleVector<T> {
    /// Create an empty vector. Does not allocate.
    pub fn new() -> Self {
        Self {
            buffer: OwnedBuffer::empty(),
            size: 0,
            generation: 0,
            policy: GrowthPolicy::new(),
        }
    }

    /// Create an empty vector that grows according to `policy`.
    ///
    /// Returns `Err(VectorError::InvalidPolicy)` if the policy fails
    /// [`GrowthPolicy::validate`].
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, VectorError> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::new()
        })
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current buffer generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The growth policy this vector was built with.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.size]
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Handle to the first slot.
    pub fn begin(&self) -> Position {
        Position::new(0, self.generation)
    }

    /// Handle one past the last live element.
    pub fn end(&self) -> Position {
        Position::new(self.size, self.generation)
    }

    /// Checked access.
    ///
    /// Returns `Err(VectorError::OutOfRange)` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        if index >= self.size {
            return Err(VectorError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(&self.buffer[index])
    }

    /// Checked mutable access.
    ///
    /// Returns `Err(VectorError::OutOfRange)` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        if index >= self.size {
            return Err(VectorError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(&mut self.buffer[index])
    }

    /// Drop the last element from the sequence. No-op when empty.
    ///
    /// Never reallocates. The removed value stays in its slot until it is
    /// overwritten or the buffer is released.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Remove the element at `pos`, shifting later elements left by one.
    ///
    /// Returns a handle to the element that followed the removed one (or
    /// `end()` if the last element was removed). Never reallocates.
    ///
    /// Returns `Err(VectorError::StalePosition)` for a handle from before the
    /// last reallocation and `Err(VectorError::OutOfRange)` unless
    /// `begin() <= pos < end()`.
    pub fn erase(&mut self, pos: Position) -> Result<Position, VectorError> {
        self.check_fresh(pos)?;
        let index = pos.index;
        if index >= self.size {
            return Err(VectorError::OutOfRange {
                index,
                len: self.size,
            });
        }
        // Low-to-high shift: the erased value ends up in the vacated tail slot.
        self.buffer.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(Position::new(index, self.generation))
    }

    /// Reset the length to zero. Capacity and buffer are untouched.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchange contents, capacity, generation and policy with `other`.
    ///
    /// Constant time; never reallocates.
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.generation, &mut other.generation);
        std::mem::swap(&mut self.policy, &mut other.policy);
    }

    /// Move the contents out, leaving `self` empty with zero capacity.
    ///
    /// The returned vector carries the old buffer and generation, so earlier
    /// handles follow it. `self` keeps its policy and moves to the next
    /// generation, so those handles are stale against it.
    pub fn take(&mut self) -> Self {
        let mut emptied = Self {
            generation: self.generation.wrapping_add(1),
            policy: self.policy,
            ..Self::new()
        };
        std::mem::swap(self, &mut emptied);
        emptied
    }

    pub(crate) fn into_parts(self) -> (OwnedBuffer<T>, usize) {
        (self.buffer, self.size)
    }

    fn check_fresh(&self, pos: Position) -> Result<(), VectorError> {
        if pos.generation != self.generation {
            return Err(VectorError::StalePosition {
                handle_generation: pos.generation,
                current_generation: self.generation,
            });
        }
        Ok(())
    }

    /// Move the live elements into `replacement` and adopt it as the buffer.
    fn install(&mut self, mut replacement: OwnedBuffer<T>)
    where
        T: Default,
    {
        debug_assert!(replacement.len() >= self.size);
        for i in 0..self.size {
            replacement[i] = self.buffer.take(i);
        }
        let old_capacity = self.buffer.len();
        self.buffer.swap(&mut replacement);
        self.generation = self.generation.wrapping_add(1);
        trace!(
            old_capacity,
            new_capacity = self.buffer.len(),
            len = self.size,
            generation = self.generation,
            "reallocated vector buffer"
        );
    }
}

impl<T: Default> SimpleVector<T> {
    /// Create a vector of `len` default values with `capacity() == len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            buffer: OwnedBuffer::new(len),
            size: len,
            ..Self::new()
        }
    }

    /// Create an empty vector pre-reserved to at least `hint.capacity()`.
    pub fn with_hint(hint: CapacityHint) -> Self {
        let mut v = Self::new();
        v.reserve(hint.capacity());
        v
    }

    /// Append `value` at the end.
    ///
    /// Writes in place when there is spare capacity. A full vector first
    /// grows to `policy.grown_capacity(capacity)`: double, or one slot when
    /// the capacity is zero under the default policy.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.policy.grown_capacity(self.capacity()));
        }
        self.buffer[self.size] = value;
        self.size += 1;
    }

    /// Insert `value` before `pos`, shifting later elements right by one.
    ///
    /// `pos == end()` appends. A full vector grows first, by the same rule
    /// as [`push_back`](Self::push_back). Returns a handle to the inserted
    /// value, stamped with the generation in effect after any growth.
    ///
    /// Returns `Err(VectorError::StalePosition)` for a handle from before the
    /// last reallocation and `Err(VectorError::OutOfRange)` unless
    /// `begin() <= pos <= end()`.
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, VectorError> {
        self.check_fresh(pos)?;
        let index = pos.index;
        if index > self.size {
            return Err(VectorError::OutOfRange {
                index,
                len: self.size,
            });
        }
        if self.size == self.capacity() {
            self.reallocate(self.policy.grown_capacity(self.capacity()));
        }
        self.buffer[self.size] = value;
        // High-to-low shift: the new value travels from the tail slot to `index`.
        self.buffer.as_mut_slice()[index..=self.size].rotate_right(1);
        self.size += 1;
        Ok(Position::new(index, self.generation))
    }

    /// Ensure `capacity() >= new_capacity`, reallocating to exactly
    /// `new_capacity` if needed. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// Returns `Err(VectorError::AllocationFailed)` if the allocator refuses
    /// the new block; the vector is left unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let replacement = OwnedBuffer::try_new(new_capacity).inspect_err(|e| {
            debug!(
                requested = new_capacity,
                capacity = self.capacity(),
                error = %e,
                "vector reservation failed"
            );
        })?;
        self.install(replacement);
        Ok(())
    }

    /// Change the length to `new_len`.
    ///
    /// - Shrinking only truncates the logical length.
    /// - Growing within capacity default-initialises the revealed slots.
    /// - Growing to `new_len >= capacity()` reallocates to
    ///   `policy.resize_capacity(new_len)` slots (2x headroom by default).
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.size {
            self.size = new_len;
            return;
        }
        if new_len < self.capacity() {
            for slot in &mut self.buffer.as_mut_slice()[self.size..new_len] {
                *slot = T::default();
            }
        } else {
            // Fresh slots are already default-constructed.
            self.reallocate(self.policy.resize_capacity(new_len));
        }
        self.size = new_len;
    }

    fn reallocate(&mut self, new_capacity: usize) {
        self.install(OwnedBuffer::new(new_capacity));
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Create a vector of `len` copies of `value` with `capacity() == len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut buffer = OwnedBuffer::new(len);
        buffer.as_mut_slice().fill(value);
        Self {
            buffer,
            size: len,
            ..Self::new()
        }
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Copy the live elements into a new buffer.
    ///
    /// The copy's capacity equals the source's length unless the policy
    /// sets `clone_preserves_capacity`.
    fn clone(&self) -> Self {
        let capacity = if self.policy.clone_preserves_capacity {
            self.capacity()
        } else {
            self.size
        };
        let mut buffer = OwnedBuffer::new(capacity);
        buffer.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Self {
            buffer,
            size: self.size,
            generation: 0,
            policy: self.policy,
        }
    }

    /// Copy-and-swap assignment: build the full copy first, then exchange.
    fn clone_from(&mut self, source: &Self) {
        let mut replica = source.clone();
        replica.generation = self.generation.wrapping_add(1);
        self.swap(&mut replica);
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Adopt `values` in order, with `len() == capacity() == values.len()`.
    fn from(values: Vec<T>) -> Self {
        Self {
            size: values.len(),
            buffer: OwnedBuffer::from(values),
            ..Self::new()
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Default> From<CapacityHint> for SimpleVector<T> {
    fn from(hint: CapacityHint) -> Self {
        Self::with_hint(hint)
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked access: indexing at or past `len()` is a contract violation.
    ///
    /// # Panics
    ///
    /// Debug builds assert `index < len()`. Release builds only panic once
    /// `index` passes the capacity.
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {index} out of bounds for length {}",
            self.size
        );
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {index} out of bounds for length {}",
            self.size
        );
        &mut self.buffer[index]
    }
}

impl<T> Index<Position> for SimpleVector<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        debug_assert_eq!(pos.generation, self.generation, "stale position {pos}");
        &self[pos.index]
    }
}

impl<T> IndexMut<Position> for SimpleVector<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        debug_assert_eq!(pos.generation, self.generation, "stale position {pos}");
        &mut self[pos.index]
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
