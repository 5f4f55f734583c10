//! Position handles into a vector's buffer.
//!
//! A [`Position`] is the index of a slot plus the buffer generation it was
//! created under. Every reallocation advances the owning vector's
//! generation, so a handle from before a reallocation can be detected as
//! stale in O(1) without tracking outstanding handles.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Iterator-like handle to a slot in a `SimpleVector`.
///
/// Obtained from `begin()`, `end()`, `insert()` and `erase()`. Arithmetic
/// moves the index and keeps the generation. A handle is only meaningful
/// for the vector that produced it and only until that vector's next
/// reallocation.
///
/// Arithmetic wraps instead of panicking: a handle moved before `begin()`
/// is still a value, and `insert`/`erase` reject it as out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct Position {
    /// Buffer generation when this handle was created.
    pub(crate) generation: u64,
    /// Slot index within the buffer.
    pub(crate) index: usize,
}

impl Position {
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        Self { generation, index }
    }

    /// Slot index this handle points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Buffer generation this handle belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of slots from `origin` to `self`, or `None` if `origin` lies
    /// after `self` or belongs to another generation.
    pub fn distance_from(&self, origin: Position) -> Option<usize> {
        if origin.generation != self.generation {
            return None;
        }
        self.index.checked_sub(origin.index)
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Position {
        Position::new(self.index.wrapping_add(rhs), self.generation)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, rhs: usize) {
        self.index = self.index.wrapping_add(rhs);
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Position {
        Position::new(self.index.wrapping_sub(rhs), self.generation)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, rhs: usize) {
        self.index = self.index.wrapping_sub(rhs);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(idx={}, gen={})", self.index, self.generation)
    }
}
