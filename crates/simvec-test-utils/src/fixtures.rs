//! Element fixtures that record their own lifecycle.
//!
//! A [`Tracked`] value created through a [`Ledger`] bumps the ledger's
//! counters when it is cloned or dropped. Default-constructed `Tracked`
//! values (the filler a buffer puts in unused slots) are untracked, so
//! counts reflect only the values a test created.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared clone/drop counters.
#[derive(Debug, Default)]
pub struct Ledger {
    clones: AtomicUsize,
    drops: AtomicUsize,
}

impl Ledger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a tracked element reporting to this ledger.
    pub fn track(self: &Arc<Self>, id: u32) -> Tracked {
        Tracked {
            id,
            ledger: Some(Arc::clone(self)),
        }
    }

    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// An element that reports clones and drops to its [`Ledger`].
///
/// Equality and ordering compare `id` only.
#[derive(Debug, Default)]
pub struct Tracked {
    pub id: u32,
    ledger: Option<Arc<Ledger>>,
}

impl Tracked {
    /// Whether this value reports to a ledger.
    pub fn is_tracked(&self) -> bool {
        self.ledger.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(ledger) = &self.ledger {
            ledger.clones.fetch_add(1, Ordering::SeqCst);
        }
        Self {
            id: self.id,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            ledger.drops.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_clone_and_drop() {
        let ledger = Ledger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.clones(), 1);
        drop(a);
        drop(b);
        assert_eq!(ledger.drops(), 2);
    }

    #[test]
    fn default_is_untracked() {
        let ledger = Ledger::new();
        let filler = Tracked::default();
        assert!(!filler.is_tracked());
        drop(filler);
        assert_eq!(ledger.drops(), 0);
    }
}
