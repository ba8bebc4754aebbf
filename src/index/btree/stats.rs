//! B-tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by a [`BTree`](super::BTree).
///
/// Lookups only borrow the tree, so the counters are atomics and can be
/// bumped through `&self`. `Ordering::Relaxed` is enough: each counter is
/// independent and only needs atomicity.
///
/// # Example
/// ```
/// use btreedict::index::btree::TreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = TreeStats::new();
/// stats.lookup_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.lookup_hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// New keys added.
    pub inserts: AtomicU64,

    /// Inserts that overwrote the value of an existing key.
    pub replacements: AtomicU64,

    /// Child splits, including the ones that grew the root.
    pub splits: AtomicU64,

    /// Splits of the root, i.e. times the tree grew one level.
    pub root_splits: AtomicU64,

    /// Lookups that found their key.
    pub lookup_hits: AtomicU64,

    /// Lookups that reached a leaf without a match.
    pub lookup_misses: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            replacements: AtomicU64::new(0),
            splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
            lookup_hits: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            replacements: self.replacements.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.replacements.store(0, Ordering::Relaxed);
        self.splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub replacements: u64,
    pub splits: u64,
    pub root_splits: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, replacements: {}, splits: {}, root_splits: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.replacements,
            self.splits,
            self.root_splits,
            self.hit_rate() * 100.0
        )
    }
}
