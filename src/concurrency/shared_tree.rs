//! Cloneable, lock-protected handle to a [`BTree`].

use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::{BTreeConfig, Result};
use crate::index::btree::{BTree, InsertOutcome, StatsSnapshot};

/// A [`BTree`] shared between threads.
///
/// # Thread Safety
/// - `insert`: write lock, exclusive of all readers and writers
/// - `lookup_cloned` / `contains_key` / `count`: read lock, many at once
///
/// Values are cloned out of lookups because a reference can't outlive the
/// read guard. Use [`SharedBTree::read`] to borrow in place or to iterate.
///
/// # Example
/// ```
/// use btreedict::concurrency::SharedBTree;
/// use std::thread;
///
/// let tree = SharedBTree::new(3).unwrap();
/// let writer = tree.clone();
/// thread::spawn(move || writer.insert(1u32, "one").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(tree.lookup_cloned(&1), Some("one"));
/// ```
pub struct SharedBTree<K, V = bool> {
    inner: Arc<RwLock<BTree<K, V>>>,
}

impl<K: Ord, V> SharedBTree<K, V> {
    /// Create an empty shared tree.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `min_degree < 2`
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::from_tree(BTree::new(min_degree)?))
    }

    pub fn with_config(config: BTreeConfig) -> Self {
        Self::from_tree(BTree::with_config(config))
    }

    /// Take ownership of an existing tree.
    pub fn from_tree(tree: BTree<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Insert under the write lock.
    ///
    /// # Errors
    /// `Error::InvariantViolation` only if the tree is already corrupt.
    pub fn insert(&self, key: K, value: V) -> Result<InsertOutcome<V>> {
        self.inner.write().insert(key, value)
    }

    /// Look up `key` under the read lock and clone its value out.
    pub fn lookup_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.inner.read().lookup(key).cloned()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats()
    }

    /// Shared access for traversal. Inserts block until the guard drops.
    pub fn read(&self) -> RwLockReadGuard<'_, BTree<K, V>> {
        self.inner.read()
    }

    /// Exclusive access for a batch of inserts under one lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, BTree<K, V>> {
        self.inner.write()
    }

    /// Unwrap the tree if this is the last handle; otherwise hand the handle back.
    pub fn try_into_inner(self) -> std::result::Result<BTree<K, V>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<K, V> Clone for SharedBTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord, V> Default for SharedBTree<K, V> {
    fn default() -> Self {
        Self::from_tree(BTree::default())
    }
}
