//! The B-tree: index search, proactive split, insert, lookup, traversal.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use super::iter::{Iter, Keys, Values};
use super::node::Node;
use super::stats::{StatsSnapshot, TreeStats};
use crate::common::{BTreeConfig, InvariantViolation, Result};

/// What an [`BTree::insert`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<V> {
    /// The key was new; the record count grew by one.
    Inserted,
    /// The key already existed; carries the value it held before.
    Replaced(V),
}

impl<V> InsertOutcome<V> {
    /// True if a new record was added.
    #[inline]
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }

    /// The overwritten value, if any.
    pub fn previous(self) -> Option<V> {
        match self {
            InsertOutcome::Inserted => None,
            InsertOutcome::Replaced(previous) => Some(previous),
        }
    }
}

/// A borrowed `(key, value)` pair handed to [`BTree::for_each`].
#[derive(Debug)]
pub struct Record<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
}

/// Value stored by [`BTree::insert_key`] when the caller gives none.
///
/// Implemented for `bool` as `true`, so a `BTree<K, bool>` works as an
/// ordered set. Implement it for your own value type to choose its default.
pub trait DefaultValue {
    fn default_value() -> Self;
}

impl DefaultValue for bool {
    #[inline]
    fn default_value() -> Self {
        true
    }
}

impl DefaultValue for () {
    #[inline]
    fn default_value() -> Self {}
}

/// An in-memory B-tree keyed by `K`.
///
/// Full children are split *before* the insert descends into them, so a
/// single downward pass always reaches a leaf with room for the new key.
/// The tree only grows in height when the root itself is full.
///
/// # Thread Safety
/// Mutation takes `&mut self`: one writer, no concurrent readers. Wrap the
/// tree in [`SharedBTree`](crate::concurrency::SharedBTree) to share it.
///
/// # Example
/// ```
/// use btreedict::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.insert("one", "first").unwrap();
/// tree.insert("two", "second").unwrap();
///
/// assert_eq!(tree.count(), 2);
/// assert_eq!(tree.lookup("one"), Some(&"first"));
/// assert_eq!(tree.lookup("three"), None);
/// ```
#[derive(Debug)]
pub struct BTree<K, V = bool> {
    /// Replaced, never mutated into a new level, when it overflows.
    root: Node<K, V>,

    /// Branching parameters (immutable after construction).
    config: BTreeConfig,

    /// Number of distinct keys.
    count: usize,

    stats: TreeStats,
}

impl<K: Ord, V> BTree<K, V> {
    /// Create an empty tree with minimum degree `min_degree`.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `min_degree < 2`
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::with_config(BTreeConfig::new(min_degree)?))
    }

    /// Create an empty tree from an already validated config.
    pub fn with_config(config: BTreeConfig) -> Self {
        debug!(min_degree = config.min_degree(), "btree.new");
        Self {
            root: Node::leaf(),
            config,
            count: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn min_degree(&self) -> usize {
        self.config.min_degree()
    }

    #[inline]
    pub fn max_degree(&self) -> usize {
        self.config.max_degree()
    }

    #[inline]
    pub fn config(&self) -> BTreeConfig {
        self.config
    }

    /// Number of distinct keys stored. O(1).
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of levels, counting the root. An empty tree has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children.first() {
            node = first;
            height += 1;
        }
        height
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the operation counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    pub(crate) fn root(&self) -> &Node<K, V> {
        &self.root
    }

    // ========================================================================
    // Structural maintenance
    // ========================================================================

    /// Position of `key` within `node`.
    ///
    /// Returns the unique `i` in `0..=node.len()` with `keys[i - 1] < key`
    /// and `keys[i] >= key` (missing bounds count as infinities). If
    /// `keys[i] == key` this is the match; otherwise it is the child to
    /// descend into, and `node.len()` means the last child.
    pub(crate) fn find_index<Q>(node: &Node<K, V>, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.keys.partition_point(|probe| probe.borrow() < key)
    }

    /// Split the full child at `child_index` around its median.
    ///
    /// The median key moves up into `parent` at `child_index`, and a new
    /// sibling at `child_index + 1` takes everything above it. Both halves
    /// end with `t - 1` keys.
    ///
    /// ```text
    ///  t = 3        parent: [ .. P .. ]
    ///                          |
    ///  child:  [ 1  2  3  4  5 ]          children c0..c5
    ///
    ///  after:       parent: [ .. 3 P .. ]
    ///                          /   \
    ///          child: [ 1 2 ]       sibling: [ 4 5 ]
    ///          children c0..c2      children c3..c5
    /// ```
    ///
    /// # Errors
    /// `Error::InvariantViolation` if the parent is full or a leaf, or the
    /// child is missing or not full. Nothing is modified in that case.
    pub(crate) fn split_child(
        parent: &mut Node<K, V>,
        child_index: usize,
        config: BTreeConfig,
    ) -> Result<()> {
        let max_keys = config.max_keys();
        if parent.len() >= max_keys {
            return Err(InvariantViolation::ParentFull {
                keys: parent.len(),
                max_keys,
            }
            .into());
        }
        if parent.is_leaf {
            return Err(InvariantViolation::ParentIsLeaf.into());
        }

        let children = parent.children.len();
        let child = parent
            .children
            .get_mut(child_index)
            .ok_or(InvariantViolation::ChildMissing {
                index: child_index,
                children,
            })?;
        if child.len() != max_keys {
            return Err(InvariantViolation::ChildNotFull {
                index: child_index,
                keys: child.len(),
                max_keys,
            }
            .into());
        }

        let mid = config.min_degree() - 1;
        let mut sibling = Node::new(child.is_leaf);
        sibling.keys = child.keys.split_off(mid + 1);
        sibling.values = child.values.split_off(mid + 1);
        if !child.is_leaf {
            sibling.children = child.children.split_off(config.min_degree());
        }

        // The median is now the last entry left in the child.
        let promoted_key = child.keys.remove(mid);
        let promoted_value = child.values.remove(mid);

        trace!(
            child_index,
            min_degree = config.min_degree(),
            leaf = sibling.is_leaf,
            "btree.split_child"
        );

        parent.keys.insert(child_index, promoted_key);
        parent.values.insert(child_index, promoted_value);
        parent.children.insert(child_index + 1, sibling);
        Ok(())
    }

    /// Put a new internal root above the full old root and split it.
    fn grow_root(&mut self) -> Result<()> {
        let old_root = mem::replace(&mut self.root, Node::internal());
        self.root.children.push(old_root);

        if let Err(err) = Self::split_child(&mut self.root, 0, self.config) {
            if let Some(old_root) = self.root.children.pop() {
                self.root = old_root;
            }
            return Err(err);
        }

        TreeStats::bump(&self.stats.splits);
        TreeStats::bump(&self.stats.root_splits);
        debug!(height = self.height(), count = self.count, "btree.grow_root");
        Ok(())
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Insert `value` under `key`, replacing any value already stored there.
    ///
    /// Replacing does not change the tree's shape or record count.
    ///
    /// # Errors
    /// `Error::InvariantViolation` only if the tree is already corrupt.
    pub fn insert(&mut self, key: K, value: V) -> Result<InsertOutcome<V>> {
        if self.root.len() == self.config.max_keys() {
            self.grow_root()?;
        }

        let outcome = Self::insert_nonfull(&mut self.root, key, value, self.config, &self.stats)?;

        match outcome {
            InsertOutcome::Inserted => {
                self.count += 1;
                TreeStats::bump(&self.stats.inserts);
            }
            InsertOutcome::Replaced(_) => TreeStats::bump(&self.stats.replacements),
        }
        Ok(outcome)
    }

    /// Single downward pass from a node that has room for one more key.
    fn insert_nonfull(
        mut node: &mut Node<K, V>,
        key: K,
        value: V,
        config: BTreeConfig,
        stats: &TreeStats,
    ) -> Result<InsertOutcome<V>> {
        if node.len() >= config.max_keys() {
            return Err(InvariantViolation::NodeFull {
                keys: node.len(),
                max_keys: config.max_keys(),
            }
            .into());
        }

        loop {
            let mut index = Self::find_index(node, &key);

            if index < node.len() && node.keys[index] == key {
                let previous = mem::replace(&mut node.values[index], value);
                return Ok(InsertOutcome::Replaced(previous));
            }

            if node.is_leaf {
                node.keys.insert(index, key);
                node.values.insert(index, value);
                return Ok(InsertOutcome::Inserted);
            }

            if node.children[index].len() == config.max_keys() {
                Self::split_child(node, index, config)?;
                TreeStats::bump(&stats.splits);

                // The promoted median now sits at `index` and may be the key itself.
                match key.cmp(&node.keys[index]) {
                    Ordering::Less => {}
                    Ordering::Greater => index += 1,
                    Ordering::Equal => {
                        let previous = mem::replace(&mut node.values[index], value);
                        return Ok(InsertOutcome::Replaced(previous));
                    }
                }
            }

            node = &mut node.children[index];
        }
    }

    /// Value stored under `key`, or `None` if the key was never inserted.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = &self.root;
        loop {
            let index = Self::find_index(node, key);

            if index < node.len() && node.keys[index].borrow() == key {
                TreeStats::bump(&self.stats.lookup_hits);
                return Some(&node.values[index]);
            }
            if node.is_leaf {
                TreeStats::bump(&self.stats.lookup_misses);
                return None;
            }
            node = &node.children[index];
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Visit every record in ascending key order.
    ///
    /// `visit` receives the record, its 0-based position in the traversal,
    /// and the tree itself. The traversal is eager; use [`BTree::iter`] for
    /// a lazy one.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(Record<'_, K, V>, usize, &Self),
    {
        Self::visit_in_order(&self.root, self, &mut visit, 0);
    }

    fn visit_in_order<F>(node: &Node<K, V>, tree: &Self, visit: &mut F, mut index: usize) -> usize
    where
        F: FnMut(Record<'_, K, V>, usize, &Self),
    {
        for (i, (key, value)) in node.keys.iter().zip(&node.values).enumerate() {
            if !node.is_leaf {
                index = Self::visit_in_order(&node.children[i], tree, visit, index);
            }
            visit(Record { key, value }, index, tree);
            index += 1;
        }
        if !node.is_leaf {
            index = Self::visit_in_order(&node.children[node.len()], tree, visit, index);
        }
        index
    }

    /// Lazy in-order iterator over `(&key, &value)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.count)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V: DefaultValue> BTree<K, V> {
    /// Insert `key` with the value type's [`DefaultValue`].
    ///
    /// ```
    /// use btreedict::BTree;
    ///
    /// let mut tree: BTree<&str> = BTree::default();
    /// tree.insert_key("test").unwrap();
    /// assert_eq!(tree.lookup("test"), Some(&true));
    /// ```
    pub fn insert_key(&mut self, key: K) -> Result<InsertOutcome<V>> {
        self.insert(key, V::default_value())
    }
}

impl<K: Ord, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::with_config(BTreeConfig::default())
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a BTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indented dump of the node layout, one node per line.
impl<K: fmt::Debug, V> fmt::Display for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<K: fmt::Debug, V>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<K, V>,
            depth: usize,
        ) -> fmt::Result {
            writeln!(f, "{}{:?}", "  ".repeat(depth), node.keys)?;
            for child in &node.children {
                write_node(f, child, depth + 1)?;
            }
            Ok(())
        }
        write_node(f, &self.root, 0)
    }
}
