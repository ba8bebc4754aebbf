//! B-tree node storage.

/// One vertex of the tree.
///
/// A node is passive storage: every structural decision lives in
/// [`BTree`](super::BTree). Fields are crate-visible so the tree can splice
/// them directly.
///
/// # Layout
/// ```text
///            keys:      [ k0 ][ k1 ][ k2 ]
///            values:    [ v0 ][ v1 ][ v2 ]
///  children: [ c0 ][ c1 ][ c2 ][ c3 ]        (internal nodes only)
///
///  every key in c1 lies strictly between k0 and k1
/// ```
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Fixed at creation.
    pub(crate) is_leaf: bool,
    /// Strictly increasing.
    pub(crate) keys: Vec<K>,
    /// `values[i]` belongs to `keys[i]`.
    pub(crate) values: Vec<V>,
    /// Empty for leaves, `keys.len() + 1` entries otherwise.
    pub(crate) children: Vec<Node<K, V>>,
}

impl<K, V> Node<K, V> {
    /// Create an empty leaf.
    pub(crate) fn leaf() -> Self {
        Self::new(true)
    }

    /// Create an empty internal node.
    pub(crate) fn internal() -> Self {
        Self::new(false)
    }

    pub(crate) fn new(is_leaf: bool) -> Self {
        Self {
            is_leaf,
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Number of keys currently stored.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
