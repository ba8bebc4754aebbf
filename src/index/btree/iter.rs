//! Lazy in-order iterators.
//!
//! [`Iter`] keeps an explicit stack of `(node, next key index)` frames
//! instead of recursing, so a traversal can be paused between records.

use std::iter::FusedIterator;

use super::node::Node;

/// In-order iterator over `(&key, &value)`, produced by [`BTree::iter`](super::BTree::iter).
pub struct Iter<'a, K, V> {
    /// Path from the root to the next record; the top frame yields next.
    stack: Vec<(&'a Node<K, V>, usize)>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>, count: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: count,
        };
        iter.push_left_edge(root);
        iter
    }

    /// Push `node` and its leftmost descendants.
    fn push_left_edge(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(first) => node = first,
                None => break,
            }
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let node = top.0;
            let index = top.1;

            if index < node.keys.len() {
                top.1 += 1;
                if !node.is_leaf {
                    self.push_left_edge(&node.children[index + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&node.keys[index], &node.values[index]));
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Keys in ascending order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values in ascending key order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
