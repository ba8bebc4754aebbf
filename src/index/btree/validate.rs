//! Full structural check of a tree.

use super::node::Node;
use super::tree::BTree;
use crate::common::{BTreeConfig, InvariantViolation, Result};

impl<K: Ord, V> BTree<K, V> {
    /// Walk the whole tree and check every B-tree invariant.
    ///
    /// Checks, in traversal order: keys strictly increasing, key counts
    /// within `t-1 ..= 2t-1` (root excepted), one more child than keys on
    /// internal nodes, all leaves at one depth, and the record counter.
    ///
    /// # Errors
    /// `Error::InvariantViolation` describing the first broken rule.
    pub fn validate(&self) -> Result<()> {
        let mut validator = Validator {
            config: self.config(),
            leaf_depth: None,
            last_key: None,
            stored: 0,
        };
        validator.visit(self.root(), 0)?;

        if validator.stored != self.count() {
            return Err(InvariantViolation::CountMismatch {
                counted: self.count(),
                stored: validator.stored,
            }
            .into());
        }
        Ok(())
    }
}

struct Validator<'a, K> {
    config: BTreeConfig,
    leaf_depth: Option<usize>,
    last_key: Option<&'a K>,
    stored: usize,
}

impl<'a, K: Ord> Validator<'a, K> {
    fn visit<V>(&mut self, node: &'a Node<K, V>, depth: usize) -> Result<()> {
        let keys = node.len();

        if node.values.len() != keys {
            return Err(InvariantViolation::ValueCountMismatch {
                depth,
                keys,
                values: node.values.len(),
            }
            .into());
        }

        let min_keys = match (depth, node.is_leaf) {
            (0, true) => 0,
            (0, false) => 1,
            _ => self.config.min_keys(),
        };
        let max_keys = self.config.max_keys();
        if keys < min_keys || keys > max_keys {
            return Err(InvariantViolation::KeyCountOutOfBounds {
                depth,
                keys,
                min_keys,
                max_keys,
            }
            .into());
        }

        let expected_children = if node.is_leaf { 0 } else { keys + 1 };
        if node.children.len() != expected_children {
            return Err(InvariantViolation::ChildCountMismatch {
                depth,
                keys,
                children: node.children.len(),
            }
            .into());
        }

        if node.is_leaf {
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(InvariantViolation::UnevenLeafDepth {
                        expected,
                        found: depth,
                    }
                    .into());
                }
                Some(_) => {}
            }
            for key in &node.keys {
                self.check_order(key, depth)?;
            }
        } else {
            for (i, key) in node.keys.iter().enumerate() {
                self.visit(&node.children[i], depth + 1)?;
                self.check_order(key, depth)?;
            }
            self.visit(&node.children[keys], depth + 1)?;
        }

        self.stored += keys;
        Ok(())
    }

    /// In-order strictly increasing keys imply every subtree sits between
    /// its separators.
    fn check_order(&mut self, key: &'a K, depth: usize) -> Result<()> {
        if let Some(previous) = self.last_key {
            if previous >= key {
                return Err(InvariantViolation::KeysOutOfOrder { depth }.into());
            }
        }
        self.last_key = Some(key);
        Ok(())
    }
}
