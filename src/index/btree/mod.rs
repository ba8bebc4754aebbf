//! In-memory B-tree index.
//!
//! A CLRS-style B-tree of minimum degree `t`: every node holds at most
//! `2t - 1` keys, every non-root node at least `t - 1`, and all leaves sit at
//! the same depth. Inserts split full children on the way down, so no pass
//! ever needs to walk back up.
//!
//! # Components
//! - [`BTree`] - The tree and its operations
//! - [`Iter`] / [`Keys`] / [`Values`] - Lazy in-order traversal
//! - [`TreeStats`] - Operation counters
//!
//! Deletion is not supported.

mod iter;
mod node;
mod stats;
mod tree;
mod validate;

pub use iter::{Iter, Keys, Values};
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::{BTree, DefaultValue, InsertOutcome, Record};
