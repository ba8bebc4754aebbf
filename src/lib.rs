//! btreedict - An in-memory ordered dictionary backed by a B-tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           btreedict                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Shared handle (concurrency/)  [optional]        │   │
//! │  │        SharedBTree = Arc<RwLock<BTree>>, one writer      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Index Layer (index/btree/)                 │   │
//! │  │   BTree: find_index → split_child → insert / lookup      │   │
//! │  │          for_each + Iter (in-order) + TreeStats          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Common (common/)                         │   │
//! │  │            BTreeConfig + Error + Result                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error)
//! - [`index`] - The B-tree
//! - [`concurrency`] - Lock-protected shared handle
//!
//! # Quick Start
//! ```
//! use btreedict::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for (key, value) in [("one", "first"), ("two", "second"), ("three", "third")] {
//!     tree.insert(key, value).unwrap();
//! }
//!
//! assert_eq!(tree.count(), 3);
//! assert_eq!(tree.lookup("three"), Some(&"third"));
//!
//! let keys: Vec<_> = tree.keys().copied().collect();
//! assert_eq!(keys, ["one", "three", "two"]);
//! ```

pub mod common;
pub mod concurrency;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{BTreeConfig, Error, InvariantViolation, Result};

pub use concurrency::SharedBTree;
pub use index::btree::{
    BTree, DefaultValue, InsertOutcome, Iter, Keys, Record, StatsSnapshot, TreeStats, Values,
};
