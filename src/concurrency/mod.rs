//! External locking for sharing a tree across threads.
//!
//! [`BTree`](crate::BTree) itself does no locking. [`SharedBTree`] puts it
//! behind a reader-writer lock: one writer at a time, and readers are
//! excluded while an insert runs.

mod shared_tree;

pub use shared_tree::SharedBTree;
