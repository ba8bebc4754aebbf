//! Index structures.
//!
//! - [`btree`] - In-memory B-tree ordered dictionary

pub mod btree;
