//! Common types and utilities shared across btreedict.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and the validated [`BTreeConfig`]
//! - Error types

pub mod config;
pub mod error;

pub use config::BTreeConfig;
pub use error::{Error, InvariantViolation, Result};
