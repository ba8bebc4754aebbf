//! Configuration constants for btreedict.

use crate::common::{Error, Result};

/// Minimum degree used when none is given.
///
/// With `t = 2` every node holds between 1 and 3 keys, which makes the
/// tree a 2-3-4 tree.
pub const DEFAULT_MIN_DEGREE: usize = 2;

/// Smallest minimum degree a B-tree can be built with.
///
/// Below this a split could not leave `t - 1 >= 1` keys on each side.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Branching parameters of a tree, validated once at construction.
///
/// # Key bounds
/// For minimum degree `t`:
/// - `max_degree = 2t` children per internal node
/// - every node holds at most `2t - 1` keys
/// - every non-root node holds at least `t - 1` keys
///
/// # Example
/// ```
/// use btreedict::BTreeConfig;
///
/// let config = BTreeConfig::new(3).unwrap();
/// assert_eq!(config.max_degree(), 6);
/// assert_eq!(config.max_keys(), 5);
/// assert_eq!(config.min_keys(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeConfig {
    min_degree: usize,
}

impl BTreeConfig {
    /// Create a config for the given minimum degree.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `min_degree < 2` or `2 * min_degree`
    ///   does not fit in `usize`
    pub fn new(min_degree: usize) -> Result<Self> {
        if min_degree < MIN_DEGREE_FLOOR || min_degree.checked_mul(2).is_none() {
            return Err(Error::InvalidMinDegree { min_degree });
        }
        Ok(Self { min_degree })
    }

    /// Minimum degree `t`.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Maximum number of children of an internal node (`2t`).
    #[inline]
    pub fn max_degree(&self) -> usize {
        2 * self.min_degree
    }

    /// Maximum number of keys in any node (`2t - 1`).
    #[inline]
    pub fn max_keys(&self) -> usize {
        self.max_degree() - 1
    }

    /// Minimum number of keys in a non-root node (`t - 1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.min_degree - 1
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self {
            min_degree: DEFAULT_MIN_DEGREE,
        }
    }
}
