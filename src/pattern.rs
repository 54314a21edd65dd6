//! Activation pattern type.
//!
//! Patterns are dense vectors of non-negative integers. In practice they are
//! binary activation vectors produced by an upstream sparse encoder, but the
//! distance metrics treat every element as a general magnitude.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{KnnError, Result};

/// A fixed-length activation pattern.
///
/// Always holds at least one element; empty patterns are rejected at
/// construction so they never reach learned memory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Pattern {
    data: Vec<u32>,
}

impl Pattern {
    /// Create a pattern from raw element values.
    pub fn new(data: Vec<u32>) -> Result<Self> {
        if data.is_empty() {
            return Err(KnnError::EmptyPattern);
        }
        Ok(Self { data })
    }

    /// Build a dense binary pattern of `width` elements from the indices of
    /// its active bits.
    ///
    /// Duplicate indices are harmless (the bit is simply set once).
    ///
    /// # Example
    /// ```rust
    /// use knn_memory::Pattern;
    ///
    /// let p = Pattern::from_active_indices(6, &[1, 4]).unwrap();
    /// assert_eq!(p.data(), &[0, 1, 0, 0, 1, 0]);
    /// ```
    pub fn from_active_indices(width: usize, active: &[usize]) -> Result<Self> {
        if width == 0 {
            return Err(KnnError::EmptyPattern);
        }

        let mut data = vec![0u32; width];
        for &index in active {
            if index >= width {
                return Err(KnnError::IndexOutOfRange { index, width });
            }
            data[index] = 1;
        }
        Ok(Self { data })
    }

    /// Number of elements.
    pub fn width(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Count non-zero elements.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Indices of the non-zero elements, ascending.
    pub fn active_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(i, _)| i)
            .collect()
    }
}

impl TryFrom<Vec<u32>> for Pattern {
    type Error = KnnError;

    fn try_from(data: Vec<u32>) -> Result<Self> {
        Self::new(data)
    }
}

impl From<Pattern> for Vec<u32> {
    fn from(pattern: Pattern) -> Self {
        pattern.data
    }
}

impl Index<usize> for Pattern {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
