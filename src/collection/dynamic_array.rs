//! Growable integer array with explicit capacity management.
//!
//! The array owns a fixed-length, zero-initialized backing buffer and tracks
//! the logical length separately. When an append finds the buffer full, a new
//! buffer of twice the capacity is allocated and the live prefix is copied
//! over. Capacity never shrinks: `remove` and `clear` only move the logical
//! length and zero the slots they free.

use std::fmt;

use crate::core::errors::{ArrError, Result};

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 2;

/// Multiplier applied to the capacity whenever an append overflows it.
pub const GROWTH_FACTOR: usize = 2;

/// Integer sequence with amortized O(1) append and order-preserving removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray {
    elements: Box<[i32]>,
    len: usize,
}

impl DynamicArray {
    /// Create an empty array with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: vec![0; capacity.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of logically valid elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the backing buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Append `value`, doubling the capacity first when the buffer is full.
    pub fn add(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.elements[self.len] = value;
        self.len += 1;
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.check_index(index)?;
        Ok(self.elements[index])
    }

    /// Overwrite the value at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_index(index)?;
        self.elements[index] = value;
        Ok(())
    }

    /// Remove the element at `index`, shifting every later element left by one.
    ///
    /// The freed trailing slot is zeroed. Returns the removed value.
    pub fn remove(&mut self, index: usize) -> Result<i32> {
        self.check_index(index)?;
        let removed = self.elements[index];
        self.elements.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.elements[self.len] = 0;
        Ok(removed)
    }

    /// Index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Whether any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// Drop every element. Freed slots are zeroed; capacity is kept.
    pub fn clear(&mut self) {
        self.elements[..self.len].fill(0);
        self.len = 0;
    }

    /// The live elements in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements[..self.len]
    }

    /// Iterate the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(ArrError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity().saturating_mul(GROWTH_FACTOR);
        let mut grown = vec![0; new_capacity].into_boxed_slice();
        grown[..self.len].copy_from_slice(self.as_slice());
        self.elements = grown;
    }

    #[cfg(test)]
    fn backing(&self) -> &[i32] {
        &self.elements
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i32> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.add(value);
        }
        array
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Comma-separated values in index order, e.g. `1,2,3`.
impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
