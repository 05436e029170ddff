// src/vector/core.rs
//! Core vector structure, construction and capacity management
//!
//! This module provides the [`Vector`] type: an owned buffer of
//! `capacity` slots of which the first `size` are logically present.
//! Buffers released by reallocation, shrinking or drop are wiped with the
//! [`zeroize`] crate before they are freed.

use crate::config::{IndexMode, VectorConfig};
use crate::error::{Result, VectorError};
use crate::stats::VectorStats;
use log::{debug, trace};
use std::fmt;
use std::ops::{Index, IndexMut};
use zeroize::Zeroize;

/// Element type stored by [`Vector`].
pub type ValueType = f64;

/// Smallest capacity reached when growing from an empty buffer.
pub const MIN_GROWTH: usize = 1;

/// Largest capacity the growth policy will request on its own.
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<ValueType>();

/// A growable contiguous vector of [`ValueType`].
///
/// When full, the capacity is multiplied by the growth factor, which keeps
/// appends amortized O(1).
///
/// # Examples
///
/// ```
/// use growvec::Vector;
/// # use growvec::VectorError;
///
/// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
/// v.push_back(4.0);
/// v.insert(10.0, 1)?;
/// assert_eq!(v.as_slice(), &[1.0, 10.0, 2.0, 3.0, 4.0]);
///
/// v.erase(0, 2)?;
/// assert_eq!(v.find(3.0), Some(1));
/// # Ok::<(), VectorError>(())
/// ```
pub struct Vector {
    /// Owned storage; its length is the capacity
    pub(crate) data: Box<[ValueType]>,
    /// Count of logically present elements
    pub(crate) size: usize,
    /// Capacity multiplier applied on overflow
    pub(crate) growth_factor: f64,
    /// Behavior of `Index`/`IndexMut`
    pub(crate) index_mode: IndexMode,
    /// Number of buffer reallocations
    pub(crate) reallocations: usize,
}

impl Vector {
    /// Creates an empty vector with the default configuration.
    ///
    /// No memory is allocated until the first insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let v = Vector::new();
    /// assert_eq!(v.size(), 0);
    /// assert_eq!(v.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::from_parts(Box::default(), 0, VectorConfig::default())
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// Capacity equals `values.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `growth_factor` is negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
    /// assert_eq!(v.size(), 3);
    /// assert_eq!(v.capacity(), 3);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_slice(values: &[ValueType], growth_factor: f64) -> Self {
        assert!(
            growth_factor.is_finite() && growth_factor >= 0.0,
            "Growth factor {} must be finite and non-negative",
            growth_factor
        );
        let config = VectorConfig {
            growth_factor,
            ..VectorConfig::default()
        };
        Self::from_parts(values.into(), values.len(), config)
    }

    /// Creates a vector holding a copy of `values` with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidGrowthFactor`] if the configured growth
    /// factor is negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::{Vector, VectorConfig};
    /// # use growvec::VectorError;
    ///
    /// let v = Vector::with_config(&[1.0, 2.0], VectorConfig::compact())?;
    /// assert_eq!(v.growth_factor(), 1.5);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn with_config(values: &[ValueType], config: VectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(values.into(), values.len(), config))
    }

    fn from_parts(data: Box<[ValueType]>, size: usize, config: VectorConfig) -> Self {
        debug_assert!(size <= data.len());
        Self {
            data,
            size,
            growth_factor: config.growth_factor,
            index_mode: config.index_mode,
            reallocations: 0,
        }
    }

    /// Returns the number of logically present elements.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the growth coefficient.
    #[inline(always)]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Returns the indexing mode used by `vector[idx]`.
    #[inline(always)]
    pub fn index_mode(&self) -> IndexMode {
        self.index_mode
    }

    /// Returns the configuration this vector grows and indexes with.
    pub fn config(&self) -> VectorConfig {
        VectorConfig {
            growth_factor: self.growth_factor,
            index_mode: self.index_mode,
        }
    }

    /// Returns a snapshot of the storage state.
    pub fn stats(&self) -> VectorStats {
        VectorStats {
            size: self.size,
            capacity: self.capacity(),
            growth_factor: self.growth_factor,
            reallocations: self.reallocations,
        }
    }

    /// Returns `size / capacity`.
    ///
    /// The result is NaN when the capacity is zero. Use
    /// [`try_load_factor`](Self::try_load_factor) to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
    /// v.reserve(6);
    /// assert_eq!(v.load_factor(), 0.5);
    ///
    /// assert!(Vector::new().load_factor().is_nan());
    /// ```
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns `size / capacity`, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DegenerateState`] if the capacity is zero.
    pub fn try_load_factor(&self) -> Result<f64> {
        if self.capacity() == 0 {
            return Err(VectorError::DegenerateState("load factor of zero capacity"));
        }
        Ok(self.load_factor())
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity` does not exceed the current capacity;
    /// the capacity never shrinks here.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0], 2.0);
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    ///
    /// v.reserve(4);
    /// assert_eq!(v.capacity(), 10);
    /// assert_eq!(v[0], 1.0);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        debug!(
            "growing vector buffer from {} to {} slots ({} in use)",
            self.capacity(),
            new_capacity,
            self.size
        );
        self.reallocate(new_capacity);
    }

    /// Reallocates the buffer down to exactly `size` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
    /// v.reserve(64);
    /// v.shrink_to_fit();
    /// assert_eq!(v.capacity(), 2);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.size {
            return;
        }
        debug!(
            "shrinking vector buffer from {} to {} slots",
            self.capacity(),
            self.size
        );
        self.reallocate(self.size);
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots
    /// and wipes the old one.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        let mut buffer = vec![ValueType::default(); new_capacity].into_boxed_slice();
        buffer[..self.size].copy_from_slice(&self.data[..self.size]);

        let mut old = std::mem::replace(&mut self.data, buffer);
        old.zeroize();
        self.reallocations += 1;
    }

    /// Capacity to grow to when the buffer is full.
    ///
    /// Never less than 1.5x the current capacity (plus one slot), so growth
    /// stays geometric for factors at or below one, including the 0.0 left
    /// behind by [`take`](Self::take). A factor whose product exceeds
    /// [`MAX_CAPACITY`] falls back to that floor.
    pub(crate) fn next_capacity(&self) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            if self.growth_factor > MAX_CAPACITY as f64 {
                return MIN_GROWTH;
            }
            return (self.growth_factor as usize).max(MIN_GROWTH);
        }
        let floor = capacity.saturating_add((capacity / 2).max(1));
        let scaled = capacity as f64 * self.growth_factor;
        if scaled > MAX_CAPACITY as f64 {
            return floor;
        }
        (scaled as usize).max(floor)
    }

    /// Ensures room for `additional` more elements, growing by the growth
    /// policy or to the exact requirement, whichever is larger.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    pub(crate) fn grow_for(&mut self, additional: usize) {
        let Some(required) = self.size.checked_add(additional) else {
            panic!("capacity overflow: {} + {}", self.size, additional);
        };
        if required <= self.capacity() {
            return;
        }
        self.reserve(self.next_capacity().max(required));
    }

    /// Deep-copies `other` into `self`.
    ///
    /// The old buffer is wiped and released; the new capacity equals
    /// `other.size()`. The growth factor and indexing mode are copied too,
    /// and the reallocation count restarts at zero as it does for `clone()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0], 3.0);
    /// let mut b = Vector::from_slice(&[9.0; 5], 2.0);
    /// b.assign_from(&a);
    /// assert_eq!(b, a);
    /// assert_eq!(b.capacity(), 2);
    /// assert_eq!(b.growth_factor(), 3.0);
    /// ```
    pub fn assign_from(&mut self, other: &Vector) {
        let mut old = std::mem::replace(&mut self.data, other.as_slice().into());
        old.zeroize();
        self.size = other.size;
        self.growth_factor = other.growth_factor;
        self.index_mode = other.index_mode;
        self.reallocations = 0;
    }

    /// Transfers the buffer out, leaving `self` empty.
    ///
    /// Afterwards `self` has size 0, capacity 0 and a growth factor of 0.0;
    /// it stays usable and dropping it does not touch the returned vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut a = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
    /// let b = a.take();
    /// assert_eq!(a.size(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn take(&mut self) -> Vector {
        trace!(
            "transferring vector buffer ({} of {} slots)",
            self.size,
            self.capacity()
        );
        let emptied = Self::from_parts(
            Box::default(),
            0,
            VectorConfig {
                growth_factor: 0.0,
                index_mode: self.index_mode,
            },
        );
        std::mem::replace(self, emptied)
    }

    /// Replaces `self` with the contents of `other`, leaving `other` empty.
    ///
    /// The previous buffer of `self` is wiped and released.
    pub fn assign_take(&mut self, other: &mut Vector) {
        *self = other.take();
    }

    /// Removes all elements, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Wipes every slot and resets the size, keeping the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[4.0, 2.0], 2.0);
    /// v.burn();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 2);
    /// ```
    pub fn burn(&mut self) {
        self.data.zeroize();
        self.size = 0;
    }

    /// Consumes the vector and wipes its memory.
    pub fn burn_free(mut self) {
        self.burn();
    }

    /// Returns the logically present elements.
    #[inline]
    pub fn as_slice(&self) -> &[ValueType] {
        &self.data[..self.size]
    }

    /// Returns the logically present elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ValueType] {
        &mut self.data[..self.size]
    }

    /// Returns the element at `idx`, or `None` if `idx >= size`.
    ///
    /// Unlike `vector[idx]`, this never wraps.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&ValueType> {
        self.as_slice().get(idx)
    }

    /// Returns the element at `idx` mutably, or `None` if `idx >= size`.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut ValueType> {
        self.as_mut_slice().get_mut(idx)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let v = Vector::from_slice(&[2.0, 3.0, 4.0, 3.0], 2.0);
    /// assert_eq!(v.find(3.0), Some(1));
    /// assert_eq!(v.find(99.0), None);
    /// ```
    pub fn find(&self, value: ValueType) -> Option<usize> {
        self.as_slice().iter().position(|&item| item == value)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: ValueType) -> bool {
        self.find(value).is_some()
    }

    /// Maps an `Index` argument to a slot according to the indexing mode.
    fn resolve_index(&self, idx: usize) -> usize {
        assert!(self.size > 0, "index {} into an empty vector", idx);
        match self.index_mode {
            IndexMode::Wrap => idx % self.size,
            IndexMode::Strict => {
                assert!(
                    idx < self.size,
                    "index out of bounds: the size is {} but the index is {}",
                    self.size,
                    idx
                );
                idx
            }
        }
    }
}

impl Drop for Vector {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Vector {
    /// Deep copy with capacity equal to the source size.
    fn clone(&self) -> Self {
        Self::from_parts(self.as_slice().into(), self.size, self.config())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for Vector {
    /// Compares logical contents only.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Index<usize> for Vector {
    type Output = ValueType;

    /// Returns the element at `idx % size` (or `idx` in strict mode).
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty, or in strict mode if `idx >= size`.
    fn index(&self, idx: usize) -> &ValueType {
        let slot = self.resolve_index(idx);
        &self.data[slot]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut ValueType {
        let slot = self.resolve_index(idx);
        &mut self.data[slot]
    }
}

impl AsRef<[ValueType]> for Vector {
    fn as_ref(&self) -> &[ValueType] {
        self.as_slice()
    }
}

impl From<&[ValueType]> for Vector {
    fn from(values: &[ValueType]) -> Self {
        Self::from_parts(values.into(), values.len(), VectorConfig::default())
    }
}

impl From<Vec<ValueType>> for Vector {
    fn from(values: Vec<ValueType>) -> Self {
        let size = values.len();
        Self::from_parts(values.into_boxed_slice(), size, VectorConfig::default())
    }
}

impl FromIterator<ValueType> for Vector {
    fn from_iter<I: IntoIterator<Item = ValueType>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
