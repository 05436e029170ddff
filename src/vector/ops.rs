// src/vector/ops.rs
//! Positional insertion and removal
//!
//! Every operation validates its position before touching the buffer, so a
//! rejected call leaves size and capacity exactly as they were. Shifts are
//! done with `copy_within` over whole ranges.

use super::core::{ValueType, Vector};
use crate::error::{Result, VectorError};

impl Vector {
    /// Appends `value`, growing the buffer if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push_back(1.0);
    /// v.push_back(2.0);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: ValueType) {
        self.grow_for(1);
        // SAFETY: grow_for(1) leaves at least one spare slot.
        unsafe {
            self.push_back_unchecked(value);
        }
    }

    /// Prepends `value`, shifting every element one slot up. O(size).
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[2.0, 3.0], 2.0);
    /// v.push_front(1.0);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn push_front(&mut self, value: ValueType) {
        self.grow_for(1);
        self.data.copy_within(0..self.size, 1);
        self.data[0] = value;
        self.size += 1;
    }

    /// Inserts `value` at `pos`, shifting `[pos, size)` one slot up.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `pos > size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    /// # use growvec::VectorError;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 3.0], 2.0);
    /// v.insert(2.0, 1)?;
    /// v.insert(4.0, 3)?;
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    ///
    /// assert!(v.insert(9.0, 9).is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn insert(&mut self, value: ValueType, pos: usize) -> Result<()> {
        self.check_pos("insert", pos)?;
        self.grow_for(1);
        self.data.copy_within(pos..self.size, pos + 1);
        self.data[pos] = value;
        self.size += 1;
        Ok(())
    }

    /// Inserts all of `values` at `pos`, shifting `[pos, size)` up by
    /// `values.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `pos > size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    /// # use growvec::VectorError;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 5.0], 2.0);
    /// v.insert_slice(&[2.0, 3.0, 4.0], 1)?;
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn insert_slice(&mut self, values: &[ValueType], pos: usize) -> Result<()> {
        self.insert_range("insert_slice", values, pos)
    }

    /// Inserts the logical contents of `other` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `pos > size`.
    pub fn insert_vector(&mut self, other: &Vector, pos: usize) -> Result<()> {
        self.insert_range("insert_vector", other.as_slice(), pos)
    }

    fn insert_range(&mut self, op: &'static str, values: &[ValueType], pos: usize) -> Result<()> {
        self.check_pos(op, pos)?;
        let count = values.len();
        if count == 0 {
            return Ok(());
        }
        self.grow_for(count);
        self.data.copy_within(pos..self.size, pos + count);
        self.data[pos..pos + count].copy_from_slice(values);
        self.size += count;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// The slot itself is left untouched and may be overwritten later.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if the vector is empty.
    pub fn pop_back(&mut self) -> Result<ValueType> {
        if self.size == 0 {
            return Err(VectorError::out_of_range("pop_back", 0, 0));
        }
        self.size -= 1;
        Ok(self.data[self.size])
    }

    /// Removes and returns the first element, shifting the rest down.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    /// # use growvec::VectorError;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
    /// assert_eq!(v.pop_front()?, 1.0);
    /// assert_eq!(v.as_slice(), &[2.0, 3.0]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn pop_front(&mut self) -> Result<ValueType> {
        if self.size == 0 {
            return Err(VectorError::out_of_range("pop_front", 0, 0));
        }
        let value = self.data[0];
        self.data.copy_within(1..self.size, 0);
        self.size -= 1;
        Ok(value)
    }

    /// Removes up to `count` elements starting at `pos`.
    ///
    /// Does nothing on an empty vector. `count` is clamped to `size - pos`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `pos > size` on a non-empty
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    /// # use growvec::VectorError;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0], 2.0);
    /// v.erase(1, 2)?;
    /// assert_eq!(v.as_slice(), &[1.0, 4.0]);
    ///
    /// v.erase(1, 100)?;
    /// assert_eq!(v.as_slice(), &[1.0]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn erase(&mut self, pos: usize, count: usize) -> Result<()> {
        if self.size == 0 {
            return Ok(());
        }
        self.check_pos("erase", pos)?;

        let count = count.min(self.size - pos);
        self.data.copy_within(pos + count..self.size, pos);
        self.size -= count;
        Ok(())
    }

    /// Removes the elements in `[begin, end)`.
    ///
    /// Does nothing on an empty vector. `end` is clamped to `size`; a range
    /// with `end <= begin` removes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `begin > size` on a non-empty
    /// vector.
    pub fn erase_between(&mut self, begin: usize, end: usize) -> Result<()> {
        if self.size == 0 {
            return Ok(());
        }
        self.check_pos("erase_between", begin)?;

        let end = end.min(self.size);
        self.erase(begin, end.saturating_sub(begin))
    }

    #[inline]
    fn check_pos(&self, op: &'static str, pos: usize) -> Result<()> {
        if pos > self.size {
            return Err(VectorError::out_of_range(op, pos, self.size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_from_zero_factor() {
        let mut v = Vector::from_slice(&[], 0.0);
        for i in 0..5 {
            v.push_back(i as f64);
        }
        assert_eq!(v.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(v.capacity() >= 5);
    }

    #[test]
    fn test_push_back_doubles_capacity() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
        v.push_back(4.0);
        assert_eq!(v.capacity(), 6);
        v.push_back(5.0);
        v.push_back(6.0);
        v.push_back(7.0);
        assert_eq!(v.capacity(), 12);
        assert_eq!(v.stats().reallocations, 2);
    }

    #[test]
    fn test_moved_from_growth_is_geometric() {
        let mut a = Vector::from_slice(&[1.0, 2.0], 2.0);
        let _b = a.take();
        for i in 0..1000 {
            a.push_back(i as f64);
        }
        // 1, 2, 3, 4, 6, 9, ..., 711, 1066
        assert_eq!(a.stats().reallocations, 18);
        assert_eq!(a.capacity(), 1066);
    }

    #[test]
    fn test_unit_factor_growth_is_geometric() {
        let mut v = Vector::from_slice(&[], 1.0);
        for i in 0..1000 {
            v.push_back(i as f64);
        }
        assert_eq!(v.stats().reallocations, 18);
        assert_eq!(v.size(), 1000);
    }

    #[test]
    fn test_push_front_on_moved_from() {
        let mut a = Vector::from_slice(&[1.0], 2.0);
        let _b = a.take();
        a.push_front(2.0);
        a.push_front(1.0);
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_insert_at_ends() {
        let mut v = Vector::from_slice(&[2.0], 2.0);
        v.insert(1.0, 0).unwrap();
        v.insert(3.0, 2).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v = Vector::new();
        v.insert(1.0, 0).unwrap();
        assert_eq!(v.as_slice(), &[1.0]);
    }

    #[test]
    fn test_insert_out_of_range_leaves_state() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        let err = v.insert(3.0, 3).unwrap_err();
        assert_eq!(err, VectorError::out_of_range("insert", 3, 2));
        assert_eq!(v.size(), 2);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_slice_at_front_and_back() {
        let mut v = Vector::from_slice(&[3.0], 2.0);
        v.insert_slice(&[1.0, 2.0], 0).unwrap();
        v.insert_slice(&[4.0, 5.0], 3).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_insert_empty_slice_is_noop() {
        let mut v = Vector::from_slice(&[1.0], 2.0);
        v.insert_slice(&[], 1).unwrap();
        assert_eq!(v.capacity(), 1);
        assert!(v.insert_slice(&[], 2).is_err());
    }

    #[test]
    fn test_insert_vector_mid() {
        let mut v = Vector::from_slice(&[1.0, 4.0], 2.0);
        let other = Vector::from_slice(&[2.0, 3.0], 2.0);
        v.insert_vector(&other, 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(other.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_pop_back_leaves_slot() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        assert_eq!(v.pop_back().unwrap(), 2.0);
        assert_eq!(v.size(), 1);
        assert_eq!(v.data[1], 2.0);
    }

    #[test]
    fn test_pop_on_empty() {
        let mut v = Vector::new();
        assert!(v.pop_back().unwrap_err().is_out_of_range());
        assert!(v.pop_front().unwrap_err().is_out_of_range());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_erase_clamps_count() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
        v.erase(1, usize::MAX).unwrap();
        assert_eq!(v.as_slice(), &[1.0]);
    }

    #[test]
    fn test_erase_at_size_removes_nothing() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        v.erase(2, 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        assert!(v.erase(3, 1).is_err());
    }

    #[test]
    fn test_erase_on_empty_ignores_position() {
        let mut v = Vector::new();
        v.erase(10, 3).unwrap();
        v.erase_between(10, 20).unwrap();
    }

    #[test]
    fn test_erase_between() {
        let mut v = Vector::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0], 2.0);
        v.erase_between(1, 3).unwrap();
        assert_eq!(v.as_slice(), &[0.0, 3.0, 4.0]);

        v.erase_between(1, 99).unwrap();
        assert_eq!(v.as_slice(), &[0.0]);

        v.erase_between(1, 0).unwrap();
        assert_eq!(v.as_slice(), &[0.0]);
        assert!(v.erase_between(2, 3).is_err());
    }
}
