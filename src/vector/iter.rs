// src/vector/iter.rs
//! Cursors and iteration over a vector's logical elements
//!
//! A cursor borrows the vector, so any structural mutation (which may
//! reallocate or shift the buffer) requires the cursor to be dropped first.
//! Advancing past the end is not checked; dereferencing there yields `None`.

use super::core::{ValueType, Vector};
use std::ptr;

/// Read-only cursor over one slot of a vector, or one past the end.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    elems: &'a [ValueType],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Returns the element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&'a ValueType> {
        self.elems.get(self.pos)
    }

    /// Returns the offset of the cursor from the first element.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns `true` at or past the end.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.elems.len()
    }

    /// Moves to the next slot and returns the advanced cursor (`++it`).
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Moves to the next slot and returns the cursor as it was (`it++`).
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.pos += 1;
        previous
    }
}

impl PartialEq for Cursor<'_> {
    /// Cursors are equal when they point at the same slot of the same buffer.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.elems.as_ptr(), other.elems.as_ptr()) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a ValueType;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elems.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

/// Mutable cursor over one slot of a vector.
#[derive(Debug)]
pub struct CursorMut<'a> {
    elems: &'a mut [ValueType],
    pos: usize,
}

impl CursorMut<'_> {
    /// Returns the element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&ValueType> {
        self.elems.get(self.pos)
    }

    /// Returns the element under the cursor mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut ValueType> {
        self.elems.get_mut(self.pos)
    }

    /// Returns the offset of the cursor from the first element.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns `true` at or past the end.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.elems.len()
    }

    /// Moves to the next slot (`++it`).
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }
}

impl Vector {
    /// Returns a cursor at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0], 2.0);
    /// let mut it = v.begin();
    /// let end = v.end();
    ///
    /// let mut sum = 0.0;
    /// while it != end {
    ///     sum += it.get().unwrap();
    ///     it.advance();
    /// }
    /// assert_eq!(sum, 3.0);
    /// ```
    pub fn begin(&self) -> Cursor<'_> {
        Cursor {
            elems: self.as_slice(),
            pos: 0,
        }
    }

    /// Returns a cursor one past the last element.
    pub fn end(&self) -> Cursor<'_> {
        Cursor {
            elems: self.as_slice(),
            pos: self.size,
        }
    }

    /// Returns a mutable cursor at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
    /// let mut it = v.begin_mut();
    /// while let Some(value) = it.get_mut() {
    ///     *value *= 10.0;
    ///     it.advance();
    /// }
    /// assert_eq!(v.as_slice(), &[10.0, 20.0]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut {
            elems: self.as_mut_slice(),
            pos: 0,
        }
    }

    /// Returns an iterator over the logical elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ValueType> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the logical elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ValueType> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a ValueType;
    type IntoIter = std::slice::Iter<'a, ValueType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut ValueType;
    type IntoIter = std::slice::IterMut<'a, ValueType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_equal_on_empty() {
        let v = Vector::new();
        assert_eq!(v.begin(), v.end());
        assert!(v.begin().get().is_none());
    }

    #[test]
    fn test_post_advance_returns_previous() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
        let mut it = v.begin();
        let before = it.post_advance();
        assert_eq!(before.get(), Some(&1.0));
        assert_eq!(it.get(), Some(&2.0));
        assert_ne!(before, it);
    }

    #[test]
    fn test_advance_past_end_is_unchecked() {
        let v = Vector::from_slice(&[1.0], 2.0);
        let mut it = v.begin();
        it.advance().advance().advance();
        assert_eq!(it.offset(), 3);
        assert!(it.is_end());
        assert!(it.get().is_none());
        assert_ne!(it, v.end());
    }

    #[test]
    fn test_cursor_is_iterator() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
        let collected: Vec<f64> = v.begin().copied().collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0]);

        let mut it = v.begin();
        it.advance();
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_cursors_of_different_vectors_differ() {
        let a = Vector::from_slice(&[1.0], 2.0);
        let b = a.clone();
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn test_cursor_sees_only_logical_range() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        v.reserve(10);
        assert_eq!(v.end().offset(), 2);
        assert_eq!(v.begin().count(), 2);
    }

    #[test]
    fn test_cursor_mut() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        {
            let mut it = v.begin_mut();
            it.advance();
            *it.get_mut().unwrap() = 5.0;
            it.advance();
            assert!(it.is_end());
            assert!(it.get_mut().is_none());
        }
        assert_eq!(v.as_slice(), &[1.0, 5.0]);
    }

    #[test]
    fn test_for_loops() {
        let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
        for value in &mut v {
            *value += 1.0;
        }
        let mut total = 0.0;
        for value in &v {
            total += value;
        }
        assert_eq!(total, 5.0);
    }
}
