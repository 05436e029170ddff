// src/vector/unsafe_ops.rs
//! Unchecked (unsafe) vector operations

use super::core::{ValueType, Vector};

impl Vector {
    /// Appends `value` without checking for spare capacity.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `self.size() < self.capacity()`.
    #[inline(always)]
    pub unsafe fn push_back_unchecked(&mut self, value: ValueType) {
        debug_assert!(
            self.size < self.capacity(),
            "push_back_unchecked: size {} >= capacity {}",
            self.size,
            self.capacity()
        );

        unsafe { *self.data.get_unchecked_mut(self.size) = value };
        self.size += 1;
    }

    /// Returns the element at `idx` without bounds checking or wrapping.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `idx < self.size()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, idx: usize) -> &ValueType {
        debug_assert!(idx < self.size);

        unsafe { self.data.get_unchecked(idx) }
    }

    /// Returns the element at `idx` mutably without bounds checking or wrapping.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `idx < self.size()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, idx: usize) -> &mut ValueType {
        debug_assert!(idx < self.size);

        unsafe { self.data.get_unchecked_mut(idx) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_unchecked_within_capacity() {
        let mut v = Vector::from_slice(&[1.0], 2.0);
        v.reserve(3);
        unsafe {
            v.push_back_unchecked(2.0);
            v.push_back_unchecked(3.0);
        }
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_get_unchecked() {
        let mut v = Vector::from_slice(&[4.0, 5.0], 2.0);
        unsafe {
            *v.get_unchecked_mut(1) += 1.0;
            assert_eq!(*v.get_unchecked(0), 4.0);
            assert_eq!(*v.get_unchecked(1), 6.0);
        }
    }
}
