// src/stats.rs
//! Capacity statistics for vectors.

/// Snapshot of a vector's storage state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorStats {
    /// Number of logically present elements
    pub size: usize,
    /// Number of allocated slots
    pub capacity: usize,
    /// Growth coefficient in effect
    pub growth_factor: f64,
    /// Number of buffer reallocations since construction
    pub reallocations: usize,
}

impl VectorStats {
    /// Returns the fraction of allocated slots in use (0.0-1.0).
    ///
    /// Unlike [`Vector::load_factor`](crate::Vector::load_factor), an empty
    /// buffer reports `0.0` instead of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::prelude::*;
    ///
    /// let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
    /// v.reserve(8);
    ///
    /// let stats = v.stats();
    /// assert_eq!(stats.load_factor(), 0.25);
    /// assert_eq!(stats.reallocations, 1);
    /// ```
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.size as f64 / self.capacity as f64
    }

    /// Returns the number of slots available before the next reallocation.
    pub fn spare(&self) -> usize {
        self.capacity.saturating_sub(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = VectorStats {
            size: 0,
            capacity: 0,
            growth_factor: 2.0,
            reallocations: 0,
        };
        assert_eq!(stats.load_factor(), 0.0);
        assert_eq!(stats.spare(), 0);
    }

    #[test]
    fn test_spare() {
        let stats = VectorStats {
            size: 3,
            capacity: 8,
            growth_factor: 2.0,
            reallocations: 2,
        };
        assert_eq!(stats.spare(), 5);
        assert_eq!(stats.load_factor(), 0.375);
    }
}
