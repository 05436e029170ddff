// src/lib.rs
//! # Growable Vector Library
//!
//! A contiguous, resizable container of `f64` values with a configurable
//! growth coefficient.
//!
//! Features:
//! - Amortized O(1) append through multiplicative growth, with a one-slot
//!   floor so degenerate coefficients still make progress
//! - Positional insert/erase that validates before mutating
//! - Wrap-around or strict indexing, selected through [`VectorConfig`]
//! - Non-owning cursors with `begin()`/`end()` semantics
//! - Released buffers are wiped using the `zeroize` crate
//! - Reallocation events reported through the `log` facade

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::missing_safety_doc)]

pub mod config;
pub mod error;
pub mod stats;
pub mod vector;

// Re-export main types
pub use config::{IndexMode, VectorConfig};
pub use error::{Result, ResultExt, VectorError};
pub use stats::VectorStats;
pub use vector::{Cursor, CursorMut, MAX_CAPACITY, MIN_GROWTH, ValueType, Vector};

/// Commonly used imports.
pub mod prelude {
    pub use crate::config::{IndexMode, VectorConfig};
    pub use crate::error::{Result, ResultExt, VectorError};
    pub use crate::stats::VectorStats;
    pub use crate::vector::{Cursor, CursorMut, ValueType, Vector};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_vector() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
        v.push_back(4.0);
        v.push_front(0.0);

        assert_eq!(v.size(), 5);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[4], 4.0);
    }

    #[test]
    fn test_reference_scenario() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);

        v.push_back(4.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        v.insert(10.0, 1).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 10.0, 2.0, 3.0, 4.0]);

        v.erase(0, 2).unwrap();
        assert_eq!(v.as_slice(), &[2.0, 3.0, 4.0]);

        assert_eq!(v.find(3.0), Some(1));
        assert_eq!(v.find(99.0), None);
    }

    #[test]
    fn test_strict_config() {
        let v = Vector::with_config(&[1.0, 2.0], VectorConfig::strict()).unwrap();
        assert_eq!(v.index_mode(), IndexMode::Strict);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    fn test_stats_track_growth() {
        let mut v = Vector::new();
        for i in 0..100 {
            v.push_back(f64::from(i));
        }
        let stats = v.stats();
        assert_eq!(stats.size, 100);
        assert!(stats.capacity >= 100);
        // 2, 4, 8, ..., 128
        assert_eq!(stats.reallocations, 7);
        assert_eq!(stats.capacity, 128);
    }
}
