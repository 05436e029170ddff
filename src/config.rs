// src/config.rs
//! Configuration for vector growth and indexing behavior

use crate::error::{Result, VectorError};

/// How `vector[idx]` treats indices at or past the logical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// The index is reduced modulo the logical size, so any index is accepted.
    #[default]
    Wrap,
    /// Indices `>= size` panic, like slice indexing.
    Strict,
}

/// Configuration for a [`Vector`](crate::Vector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Multiplier applied to the capacity when the buffer is full
    pub growth_factor: f64,
    /// Behavior of `Index`/`IndexMut`
    pub index_mode: IndexMode,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            growth_factor: 2.0,
            index_mode: IndexMode::Wrap,
        }
    }
}

impl VectorConfig {
    /// Slower growth for memory-constrained callers.
    pub fn compact() -> Self {
        Self {
            growth_factor: 1.5,
            ..Self::default()
        }
    }

    /// Fewer reallocations at the cost of more spare capacity.
    pub fn aggressive() -> Self {
        Self {
            growth_factor: 4.0,
            ..Self::default()
        }
    }

    /// Default growth with bounds-checked indexing.
    pub fn strict() -> Self {
        Self {
            index_mode: IndexMode::Strict,
            ..Self::default()
        }
    }

    /// Checks that the growth factor is finite and non-negative.
    ///
    /// A factor of zero is accepted: growth from an empty buffer is floored
    /// to one slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use growvec::VectorConfig;
    ///
    /// assert!(VectorConfig::default().validate().is_ok());
    ///
    /// let bad = VectorConfig { growth_factor: f64::NAN, ..VectorConfig::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.growth_factor.is_finite() || self.growth_factor < 0.0 {
            return Err(VectorError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }
}
