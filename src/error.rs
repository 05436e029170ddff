// src/error.rs
//! Error types for vector operations with conversion support

use std::fmt;

/// Errors that can occur during vector operations
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Position exceeds the logical size, or pop on an empty vector
    OutOfRange {
        /// Name of the rejected operation
        op: &'static str,
        /// Requested position
        pos: usize,
        /// Logical size at the time of the call
        size: usize,
    },
    /// Operation is undefined for the current state (e.g. zero capacity)
    DegenerateState(&'static str),
    /// Growth factor is negative, NaN or infinite
    InvalidGrowthFactor(f64),
}

impl VectorError {
    pub(crate) fn out_of_range(op: &'static str, pos: usize, size: usize) -> Self {
        Self::OutOfRange { op, pos, size }
    }

    /// Returns `true` for the out-of-range condition.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { op, pos, size } => {
                write!(f, "{}: position {} out of range for size {}", op, pos, size)
            }
            Self::DegenerateState(msg) => write!(f, "Degenerate state: {}", msg),
            Self::InvalidGrowthFactor(factor) => write!(f, "Invalid growth factor: {}", factor),
        }
    }
}

impl std::error::Error for VectorError {}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert VectorError to std::io::Error
impl From<VectorError> for std::io::Error {
    fn from(err: VectorError) -> Self {
        use std::io::ErrorKind;
        match err {
            VectorError::OutOfRange { .. } | VectorError::InvalidGrowthFactor(_) => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            VectorError::DegenerateState(_) => std::io::Error::other(err),
        }
    }
}

/// Convert VectorError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<VectorError> for anyhow::Error {
    fn from(err: VectorError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for vector operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`growvec::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, VectorError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

// ============================================================================
// HELPER MACROS
// ============================================================================

/// Converts the error of a vector operation into another error type.
///
/// The two-argument form names the target type explicitly, which is required
/// for error types with overlapping `From` impls such as `anyhow::Error`.
///
/// # Example
/// ```
/// use growvec::prelude::*;
/// use growvec::vector_op;
///
/// fn handler() -> std::io::Result<()> {
///     let mut v = Vector::from_slice(&[1.0, 2.0], 2.0);
///     vector_op!(v.insert(3.0, 2))?;
///     Ok(())
/// }
/// # handler().unwrap();
/// ```
#[macro_export]
macro_rules! vector_op {
    ($expr:expr, $target:ty) => {
        $expr.map_err(|e: $crate::VectorError| -> $target { e.into() })
    };
    ($expr:expr) => {
        $expr.map_err(|e: $crate::VectorError| -> std::io::Error { e.into() })
    };
}

/// Try a vector operation with automatic error conversion
#[macro_export]
macro_rules! vector_try {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => return Err(e.into()),
        }
    };
}
