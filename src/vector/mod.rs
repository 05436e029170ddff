// src/vector/mod.rs
//! Growable contiguous vector

pub mod core;
pub mod iter;
pub(crate) mod ops;
pub(crate) mod unsafe_ops;

pub use self::core::{MAX_CAPACITY, MIN_GROWTH, ValueType, Vector};
pub use self::iter::{Cursor, CursorMut};
