//! Control structures for values that may be absent.
//!
//! This module provides:
//!
//! - [`Maybe`]: A container holding exactly one value or none
//! - [`Iter`] / [`IntoIter`]: Iterators yielding zero or one element
//! - [`AbsentValueError`]: The error returned when an absent value is accessed
//!
//! # Examples
//!
//! ## Lazy Defaulting
//!
//! ```rust
//! use maybe::control::Maybe;
//!
//! let mut calls = 0;
//! let value = Maybe::some(42).or_else_compute(|| {
//!     calls += 1;
//!     0
//! });
//! assert_eq!(value, 42);
//! assert_eq!(calls, 0);
//! ```
//!
//! ## Iteration
//!
//! ```rust
//! use maybe::control::Maybe;
//!
//! let collected: Vec<i32> = Maybe::some(1).into_iter().collect();
//! assert_eq!(collected, vec![1]);
//!
//! let collected: Vec<i32> = Maybe::<i32>::none().into_iter().collect();
//! assert!(collected.is_empty());
//! ```

mod error;
mod iter;
mod maybe;

pub use error::AbsentValueError;
pub use iter::{IntoIter, Iter};
pub use maybe::Maybe;
