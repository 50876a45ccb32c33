//! # maybe
//!
//! An optional-value container for Rust with a fixed set of combinators for
//! transforming, chaining, defaulting and iterating over a value that may be
//! absent.
//!
//! ## Overview
//!
//! [`Maybe<T>`](control::Maybe) holds either exactly one value
//! (`Present`) or nothing (`Absent`). It provides:
//!
//! - **Construction**: `of` (normalizes `None`), `some`, `none`, `from_option`
//! - **Inspection**: `is_present`, `get`, `to_option`
//! - **Transformation**: `map`, `flat_map`
//! - **Defaulting**: eager `or_else`, lazy `or_else_compute` and `or_else_alternative`
//! - **Iteration**: zero or one element, by value or by reference
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Alternative
//!
//! ## Feature Flags
//!
//! - `control`: The `Maybe` type, its iterators and errors
//! - `typeclass`: Type class traits and their `Maybe` instances
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe::prelude::*;
//!
//! let length = Maybe::some("a")
//!     .flat_map(|s| if s.is_empty() { Maybe::none() } else { Maybe::some(s.len()) })
//!     .or_else(0);
//! assert_eq!(length, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
