//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) that `Maybe` is an
//! instance of:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Alternative`]: Choosing between containers
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which lets the traits above be written once for any container.
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::{Applicative, Foldable, Functor};
//!
//! let total = Maybe::some(1)
//!     .map2(Maybe::some(2), |a, b| a + b)
//!     .fmap(|sum| sum * 10)
//!     .fold_left(0, |acc, x| acc + x);
//! assert_eq!(total, 30);
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
