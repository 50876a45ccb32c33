//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, where the next step can
//! depend on the value produced by the previous one. For `Maybe`, the chain
//! stops at the first absent step.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::of(s.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Maybe::some("42")
//!     .and_then(parse_positive)
//!     .and_then(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//!
//! assert_eq!(Maybe::some("-1").and_then(parse_positive), Maybe::none());
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Monad;
    ///
    /// let x = Maybe::some(5);
    /// assert_eq!(Monad::flat_map(x, |n| Maybe::some(n * 2)), Maybe::some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent, the absence propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::some(5).then(Maybe::some("hello")), Maybe::some("hello"));
    /// assert_eq!(Maybe::<i32>::none().then(Maybe::some("hello")), Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        // Delegate to the inherent flat_map
        Self::flat_map(self, function)
    }
}
