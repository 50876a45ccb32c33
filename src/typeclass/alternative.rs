//! Alternative type class - choice between applicative computations.
//!
//! `Alternative` gives an `Applicative` an empty value and an associative
//! choice operation. For `Maybe`, `empty` is `Absent` and `alt` keeps the
//! first present value. `alt` takes its fallback already evaluated; use
//! `Maybe::or_else_alternative` to build the fallback lazily.
//!
//! # Laws
//!
//! ```text
//! empty.alt(x) == x                           // left identity
//! x.alt(empty) == x                           // right identity
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))        // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::{Alternative, Functor};
//!
//! let first: Maybe<i32> = Maybe::none();
//! assert_eq!(first.alt(Maybe::some(42)), Maybe::some(42));
//!
//! fn filter_positive(n: i32) -> Maybe<i32> {
//!     <Maybe<()>>::guard(n > 0).fmap(move |_| n)
//! }
//! assert_eq!(filter_positive(5), Maybe::some(5));
//! assert_eq!(filter_positive(-3), Maybe::none());
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for applicative functors with a monoid structure.
pub trait Alternative: Applicative {
    /// Returns the empty value of the alternative.
    fn empty<A>() -> Self::WithType<A>;

    /// Chooses between `self` and `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds, otherwise returns `empty`.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Returns the first non-empty alternative, or `empty` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Alternative;
    ///
    /// let candidates = vec![Maybe::none(), Maybe::some(2), Maybe::some(3)];
    /// assert_eq!(Maybe::choice(candidates), Maybe::some(2));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::Absent
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or_else_alternative(|| alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_present)
            .unwrap_or(Self::Absent)
    }
}
