//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value
//! into the container, and `map2`, which combines two containers. For
//! `Maybe`, combining succeeds only when every input is present.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                          // identity
//! pure(f).apply(pure(x)) == pure(f(x))               // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)        // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! let sum = Maybe::some(1).map2(Maybe::some(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::some(3));
//! ```

use super::functor::Functor;
use crate::control::Maybe;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::pure("hello");
    /// assert_eq!(x, Maybe::some("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(Maybe::some(1).map2(missing, |x, y| x + y), Maybe::none());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::some(1).product(Maybe::some("a")), Maybe::some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
