//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to the value(s) it holds while
//! keeping its shape: a present `Maybe` stays present, an absent one stays
//! absent.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::some("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::none());
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// See the [module documentation](self) for the laws every instance obeys.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Maybe::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// let x: Maybe<String> = Maybe::some("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Maybe::some(5));
    /// assert!(x.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).replace("replaced"), Maybe::some("replaced"));
    /// assert_eq!(Maybe::<i32>::none().replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
