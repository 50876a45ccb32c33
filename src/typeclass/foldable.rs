//! Foldable type class - reducing a structure to a summary value.
//!
//! A `Maybe` folds like a sequence of zero or one element: folding a present
//! value applies the function once, folding an absent one returns the
//! initial accumulator untouched.
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//! use maybe::typeclass::Foldable;
//!
//! assert_eq!(Maybe::some(5).fold_left(10, |acc, x| acc + x), 15);
//! assert_eq!(Maybe::<i32>::none().fold_left(10, |acc, x| acc + x), 10);
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;

/// A type class for structures that can be folded to a single value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no elements.
    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    /// use maybe::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::some(1).to_list(), vec![1]);
    /// assert_eq!(Maybe::<i32>::none().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(element) => function(init, element),
            Self::Absent => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(element) => function(element, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }

    #[inline]
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().fold_left(false, |_, element| predicate(element))
    }

    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().fold_left(true, |_, element| predicate(element))
    }
}
