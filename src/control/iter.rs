//! Iterators over the value of a `Maybe`.
//!
//! A `Maybe` is a sequence of at most one element. [`Iter`] borrows the
//! value and [`IntoIter`] takes it by value. Both are exact-size and fused:
//! once exhausted, `next` keeps returning `None`. A new iterator can always
//! be requested from the container, which is never changed by iteration.

use std::iter::FusedIterator;

use super::maybe::Maybe;

/// An iterator over a reference to the value of a [`Maybe`].
///
/// Created by [`Maybe::iter`] or by iterating over `&Maybe<T>`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    element: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) const fn new(element: Option<&'a T>) -> Self {
        Self { element }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.element.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.element.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.element.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator that moves the value out of a [`Maybe`].
///
/// Created by the `into_iter` method on [`Maybe`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    element: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.element.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.element.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.element.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns a consuming iterator yielding the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let values: Vec<String> = Maybe::some("a".to_string()).into_iter().collect();
    /// assert_eq!(values, vec!["a".to_string()]);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            element: self.to_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
