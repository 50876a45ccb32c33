//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<T>` type, which holds either exactly one
//! value (`Present(T)`) or no value (`Absent`). It lets code express
//! "this value may be missing" as a type and work with it through
//! combinators instead of presence checks at every call site:
//!
//! - Transformation with `map` and `flat_map`
//! - Defaulting with `or_else` (eager), `or_else_compute` and
//!   `or_else_alternative` (lazy)
//! - Iteration over zero or one element
//!
//! `Maybe` is immutable: every operation returns a new value and never
//! changes the receiver. It is `Send`/`Sync` exactly when `T` is, so
//! sharing a `Maybe` across threads is only as safe as sharing its value.
//!
//! # Examples
//!
//! ```rust
//! use maybe::control::Maybe;
//!
//! // `of` turns `None` into `Absent`
//! let present: Maybe<i32> = Maybe::of(42);
//! let absent: Maybe<i32> = Maybe::of(None);
//! assert!(present.is_present());
//! assert!(!absent.is_present());
//!
//! // Chaining without presence checks
//! let length = Maybe::some("hello")
//!     .map(str::len)
//!     .or_else(0);
//! assert_eq!(length, 5);
//!
//! // Pattern matching
//! match absent {
//!     Maybe::Present(value) => println!("Got {}", value),
//!     Maybe::Absent => println!("Nothing"),
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::AbsentValueError;
use super::iter::Iter;

/// The value fed to a hasher when hashing an absent `Maybe`.
const ABSENT_HASH: u64 = 0;

/// A container holding either exactly one value or no value.
///
/// `Maybe<T>` is a two-case sum type:
/// - `Present(T)` holds one value of type `T`
/// - `Absent` holds nothing and is shared by every `T`
///
/// Two `Present` values are equal when their values are equal. All
/// `Absent` values are equal to each other and never equal to a `Present`.
///
/// # Type Parameters
///
/// * `T` - The type of the value that may be present
///
/// # Examples
///
/// ```rust
/// use maybe::control::Maybe;
///
/// let value: Maybe<i32> = Maybe::some(21);
/// let doubled = value.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Present(42));
///
/// let nothing: Maybe<i32> = Maybe::none();
/// assert_eq!(nothing.map(|x| x * 2), Maybe::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Maybe<T> {
    /// The variant holding exactly one value.
    Present(T),
    /// The variant holding no value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` from a value that may be `None`.
    ///
    /// This is the normalizing entry point: `None` becomes `Absent`, and
    /// anything else (a plain `T` or `Some(T)`) becomes `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let from_value: Maybe<i32> = Maybe::of(42);
    /// assert_eq!(from_value, Maybe::Present(42));
    ///
    /// let from_some: Maybe<i32> = Maybe::of(Some(42));
    /// assert_eq!(from_some, Maybe::Present(42));
    ///
    /// let from_none: Maybe<i32> = Maybe::of(None);
    /// assert_eq!(from_none, Maybe::Absent);
    /// ```
    #[inline]
    pub fn of<V>(value: V) -> Self
    where
        V: Into<Option<T>>,
    {
        Self::from_option(value.into())
    }

    /// Creates a `Present` holding `value`.
    ///
    /// Never produces `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let value = Maybe::some("hello");
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the canonical `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let nothing: Maybe<String> = Maybe::none();
    /// assert!(nothing.is_absent());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Adapts a standard library `Option` into a `Maybe`.
    ///
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::Present(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert!(Maybe::some(42).is_present());
    /// assert!(!Maybe::<i32>::none().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the wrapped value, consuming the `Maybe`.
    ///
    /// This is the exceptional path. Prefer `map`, `flat_map`, `or_else`,
    /// `or_else_compute` or iteration, which cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).get(), Ok(42));
    /// assert!(Maybe::<i32>::none().get().is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError::new::<T>("get")),
        }
    }

    /// Returns the wrapped value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("hello").unwrap(), "hello");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", AbsentValueError::new::<T>("unwrap")),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let text = Maybe::some("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Present(5));
    /// // `text` is still available here
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts the `Maybe` into a standard library `Option`.
    ///
    /// `Present(v)` becomes `Some(v)` and `Absent` becomes `None`, so
    /// `Maybe::from_option(x).to_option() == x` for every `x`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).to_option(), Some(1));
    /// assert_eq!(Maybe::<i32>::none().to_option(), None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns an `Option` borrowing the wrapped value.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Transforms the `Maybe` into a `Result`, using `error` when absent.
    ///
    /// `error` is evaluated eagerly; use [`Maybe::ok_or_else`] when building
    /// it is expensive.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Transforms the `Maybe` into a `Result`, building the error only when absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` if this is `Absent`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error()),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the wrapped value if present.
    ///
    /// If this is `Present(v)`, returns `Present(function(v))`.
    /// If this is `Absent`, returns `Absent` without calling `function`.
    ///
    /// The result is never re-normalized: a function returning `Option<U>`
    /// yields `Maybe<Option<U>>`. Use [`Maybe::flat_map`] when the function
    /// itself may produce an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let value = Maybe::some(21);
    /// assert_eq!(value.map(|x| x * 2), Maybe::Present(42));
    ///
    /// let nothing: Maybe<i32> = Maybe::none();
    /// assert_eq!(nothing.map(|x| x * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a `Maybe`-returning function to the wrapped value if present.
    ///
    /// If this is `Present(v)`, returns `function(v)` as is.
    /// If this is `Absent`, returns `Absent` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let length = Maybe::some("a").flat_map(|s| {
    ///     if s.is_empty() { Maybe::none() } else { Maybe::some(s.len()) }
    /// });
    /// assert_eq!(length.get(), Ok(1));
    ///
    /// let nothing: Maybe<&str> = Maybe::none();
    /// assert!(!nothing.flat_map(|s| Maybe::some(s.len())).is_present());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Defaulting
    // =========================================================================

    /// Returns the wrapped value, or `other` if absent.
    ///
    /// `other` is evaluated by the caller before this call, whether or not
    /// it ends up being used. Use [`Maybe::or_else_compute`] to defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).or_else(0), 1);
    /// assert_eq!(Maybe::none().or_else(0), 0);
    /// ```
    #[inline]
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => other,
        }
    }

    /// Returns the wrapped value, or computes one with `supplier` if absent.
    ///
    /// `supplier` is never called when a value is present, and is called
    /// exactly once when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let value = Maybe::<String>::none().or_else_compute(|| "computed".to_string());
    /// assert_eq!(value, "computed");
    ///
    /// let value = Maybe::some(1).or_else_compute(|| unreachable!());
    /// assert_eq!(value, 1);
    /// ```
    #[inline]
    pub fn or_else_compute<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns `self` if present, otherwise the `Maybe` produced by `supplier`.
    ///
    /// `supplier` is never called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let primary: Maybe<i32> = Maybe::none();
    /// let result = primary.or_else_alternative(|| Maybe::some(2));
    /// assert_eq!(result, Maybe::Present(2));
    ///
    /// let result = Maybe::some(1).or_else_alternative(|| Maybe::some(2));
    /// assert_eq!(result, Maybe::Present(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else_alternative<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `action` with the wrapped value if present.
    ///
    /// `action` runs exactly once when present and never when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::some(1).if_present(|value| seen.push(*value));
    /// Maybe::<i32>::none().if_present(|value| seen.push(*value));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the wrapped value.
    ///
    /// The iterator yields one element if present and none if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let value = Maybe::some(4);
    /// assert_eq!(value.iter().next(), Some(&4));
    ///
    /// let nothing: Maybe<i32> = Maybe::none();
    /// assert_eq!(nothing.iter().next(), None);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_option())
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::Present(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::Absent);
    /// assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => fmt::Display::fmt(value, formatter),
            Self::Absent => formatter.write_str("none"),
        }
    }
}

/// Hashing `Present(v)` is hashing `v`; hashing `Absent` feeds a fixed
/// constant independent of `T`.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Present(value) => value.hash(state),
            Self::Absent => state.write_u64(ABSENT_HASH),
        }
    }
}

impl<T> FromIterator<T> for Maybe<T> {
    /// Collects the first element of the iterator, or `Absent` if it is empty.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_option(iter.into_iter().next())
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Present(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::control::Maybe;
    ///
    /// let option: Option<i32> = Maybe::some(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_option)
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<std::sync::Arc<String>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::cell::Cell<i32>>: Sync);

// `Absent` occupies the niche of the payload.
static_assertions::assert_eq_size!(Maybe<Box<i32>>, Box<i32>);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_of_value_is_present() {
        let value: Maybe<i32> = Maybe::of(42);
        assert!(value.is_present());
        assert_eq!(value.get(), Ok(42));
    }

    #[rstest]
    fn test_of_none_is_absent() {
        let value: Maybe<i32> = Maybe::of(None);
        assert!(!value.is_present());
        assert!(value.is_absent());
    }

    #[rstest]
    fn test_of_nested_option_keeps_inner_none() {
        let value: Maybe<Option<i32>> = Maybe::of(Some(None));
        assert_eq!(value, Maybe::Present(None));
    }

    #[rstest]
    fn test_none_get_fails_with_absent_value_error() {
        let value: Maybe<i32> = Maybe::none();
        assert_eq!(value.get(), Err(AbsentValueError::new::<i32>("get")));
    }

    #[rstest]
    #[should_panic(expected = "Maybe::unwrap: absent value accessed")]
    fn test_unwrap_absent_panics() {
        let value: Maybe<i32> = Maybe::none();
        let _ = value.unwrap();
    }

    #[rstest]
    fn test_map_absent_never_calls_function() {
        let calls = Cell::new(0);
        let value: Maybe<i32> = Maybe::none();
        let result = value.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_else_compute_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            0
        };
        assert_eq!(Maybe::some(5).or_else_compute(supplier), 5);
        assert_eq!(calls.get(), 0);

        assert_eq!(Maybe::none().or_else_compute(supplier), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_or_else_alternative_returns_self_when_present() {
        let calls = Cell::new(0);
        let result = Maybe::some(1).or_else_alternative(|| {
            calls.set(calls.get() + 1);
            Maybe::some(2)
        });
        assert_eq!(result, Maybe::some(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(1), true)]
    #[case(Maybe::some(1), Maybe::some(2), false)]
    #[case(Maybe::none(), Maybe::none(), true)]
    #[case(Maybe::some(1), Maybe::none(), false)]
    #[case(Maybe::some(0), Maybe::none(), false)]
    fn test_equality(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(left == right, expected);
        assert_eq!(right == left, expected);
    }

    #[rstest]
    fn test_hash_of_present_is_hash_of_value() {
        assert_eq!(hash_of(&Maybe::some(42)), hash_of(&42));
        assert_eq!(
            hash_of(&Maybe::some("hello".to_string())),
            hash_of(&"hello".to_string())
        );
    }

    #[rstest]
    fn test_hash_of_absent_is_fixed_across_types() {
        assert_eq!(hash_of(&Maybe::<i32>::none()), hash_of(&Maybe::<String>::none()));
        assert_eq!(hash_of(&Maybe::<i32>::none()), hash_of(&ABSENT_HASH));
    }

    #[rstest]
    #[case(Maybe::some(42), "42")]
    #[case(Maybe::none(), "none")]
    fn test_display(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(format!("{value}"), expected);
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", Maybe::some(1)), "Present(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "Absent");
    }

    #[rstest]
    fn test_default_is_absent() {
        let value: Maybe<String> = Maybe::default();
        assert_eq!(value, Maybe::Absent);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_from_iterator_takes_first_element() {
        let first: Maybe<i32> = vec![3, 4, 5].into_iter().collect();
        assert_eq!(first, Maybe::some(3));

        let empty: Maybe<i32> = Vec::new().into_iter().collect();
        assert_eq!(empty, Maybe::none());
    }
}
