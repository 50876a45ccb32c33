//! Error types for absent-value access.
//!
//! `Maybe::get` is the only operation on a `Maybe` that can fail. When it is
//! called on an absent container it returns an [`AbsentValueError`]
//! describing where the access happened and which type was expected.

/// Represents an attempt to read the value out of an absent `Maybe`.
///
/// This error is recoverable: callers are expected to check
/// `is_present` first, or to prefer the non-failing combinators
/// (`map`, `flat_map`, `or_else`, `or_else_compute`, iteration).
///
/// # Examples
///
/// ```rust
/// use maybe::control::{AbsentValueError, Maybe};
///
/// let error = Maybe::<i32>::none().get().unwrap_err();
/// assert_eq!(error, AbsentValueError::new::<i32>("get"));
/// assert_eq!(
///     format!("{}", error),
///     "Maybe::get: absent value accessed (expected a value of type i32)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentValueError {
    /// The name of the method that accessed the absent value.
    pub method_name: &'static str,
    /// The name of the wrapped type the caller expected.
    pub type_name: &'static str,
}

impl AbsentValueError {
    /// Creates an error for an access to an absent `Maybe<T>` through `method_name`.
    #[inline]
    #[must_use]
    pub fn new<T>(method_name: &'static str) -> Self {
        Self {
            method_name,
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Maybe::{}: absent value accessed (expected a value of type {})",
            self.method_name, self.type_name
        )
    }
}

impl std::error::Error for AbsentValueError {}
