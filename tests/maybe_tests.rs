//! Unit tests for the Maybe<T> type.
//!
//! Maybe holds either exactly one value or none:
//! - `Present(T)`: Contains a value of type T
//! - `Absent`: Contains nothing
//!
//! These tests cover construction, inspection, transformation, eager and
//! lazy defaulting, side effects and conversions.

#![cfg(feature = "control")]

use maybe::control::{AbsentValueError, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i32::MAX)]
fn of_value_is_present(#[case] value: i32) {
    let maybe: Maybe<i32> = Maybe::of(value);
    assert!(maybe.is_present());
    assert_eq!(maybe.get(), Ok(value));
}

#[rstest]
fn of_none_is_absent() {
    let maybe: Maybe<String> = Maybe::of(None);
    assert!(!maybe.is_present());
}

#[rstest]
fn of_some_is_present() {
    let maybe: Maybe<&str> = Maybe::of(Some("text"));
    assert_eq!(maybe, Maybe::Present("text"));
}

#[rstest]
fn some_never_produces_absent() {
    let maybe = Maybe::some(String::new());
    assert!(maybe.is_present());
    assert_eq!(maybe.get(), Ok(String::new()));
}

#[rstest]
fn none_instances_are_indistinguishable() {
    let first: Maybe<i32> = Maybe::none();
    let second: Maybe<i32> = Maybe::of(None);
    let third: Maybe<i32> = Maybe::from_option(None);
    let fourth: Maybe<i32> = Maybe::default();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(third, fourth);
}

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
fn get_on_present_returns_value() {
    assert_eq!(Maybe::some(3.5).get(), Ok(3.5));
}

#[rstest]
fn get_on_absent_returns_absent_value_error() {
    let error = Maybe::<u64>::none().get().unwrap_err();
    assert_eq!(error.method_name, "get");
    assert_eq!(error.type_name, "u64");
    assert_eq!(error, AbsentValueError::new::<u64>("get"));
}

#[rstest]
fn get_error_propagates_with_question_mark() {
    fn double(value: Maybe<i32>) -> Result<i32, AbsentValueError> {
        Ok(value.get()? * 2)
    }

    assert_eq!(double(Maybe::some(4)), Ok(8));
    assert!(double(Maybe::none()).is_err());
}

#[rstest]
fn as_ref_does_not_consume() {
    let value = Maybe::some(vec![1, 2]);
    let length = value.as_ref().map(Vec::len);
    assert_eq!(length, Maybe::some(2));
    assert_eq!(value.as_option(), Some(&vec![1, 2]));
}

#[rstest]
fn ok_or_lifts_absence_into_error() {
    assert_eq!(Maybe::some(1).ok_or("missing"), Ok(1));
    assert_eq!(Maybe::<i32>::none().ok_or("missing"), Err("missing"));
}

#[rstest]
fn ok_or_else_builds_error_only_when_absent() {
    let calls = Cell::new(0);
    let build_error = || {
        calls.set(calls.get() + 1);
        "missing".to_string()
    };

    assert_eq!(Maybe::some(1).ok_or_else(build_error), Ok(1));
    assert_eq!(calls.get(), 0);

    assert_eq!(
        Maybe::<i32>::none().ok_or_else(build_error),
        Err("missing".to_string())
    );
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_on_present_applies_function() {
    assert_eq!(Maybe::some(4).map(|x| x * x).get(), Ok(16));
}

#[rstest]
fn map_on_absent_never_invokes_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::none().map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(result, Maybe::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_does_not_renormalize_option_results() {
    let result = Maybe::some(1).map(|_| None::<i32>);
    assert_eq!(result, Maybe::Present(None));
}

#[rstest]
fn flat_map_returns_function_result_directly() {
    let result = Maybe::some("a").flat_map(|s| {
        if s.is_empty() {
            Maybe::none()
        } else {
            Maybe::some(s.len())
        }
    });
    assert_eq!(result.get(), Ok(1));
}

#[rstest]
fn flat_map_to_absent() {
    let result = Maybe::some("").flat_map(|s| {
        if s.is_empty() {
            Maybe::none()
        } else {
            Maybe::some(s.len())
        }
    });
    assert!(!result.is_present());
}

#[rstest]
fn flat_map_on_absent_is_absent() {
    let calls = Cell::new(0);
    let result = Maybe::<&str>::none().flat_map(|s| {
        calls.set(calls.get() + 1);
        Maybe::some(s.len())
    });
    assert!(!result.is_present());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
}

// =============================================================================
// Defaulting
// =============================================================================

#[rstest]
fn or_else_returns_value_when_present() {
    assert_eq!(Maybe::some(1).or_else(2), 1);
}

#[rstest]
fn or_else_returns_other_when_absent() {
    assert_eq!(Maybe::none().or_else(2), 2);
}

#[rstest]
fn or_else_argument_is_evaluated_eagerly() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::some(9).or_else(fallback()), 9);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn or_else_compute_never_invokes_supplier_when_present() {
    let calls = Cell::new(0);
    let result = Maybe::some(9).or_else_compute(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(result, 9);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_else_compute_invokes_supplier_once_when_absent() {
    let calls = Cell::new(0);
    let result = Maybe::none().or_else_compute(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(result, 7);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn or_else_alternative_when_absent_returns_supplied_maybe() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::none().or_else_alternative(|| {
        calls.set(calls.get() + 1);
        Maybe::none()
    });
    assert_eq!(result, Maybe::none());
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn or_else_alternative_when_present_returns_self() {
    let result = Maybe::some("primary").or_else_alternative(|| unreachable!());
    assert_eq!(result, Maybe::some("primary"));
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn if_present_runs_action_exactly_once() {
    let calls = Cell::new(0);
    Maybe::some(5).if_present(|value| {
        assert_eq!(*value, 5);
        calls.set(calls.get() + 1);
    });
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn if_present_on_absent_does_nothing() {
    let calls = Cell::new(0);
    Maybe::<i32>::none().if_present(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn iterating_present_yields_single_element() {
    let collected: Vec<i32> = Maybe::some(3).into_iter().collect();
    assert_eq!(collected, vec![3]);
}

#[rstest]
fn iterating_absent_yields_nothing() {
    let collected: Vec<i32> = Maybe::<i32>::none().into_iter().collect();
    assert_eq!(collected, Vec::<i32>::new());
}

#[rstest]
fn iterator_past_exhaustion_returns_none() {
    let mut iterator = Maybe::some(3).into_iter();
    assert_eq!(iterator.next(), Some(3));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);

    let mut iterator = Maybe::<i32>::none().into_iter();
    assert_eq!(iterator.next(), None);
}

#[rstest]
fn iteration_composes_with_iterator_adapters() {
    let values = [Maybe::some(1), Maybe::none(), Maybe::some(3)];
    let present: Vec<i32> = values.iter().flatten().copied().collect();
    assert_eq!(present, vec![1, 3]);
}

// =============================================================================
// Equality and Conversion
// =============================================================================

#[rstest]
fn equality_table() {
    assert!(Maybe::some(1) == Maybe::some(1));
    assert!(Maybe::some(1) != Maybe::some(2));
    assert!(Maybe::<i32>::none() == Maybe::none());
    assert!(Maybe::some(1) != Maybe::none());
}

#[rstest]
fn absent_not_equal_to_present_falsy_values() {
    assert_ne!(Maybe::some(false), Maybe::none());
    assert_ne!(Maybe::some(String::new()), Maybe::none());
    assert_ne!(Maybe::some(0), Maybe::none());
}

#[rstest]
#[case(Some(42))]
#[case(None)]
fn option_roundtrip_is_lossless(#[case] option: Option<i32>) {
    assert_eq!(Maybe::from_option(option).to_option(), option);
    let converted: Option<i32> = Maybe::from(option).into();
    assert_eq!(converted, option);
}

#[rstest]
fn display_uses_value_or_none_literal() {
    assert_eq!(Maybe::some("value").to_string(), "value");
    assert_eq!(Maybe::<&str>::none().to_string(), "none");
    assert_eq!(format!("{:>5}", Maybe::some(42)), "   42");
}
