//! Property-based tests using proptest.
//!
//! The guards make universally quantified promises ("for all strings...",
//! "for all in-bounds integers..."); these tests check them against randomly
//! generated inputs instead of hand-picked cases.

mod common;

use common::site;
use proptest::prelude::*;
use requisite::{requires, FailureKind};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strings mixing whitespace and substance, biased toward the blank edge.
fn blankish_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \\t\\n\\rx]{0,8}").unwrap()
}

/// Collections with occasional null elements.
fn nullable_items_strategy() -> impl Strategy<Value = Vec<Option<u32>>> {
    prop::collection::vec(prop::option::of(any::<u32>()), 0..8)
}

// ============================================================================
// GUARD PROPERTIES
// ============================================================================

proptest! {
    /// Property: not_null accepts every present reference.
    #[test]
    fn prop_not_null_accepts_all_present_values(value in any::<u64>()) {
        prop_assert!(requires::not_null(Some(&value), "value", site()).is_ok());
    }

    /// Property: not_empty fails exactly when the text trims to nothing.
    #[test]
    fn prop_not_empty_matches_blankness(text in blankish_strategy()) {
        let result = requires::not_empty(Some(&text), "text", site());
        prop_assert_eq!(result.is_ok(), !text.trim().is_empty());
    }

    /// Property: in_range accepts exactly the closed interval [lo, hi].
    #[test]
    fn prop_in_range_is_the_closed_interval(
        value in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let result = requires::in_range(value, lo, hi, "value", site());
        let inside = lo <= value && value <= hi;
        prop_assert_eq!(result.is_ok(), inside);

        if !inside {
            let failure = result.unwrap_err();
            prop_assert_eq!(failure.kind(), FailureKind::OutOfRangeArgument);
            prop_assert_eq!(
                failure.message(),
                format!("Parameter must be in range {} - {}.", lo, hi)
            );
        }
    }

    /// Property: both bounds of the interval always pass.
    #[test]
    fn prop_in_range_bounds_always_pass(a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(requires::in_range(lo, lo, hi, "value", site()).is_ok());
        prop_assert!(requires::in_range(hi, lo, hi, "value", site()).is_ok());
    }

    /// Property: ensure mirrors its condition and keeps the message intact.
    #[test]
    fn prop_ensure_mirrors_condition(flag in any::<bool>(), message in "[a-z ]{0,16}") {
        let result = requires::ensure(flag, message.clone(), site());
        prop_assert_eq!(result.is_ok(), flag);
        if let Err(failure) = result {
            prop_assert_eq!(failure.message(), message);
            prop_assert_eq!(failure.parameter(), None);
        }
    }

    /// Property: not_empty_collection fails exactly on empty input.
    #[test]
    fn prop_not_empty_collection_matches_emptiness(
        items in prop::collection::vec(any::<u32>(), 0..8),
    ) {
        let result = requires::not_empty_collection(Some(&items[..]), "items", site());
        prop_assert_eq!(result.is_ok(), !items.is_empty());
    }

    /// Property: no_null_elements fails exactly when some element is None.
    /// The empty collection passes vacuously.
    #[test]
    fn prop_no_null_elements_matches_contents(items in nullable_items_strategy()) {
        let result = requires::no_null_elements(&items, "items", site());
        let has_null = items.iter().any(Option::is_none);
        prop_assert_eq!(result.is_ok(), !has_null);
    }

    /// Property: guards are pure - repeating a call gives the same outcome.
    #[test]
    fn prop_guards_are_stateless(value in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let first = requires::in_range(value, lo, hi, "value", site());
        let second = requires::in_range(value, lo, hi, "value", site());
        prop_assert_eq!(first, second);
    }
}
