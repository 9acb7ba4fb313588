// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for requisite guard predicates.
//!
//! This standalone crate extracts the pure decision predicates behind the
//! guards and provides mathematical proofs of their correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the predicates never panic for any input
//! 2. **Interval semantics**: `within_range` accepts exactly `[min, max]`
//! 3. **Inclusive bounds**: both endpoints always pass
//! 4. **Vacuous truth**: the empty collection never has a null element

// ============================================================================
// GUARD PREDICATES (copied from src/requires.rs decision logic)
// ============================================================================

/// Range membership check, inclusive on both ends.
pub fn within_range(value: i32, min_value: i32, max_value: i32) -> bool {
    !(value < min_value || value > max_value)
}

/// Collection emptiness check used by the not-empty guard.
pub fn is_empty_collection(len: usize) -> bool {
    len == 0
}

/// Null-element scan used by the no-null-elements guard.
pub fn has_null_element(items: &[Option<u32>]) -> bool {
    items.iter().any(Option::is_none)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// within_range never panics and matches the closed interval, for every
    /// (value, min, max) triple including the i32 extremes.
    #[kani::proof]
    fn prove_within_range_is_closed_interval() {
        let value: i32 = kani::any();
        let min_value: i32 = kani::any();
        let max_value: i32 = kani::any();

        let accepted = within_range(value, min_value, max_value);
        assert_eq!(accepted, min_value <= value && value <= max_value);
    }

    /// Both interval endpoints are always accepted when the interval is
    /// non-degenerate.
    #[kani::proof]
    fn prove_bounds_are_inclusive() {
        let min_value: i32 = kani::any();
        let max_value: i32 = kani::any();
        kani::assume(min_value <= max_value);

        assert!(within_range(min_value, min_value, max_value));
        assert!(within_range(max_value, min_value, max_value));
    }

    /// A degenerate interval [x, x] accepts exactly x.
    #[kani::proof]
    fn prove_degenerate_interval() {
        let bound: i32 = kani::any();
        let value: i32 = kani::any();

        assert_eq!(within_range(value, bound, bound), value == bound);
    }

    /// The null-element scan is false for the empty collection (vacuous
    /// truth) and true exactly when some element is None.
    #[kani::proof]
    fn prove_null_scan_matches_contents() {
        let items: [Option<u32>; 4] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= items.len());

        let slice = &items[..len];
        let expected = slice.iter().filter(|item| item.is_none()).count() > 0;
        assert_eq!(has_null_element(slice), expected);

        if len == 0 {
            assert!(!has_null_element(slice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_range_concrete_cases() {
        assert!(within_range(0, 0, 3));
        assert!(within_range(3, 0, 3));
        assert!(!within_range(-1, 0, 3));
        assert!(!within_range(4, 0, 3));
    }

    #[test]
    fn null_scan_concrete_cases() {
        assert!(!has_null_element(&[]));
        assert!(!has_null_element(&[Some(1)]));
        assert!(has_null_element(&[None]));
    }

    #[test]
    fn emptiness_concrete_cases() {
        assert!(is_empty_collection(0));
        assert!(!is_empty_collection(1));
    }
}
