//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::failure::{CallSite, Failure, FailureKind};

/// Fixed call site used where a test only cares about the check itself.
pub const TEST_SITE: CallSite = CallSite {
    file: "tests/fixture.rs",
    member: "fixture::case",
    line: 1,
};

/// The canonical call site for guard tests.
pub fn site() -> CallSite {
    TEST_SITE
}

/// Asserts that a guard failed with the expected kind and hands back the
/// failure for further field assertions.
///
/// # Panics
/// Panics if the guard passed or failed with a different kind.
pub fn expect_failure(result: Result<(), Failure>, kind: FailureKind) -> Failure {
    match result {
        Ok(()) => panic!("expected {} failure, but the guard passed", kind),
        Err(failure) => {
            assert_eq!(
                failure.kind(),
                kind,
                "guard failed with {} instead of {}",
                failure.kind(),
                kind
            );
            failure
        }
    }
}
