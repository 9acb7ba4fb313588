// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precondition guards for arguments and operation state.
//!
//! Every guard has the same shape: pure inspection, no side effects on
//! success, a single [`Failure`] on violation. Evaluation is eager and
//! synchronous - the whole point is to fail at the call site, before the
//! operation touches anything.
//!
//! | Guard                  | Checks                                   | Failure kind       |
//! |------------------------|------------------------------------------|--------------------|
//! | [`not_null`]           | reference is present                     | NullArgument       |
//! | [`not_empty`]          | text has a non-whitespace character      | InvalidArgument    |
//! | [`in_range`]           | `min <= value <= max` (inclusive)        | OutOfRangeArgument |
//! | [`ensure`]             | arbitrary boolean invariant              | InvalidOperation   |
//! | [`not_empty_collection`]| collection present with >= 1 element    | InvalidArgument    |
//! | [`no_null_elements`]   | no element is `None`                     | InvalidArgument    |
//! | [`invalid_operation`]  | nothing - marks an invalid path          | InvalidOperation   |
//! | [`not_disposed`]       | object has not been disposed             | InvalidOperation   |
//!
//! Guards take the [`CallSite`] explicitly so the reported location is the
//! caller's, never a frame in here. Prefer the crate-root macros
//! (`not_null!`, `ensure!`, ...) which capture it for you:
//!
//! ```
//! fn submit(batch: Option<&[u32]>) -> Result<(), requisite::Failure> {
//!     requisite::not_empty_collection!(batch, "batch");
//!     Ok(())
//! }
//!
//! let failure = submit(Some(&[])).unwrap_err();
//! assert_eq!(failure.message(), "Collection cannot be null or empty.");
//! ```

use crate::failure::{CallSite, Failure};
use std::fmt;

// ============================================================================
// ARGUMENT GUARDS
// ============================================================================

/// Ensures the value is not null.
///
/// # Errors
/// [`FailureKind::NullArgument`](crate::FailureKind::NullArgument) if `value`
/// is `None`.
#[inline]
pub fn not_null<T: ?Sized>(
    value: Option<&T>,
    parameter: &str,
    site: CallSite,
) -> Result<(), Failure> {
    match value {
        Some(_) => Ok(()),
        None => Err(Failure::null_argument(parameter, site)),
    }
}

/// Ensures the text is present and contains at least one non-whitespace
/// character.
///
/// "Not blank" semantics, not merely "not zero-length": a string of spaces
/// fails just like `""` or `None` does.
///
/// # Errors
/// [`FailureKind::InvalidArgument`](crate::FailureKind::InvalidArgument) if
/// `value` is `None`, empty, or whitespace-only.
#[inline]
pub fn not_empty(value: Option<&str>, parameter: &str, site: CallSite) -> Result<(), Failure> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(Failure::invalid_argument(
            parameter,
            "Parameter cannot be empty or whitespace.",
            site,
        )),
    }
}

/// Ensures the value lies within `[min_value, max_value]`, both ends
/// inclusive. A value equal to either bound passes.
///
/// # Errors
/// [`FailureKind::OutOfRangeArgument`](crate::FailureKind::OutOfRangeArgument)
/// if `value < min_value` or `value > max_value`. The message carries the
/// bounds so the failure is readable without the call site.
#[inline]
pub fn in_range<T>(
    value: T,
    min_value: T,
    max_value: T,
    parameter: &str,
    site: CallSite,
) -> Result<(), Failure>
where
    T: PartialOrd + fmt::Display,
{
    if value < min_value || value > max_value {
        return Err(Failure::out_of_range(
            parameter,
            format!("Parameter must be in range {} - {}.", min_value, max_value),
            site,
        ));
    }
    Ok(())
}

// ============================================================================
// COLLECTION GUARDS
// ============================================================================

/// Ensures the collection is present and holds at least one element.
///
/// The null check comes first, so a `None` collection short-circuits without
/// any element access.
///
/// # Errors
/// [`FailureKind::InvalidArgument`](crate::FailureKind::InvalidArgument) if
/// `collection` is `None` or empty.
#[inline]
pub fn not_empty_collection<T>(
    collection: Option<&[T]>,
    parameter: &str,
    site: CallSite,
) -> Result<(), Failure> {
    match collection {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(Failure::invalid_argument(
            parameter,
            "Collection cannot be null or empty.",
            site,
        )),
    }
}

/// Ensures no element of the collection is null.
///
/// An empty collection passes vacuously: there is no element to violate the
/// condition.
///
/// # Errors
/// [`FailureKind::InvalidArgument`](crate::FailureKind::InvalidArgument) if
/// any element is `None`.
#[inline]
pub fn no_null_elements<T>(
    collection: &[Option<T>],
    parameter: &str,
    site: CallSite,
) -> Result<(), Failure> {
    if collection.iter().any(Option::is_none) {
        return Err(Failure::invalid_argument(
            parameter,
            "Collection cannot contain null elements.",
            site,
        ));
    }
    Ok(())
}

// ============================================================================
// OPERATION-STATE GUARDS
// ============================================================================

/// Ensures an arbitrary invariant holds, with a caller-supplied message.
///
/// The message is carried verbatim; there is no parameter name because the
/// violation belongs to the operation's state, not to one argument.
///
/// # Errors
/// [`FailureKind::InvalidOperation`](crate::FailureKind::InvalidOperation) if
/// `condition` is false.
#[inline]
pub fn ensure(
    condition: bool,
    message: impl Into<String>,
    site: CallSite,
) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::invalid_operation(message, site))
    }
}

/// Builds the failure for a code path that should never be reached.
///
/// Unlike the other guards this has no precondition to satisfy - it exists to
/// mark invalid paths explicitly. It returns the [`Failure`] for the caller to
/// raise; the `invalid_operation!` macro wraps that in an immediate
/// early return.
#[inline]
#[must_use]
pub fn invalid_operation(message: impl Into<String>, site: CallSite) -> Failure {
    Failure::invalid_operation(message, site)
}

/// Ensures the object has not been disposed.
///
/// `disposed` is the caller's own teardown flag; passing `true` means the
/// object's resources are already released and the operation must not touch
/// them.
///
/// # Errors
/// [`FailureKind::InvalidOperation`](crate::FailureKind::InvalidOperation) if
/// `disposed` is true.
#[inline]
pub fn not_disposed(disposed: bool, site: CallSite) -> Result<(), Failure> {
    if disposed {
        return Err(Failure::invalid_operation(
            "Cannot access a disposed object.",
            site,
        ));
    }
    Ok(())
}
