// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Macros that capture the guard call site automatically.
//!
//! The guard functions in [`crate::requires`] take a [`CallSite`] so the
//! failure they build points at the caller's code. Passing it by hand is
//! portable but noisy; these macros expand *inside the caller's function*,
//! where `file!()`, `line!()`, and the enclosing function path are all
//! available, and forward to the matching guard with the location filled in.
//!
//! Each guard macro early-returns on violation (the shape of
//! `anyhow::ensure!`), so the enclosing function must return a `Result` whose
//! error type is `From<Failure>`:
//!
//! ```
//! use requisite::Failure;
//!
//! fn resize(len: usize, capacity: Option<&usize>) -> Result<(), Failure> {
//!     requisite::not_null!(capacity, "capacity");
//!     requisite::ensure!(len <= *capacity.unwrap(), "len exceeds capacity");
//!     Ok(())
//! }
//!
//! assert!(resize(2, Some(&8)).is_ok());
//! let failure = resize(2, None).unwrap_err();
//! assert!(failure.site().member.ends_with("resize"));
//! ```
//!
//! [`CallSite`]: crate::CallSite

/// Resolves to the path of the enclosing function.
///
/// Works by naming a zero-sized local function and stripping its own segment
/// from `type_name`. Inside a closure the path ends in `{{closure}}`, which
/// is still the most precise name the compiler has for that scope.
#[doc(hidden)]
#[macro_export]
macro_rules! __caller_member {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(__here);
        &name[..name.len() - "::__here".len()]
    }};
}

/// Builds a [`CallSite`](crate::CallSite) for the current source location.
///
/// The Rust stand-in for the original runtime-populated caller parameters:
/// expansion happens at the invocation point, so the captured file, member,
/// and line are the caller's by construction.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite {
            file: ::core::file!(),
            member: $crate::__caller_member!(),
            line: ::core::line!(),
        }
    };
}

/// Fail-fast form of [`requires::not_null`](crate::requires::not_null).
#[macro_export]
macro_rules! not_null {
    ($value:expr, $parameter:expr) => {
        $crate::requires::not_null($value, $parameter, $crate::call_site!())?
    };
}

/// Fail-fast form of [`requires::not_empty`](crate::requires::not_empty).
#[macro_export]
macro_rules! not_empty {
    ($value:expr, $parameter:expr) => {
        $crate::requires::not_empty($value, $parameter, $crate::call_site!())?
    };
}

/// Fail-fast form of [`requires::in_range`](crate::requires::in_range).
#[macro_export]
macro_rules! in_range {
    ($value:expr, $min:expr, $max:expr, $parameter:expr) => {
        $crate::requires::in_range($value, $min, $max, $parameter, $crate::call_site!())?
    };
}

/// Fail-fast form of [`requires::ensure`](crate::requires::ensure).
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $message:expr) => {
        $crate::requires::ensure($condition, $message, $crate::call_site!())?
    };
}

/// Fail-fast form of
/// [`requires::not_empty_collection`](crate::requires::not_empty_collection).
#[macro_export]
macro_rules! not_empty_collection {
    ($collection:expr, $parameter:expr) => {
        $crate::requires::not_empty_collection($collection, $parameter, $crate::call_site!())?
    };
}

/// Fail-fast form of
/// [`requires::no_null_elements`](crate::requires::no_null_elements).
#[macro_export]
macro_rules! no_null_elements {
    ($collection:expr, $parameter:expr) => {
        $crate::requires::no_null_elements($collection, $parameter, $crate::call_site!())?
    };
}

/// Raises an invalid-operation failure unconditionally.
///
/// Marks a code path the program logic should never reach. Expands to an
/// early `return Err(..)` (the shape of `anyhow::bail!`), so code after it is
/// unreachable.
#[macro_export]
macro_rules! invalid_operation {
    ($message:expr) => {
        return ::core::result::Result::Err(
            $crate::requires::invalid_operation($message, $crate::call_site!()).into(),
        )
    };
}

/// Fail-fast form of [`requires::not_disposed`](crate::requires::not_disposed).
#[macro_export]
macro_rules! not_disposed {
    ($disposed:expr) => {
        $crate::requires::not_disposed($disposed, $crate::call_site!())?
    };
}
