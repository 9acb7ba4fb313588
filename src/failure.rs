// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure model: what a violated precondition reports.
//!
//! A [`Failure`] is an immutable record built at the exact moment a guard
//! detects a bad argument or an invalid state. It carries everything needed
//! to diagnose the violation without a backtrace:
//!
//! | Field       | Meaning                                           |
//! |-------------|---------------------------------------------------|
//! | `kind`      | Which precondition family was violated            |
//! | `message`   | Human-readable description of the rule            |
//! | `parameter` | Offending parameter name (argument kinds only)    |
//! | `site`      | File, member, and line of the guard *call site*   |
//!
//! The taxonomy is closed: four kinds, nothing else. Operation-state
//! violations (`InvalidOperation`) carry no parameter name because there is
//! no offending argument, only an offending state.
//!
//! The call site always identifies the caller's code, never a frame inside
//! this crate. Guards take a [`CallSite`] explicitly; the companion macros
//! (`call_site!` and the per-guard forms) populate it from
//! `file!()`/`line!()` and the enclosing function path, which expand in the
//! caller's source by construction.

use serde::Serialize;
use std::fmt;

/// Which precondition family was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// A required reference argument was null (`None`).
    NullArgument,
    /// An argument was present but malformed (empty text, empty or
    /// null-holding collection).
    InvalidArgument,
    /// A numeric argument fell outside its inclusive range.
    OutOfRangeArgument,
    /// The operation itself is not valid in the current state.
    InvalidOperation,
}

impl FailureKind {
    /// Stable name of the kind, as it appears in rendered failures.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NullArgument => "NullArgument",
            FailureKind::InvalidArgument => "InvalidArgument",
            FailureKind::OutOfRangeArgument => "OutOfRangeArgument",
            FailureKind::InvalidOperation => "InvalidOperation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a guard invocation inside the caller's code.
///
/// `file` and `line` come from `file!()`/`line!()`; `member` is the path of
/// the enclosing function. All three are `'static` because they are baked in
/// at compile time, so a `CallSite` is two pointers and an integer - cheap
/// enough to build unconditionally on every guard call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// Source file containing the guard call.
    pub file: &'static str,
    /// Path of the function or method that invoked the guard.
    pub member: &'static str,
    /// Line number of the guard call within `file`.
    pub line: u32,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.member, self.file, self.line)
    }
}

/// An immutable record of one violated precondition.
///
/// Fields are private; once constructed a failure can only be read. Every
/// constructor is total - building a `Failure` cannot itself fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    parameter: Option<String>,
    site: CallSite,
}

impl Failure {
    /// A required reference argument was null.
    pub fn null_argument(parameter: impl Into<String>, site: CallSite) -> Self {
        Failure {
            kind: FailureKind::NullArgument,
            message: String::from("Parameter cannot be null."),
            parameter: Some(parameter.into()),
            site,
        }
    }

    /// An argument was present but structurally invalid.
    pub fn invalid_argument(
        parameter: impl Into<String>,
        message: impl Into<String>,
        site: CallSite,
    ) -> Self {
        Failure {
            kind: FailureKind::InvalidArgument,
            message: message.into(),
            parameter: Some(parameter.into()),
            site,
        }
    }

    /// A numeric argument fell outside its inclusive range.
    pub fn out_of_range(
        parameter: impl Into<String>,
        message: impl Into<String>,
        site: CallSite,
    ) -> Self {
        Failure {
            kind: FailureKind::OutOfRangeArgument,
            message: message.into(),
            parameter: Some(parameter.into()),
            site,
        }
    }

    /// The operation is not valid in the current state. No parameter name:
    /// the violation belongs to the operation, not to an argument.
    pub fn invalid_operation(message: impl Into<String>, site: CallSite) -> Self {
        Failure {
            kind: FailureKind::InvalidOperation,
            message: message.into(),
            parameter: None,
            site,
        }
    }

    /// Which precondition family was violated.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Human-readable description of the violated rule.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the offending parameter, when the failure concerns one.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Location of the guard call inside the caller's code.
    pub fn site(&self) -> CallSite {
        self.site
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(parameter) = &self.parameter {
            write!(f, " (parameter '{}')", parameter)?;
        }
        write!(f, " at {}", self.site)
    }
}

impl std::error::Error for Failure {}
