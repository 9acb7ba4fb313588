//! Fail-fast precondition guards with call-site diagnostics.
//!
//! This crate provides a small set of guard functions for validating
//! arguments and invariants at the top of an operation. A violated guard
//! produces a structured [`Failure`] that names the offending parameter and
//! the exact call site, so a log line is diagnosable without a backtrace.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  failure.rs  │◀────│  requires.rs │◀────│   macros.rs  │
//! │ (Failure,    │     │ (not_null,   │     │ (not_null!,  │
//! │  FailureKind,│     │  in_range,   │     │  ensure!,    │
//! │  CallSite)   │     │  ensure, ..) │     │  call_site!) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Design
//!
//! | Module     | Responsibility                                          |
//! |------------|---------------------------------------------------------|
//! | `failure`  | Immutable failure record: kind, message, parameter, site|
//! | `requires` | The guards: pure checks returning `Result<(), Failure>` |
//! | `macros`   | Call-site capture and fail-fast early returns           |
//!
//! Guards are stateless, synchronous, and reentrant. Nothing is cached,
//! deferred, or logged; a guard either returns `Ok(())` with no observable
//! effect, or hands the caller a single [`Failure`] to propagate with `?`.
//!
//! # Usage
//!
//! ```
//! use requisite::Failure;
//!
//! fn schedule(job: Option<&str>, priority: i32, deps: Option<&[u64]>) -> Result<(), Failure> {
//!     requisite::not_empty!(job, "job");
//!     requisite::in_range!(priority, 0, 7, "priority");
//!     requisite::not_empty_collection!(deps, "deps");
//!     Ok(())
//! }
//!
//! assert!(schedule(Some("compact"), 3, Some(&[41, 42])).is_ok());
//!
//! let failure = schedule(Some("compact"), 9, Some(&[41])).unwrap_err();
//! assert_eq!(failure.parameter(), Some("priority"));
//! assert_eq!(failure.message(), "Parameter must be in range 0 - 7.");
//! assert!(failure.site().member.ends_with("schedule"));
//! ```

// Module declarations
pub mod failure;
mod macros;
pub mod requires;
pub mod testing;

// Re-exports for public API
pub use failure::{CallSite, Failure, FailureKind};
pub use requires::{
    ensure, in_range, invalid_operation, no_null_elements, not_disposed, not_empty,
    not_empty_collection, not_null,
};
