//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical test utilities from requisite::testing
pub use requisite::testing::{expect_failure, site, TEST_SITE};
