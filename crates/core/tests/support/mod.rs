//! Shared test helpers for `outagesync-core` integration tests.
//!
//! These helpers provide fixtures and a lightweight API mock so that service
//! tests can focus on behaviour instead of boilerplate.

pub mod api;
