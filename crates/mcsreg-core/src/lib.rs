//! mcsreg core: enforcement settings, parameter parsing, job descriptor, and errors.
//!
//! This crate defines the pure data and parsing layer shared by the registry,
//! the built-in backends, and external callers. It carries no locking or
//! loading logic so the parser can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `McsError`/`Result`; malformed parameter
//! strings fall back to defaults instead of failing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod job;
pub mod params;

/// Shared result type.
pub use error::{McsError, Result};
pub use job::{JobDetails, JobRecord, WholeNode};
pub use params::{EnforcementSettings, McsParams, SelectMode};
