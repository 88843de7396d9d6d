//! sample-app core: metric primitives, the Prometheus text exposition format,
//! and the shared error type.
//!
//! Nothing here knows about HTTP or the async runtime, so the primitives can be
//! exercised directly from unit tests and reused by any binary.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording a sample must never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, SampleAppError};
