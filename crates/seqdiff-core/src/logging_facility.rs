//! Structured logging facility for seqdiff
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Boundary operations (line differ, renderers, close-match ranking, input
//! loading) own the start/end events. The matcher internals only emit
//! `tracing::trace!` records, since they run once per line pair inside
//! fancy replace.
//!
//! # Usage
//!
//! ```rust
//! use seqdiff_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
