//! Core types shared across seqdiff facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! macros in `seqdiff-core` and by anything that inspects their output:
//!
//! - **Field keys**: component, op, event, duration and size fields
//! - **Event names**: start, end, end_error

pub mod schema;
