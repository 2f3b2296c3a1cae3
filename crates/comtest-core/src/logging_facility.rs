//! Structured logging facility for comtest
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`,
//!   `log_mismatch!`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! The assertion engine logs nothing on success. A failed assertion emits one
//! `mismatch` event in addition to its diagnostic line.
//!
//! # Usage
//!
//! ```rust
//! use comtest_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
