//! Canonical schema constants for structured logging and events
//!
//! These constants keep the engine, the test boundary and log assertions in
//! agreement on field and event names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Assertion identifiers
pub const FIELD_CASE: &str = "case";
pub const FIELD_LABEL: &str = "label";
pub const FIELD_EXPECTED: &str = "expected";
pub const FIELD_ACTUAL: &str = "actual";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical operation names
pub const OP_ASSERT_EQUALS: &str = "assert_equals";
pub const OP_RUN_CASE: &str = "run_case";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";
