//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log test-case
//! boundaries and assertion failures.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use comtest_core::log_op_start;
/// log_op_start!("run_case");
/// log_op_start!("run_case", case = "parses_header");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use comtest_core::log_op_end;
/// log_op_end!("run_case", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that ended with a failed test case
///
/// # Example
///
/// ```
/// # use comtest_core::{log_op_error, AssertionMismatch, CaseError};
/// let err = CaseError::from(AssertionMismatch::new("count", "5", "6"));
/// log_op_error!("run_case", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let case_err: &$crate::errors::CaseError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?case_err.kind(),
            err_code = case_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let case_err: &$crate::errors::CaseError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?case_err.kind(),
            err_code = case_err.code(),
            $($field)*
        );
    }};
}

/// Log a failed equality assertion
///
/// Emitted by the engine right before it unwinds, never on success.
#[macro_export]
macro_rules! log_mismatch {
    ($mismatch:expr) => {{
        let mismatch: &$crate::errors::AssertionMismatch = &$mismatch;
        tracing::warn!(
            component = module_path!(),
            op = $crate::schema::OP_ASSERT_EQUALS,
            event = $crate::schema::EVENT_MISMATCH,
            label = mismatch.label(),
            expected = mismatch.expected(),
            actual = mismatch.actual(),
            err_code = mismatch.code(),
        );
    }};
}
