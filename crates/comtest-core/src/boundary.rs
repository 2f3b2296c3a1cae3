//! Per-test catch point
//!
//! The engine unwinds on failure and relies on something above the test body
//! to stop that unwind. [`run_case`] is that boundary for harnesses that run
//! several bodies in one process and need to carry on after a failure.
//! Under the standard `#[test]` harness no boundary is needed: the harness
//! catches the unwind itself and reports the test as failed.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use comtest_core_types::schema::OP_RUN_CASE;

use crate::errors::{CaseError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Run one test body, stopping any unwind it raises
///
/// # Errors
///
/// - [`CaseError::Mismatch`] when an equality assertion failed
/// - [`CaseError::Panicked`] when the body panicked for any other reason
///
/// # Example
///
/// ```
/// use comtest_core::{assert_equals_int, run_case, CaseError};
///
/// assert!(run_case("passes", || assert_equals_int("n", 1, 1)).is_ok());
///
/// let err = run_case("fails", || assert_equals_int("n", 1, 2)).unwrap_err();
/// assert!(matches!(err, CaseError::Mismatch(_)));
/// ```
pub fn run_case<F>(name: &str, body: F) -> Result<()>
where
    F: FnOnce(),
{
    log_op_start!(OP_RUN_CASE, case = name);
    let start = Instant::now();

    // Captured state is abandoned together with a failed case.
    panic::catch_unwind(AssertUnwindSafe(body)).map_err(|payload| {
        let err = CaseError::from_payload(payload);
        log_op_error!(
            OP_RUN_CASE,
            err,
            duration_ms = start.elapsed().as_millis() as u64,
            case = name
        );
        err
    })?;

    log_op_end!(
        OP_RUN_CASE,
        duration_ms = start.elapsed().as_millis() as u64,
        case = name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{assert_equals, assert_equals_int};
    use crate::sink::{with_sink, MemorySink};

    fn nested_helper(depth: u32) {
        if depth == 0 {
            assert_equals_int("deep", 0, 1);
        } else {
            nested_helper(depth - 1);
        }
        unreachable!("assertion should have unwound");
    }

    #[test]
    fn test_passing_body() {
        assert_eq!(run_case("ok", || assert_equals("x", &1, &1)), Ok(()));
    }

    #[test]
    fn test_mismatch_unwinds_through_frames() {
        let sink = MemorySink::new();
        let result = with_sink(sink.clone(), || run_case("deep", || nested_helper(8)));

        let err = result.unwrap_err();
        let mismatch = err.mismatch().unwrap();
        assert_eq!(mismatch.label(), "deep");
        assert_eq!(sink.lines(), vec!["deep: expected [0] actual [1]".to_string()]);
    }

    #[test]
    fn test_statements_after_failure_do_not_run() {
        let mut reached = false;
        let result = with_sink(MemorySink::new(), || {
            run_case("stops", || {
                assert_equals("first", "a", "b");
                reached = true;
            })
        });
        assert!(result.is_err());
        assert!(!reached);
    }
}
