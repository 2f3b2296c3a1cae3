//! Equality assertion engine
//!
//! One function per comparison rule, selected statically by the argument
//! types. Each returns normally when the values are equal and otherwise
//! writes a single diagnostic line to the current [`sink`](crate::sink) and
//! unwinds with an [`AssertionMismatch`] payload.
//!
//! The unwind is raised with [`std::panic::resume_unwind`], which skips the
//! panic hook: the diagnostic line is the only message printed. It stops at
//! [`run_case`](crate::boundary::run_case), at any other `catch_unwind`, or at
//! the test harness, which reports the test as failed. Binaries built with
//! `panic = "abort"` terminate instead.

use std::ffi::{c_char, CStr};
use std::fmt::Display;
use std::panic;

use crate::errors::AssertionMismatch;
use crate::log_mismatch;
use crate::render::{render, render_cstr, render_optional};
use crate::rules;
use crate::sink;

/// Report a mismatch and unwind to the enclosing test boundary
#[cold]
#[inline(never)]
fn fail(mismatch: AssertionMismatch) -> ! {
    sink::emit(&mismatch.to_string());
    log_mismatch!(mismatch);
    panic::resume_unwind(Box::new(mismatch))
}

/// Assert equality using the type's own `PartialEq`
///
/// `expected` and `actual` may differ in type when `T: PartialEq<U>`, e.g.
/// `String` against `str`.
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when `expected != actual`.
///
/// # Example
///
/// ```
/// use comtest_core::assert_equals;
///
/// assert_equals("greeting", "hello", &String::from("hello"));
/// ```
pub fn assert_equals<T, U>(label: &str, expected: &T, actual: &U)
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    if rules::generic_equal(expected, actual) {
        return;
    }
    fail(AssertionMismatch::new(label, render(expected), render(actual)))
}

/// Assert exact equality of two 32-bit integers
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when the values differ.
pub fn assert_equals_int(label: &str, expected: i32, actual: i32) {
    if rules::exact_equal(expected, actual) {
        return;
    }
    fail(AssertionMismatch::new(label, render(&expected), render(&actual)))
}

/// Assert exact equality of two 64-bit integers
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when the values differ.
pub fn assert_equals_long(label: &str, expected: i64, actual: i64) {
    if rules::exact_equal(expected, actual) {
        return;
    }
    fail(AssertionMismatch::new(label, render(&expected), render(&actual)))
}

/// Assert optional text against an optional value that compares to text
///
/// An absent side renders as `null` in the diagnostic.
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when exactly one side is
/// absent or both are present and unequal.
///
/// # Example
///
/// ```
/// use comtest_core::assert_equals_text;
///
/// let name = String::from("ada");
/// assert_equals_text("name", Some("ada"), Some(&name));
/// assert_equals_text::<String>("missing", None, None);
/// ```
pub fn assert_equals_text<A>(label: &str, expected: Option<&str>, actual: Option<&A>)
where
    A: PartialEq<str> + Display + ?Sized,
{
    if rules::text_equal(expected, actual) {
        return;
    }
    fail(AssertionMismatch::new(
        label,
        render_optional(expected),
        render_optional(actual),
    ))
}

/// Assert two nullable C strings have equal contents
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when exactly one side is
/// absent or the byte contents differ.
pub fn assert_equals_cstr(label: &str, expected: Option<&CStr>, actual: Option<&CStr>) {
    if rules::text_ptr_equal(expected, actual) {
        return;
    }
    fail(AssertionMismatch::new(
        label,
        render_cstr(expected),
        render_cstr(actual),
    ))
}

/// Assert two raw, possibly null, C string pointers have equal contents
///
/// Null pointers take part in the comparison as absent values. Pointer
/// addresses are never compared.
///
/// # Safety
///
/// Each non-null pointer must point to a valid NUL-terminated string that
/// stays alive and unmodified for the duration of the call.
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when the contents differ.
pub unsafe fn assert_equals_c_ptr(label: &str, expected: *const c_char, actual: *const c_char) {
    // SAFETY: forwarded from this function's contract.
    let (expected, actual) = unsafe { (nullable_cstr(expected), nullable_cstr(actual)) };
    assert_equals_cstr(label, expected, actual)
}

/// # Safety
///
/// `ptr` is null or points to a valid NUL-terminated string living for `'a`.
unsafe fn nullable_cstr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null, and valid per the caller's contract.
        Some(unsafe { CStr::from_ptr(ptr) })
    }
}

/// Assert `actual` lies within `tolerance` of `expected`, boundaries included
///
/// `tolerance` is expected to be finite and non-negative; it is not
/// validated, and a negative value fails every comparison.
///
/// # Panics
///
/// Unwinds with an [`AssertionMismatch`] payload when `actual` falls outside
/// `[expected - tolerance, expected + tolerance]`.
///
/// # Example
///
/// ```
/// use comtest_core::assert_equals_delta;
///
/// assert_equals_delta("ratio", 1.0, 1.05, 0.05);
/// ```
pub fn assert_equals_delta(label: &str, expected: f64, actual: f64, tolerance: f64) {
    if rules::within_tolerance(expected, actual, tolerance) {
        return;
    }
    fail(AssertionMismatch::new(label, render(&expected), render(&actual)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{with_sink, MemorySink};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Run `body` with a capturing sink; return the mismatch and sink lines
    fn observe<F: FnOnce()>(body: F) -> (Option<AssertionMismatch>, Vec<String>) {
        let sink = MemorySink::new();
        let outcome = with_sink(sink.clone(), || catch_unwind(AssertUnwindSafe(body)));
        let mismatch = outcome
            .err()
            .map(|payload| AssertionMismatch::from_payload(payload).unwrap());
        (mismatch, sink.lines())
    }

    #[test]
    fn test_pass_is_silent() {
        let (mismatch, lines) = observe(|| assert_equals_int("same", 3, 3));
        assert!(mismatch.is_none());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_failure_line_matches_payload() {
        let (mismatch, lines) = observe(|| assert_equals_long("wide", 1 << 40, 7));
        let mismatch = mismatch.unwrap();
        assert_eq!(lines, vec![mismatch.to_string()]);
        assert_eq!(lines[0], "wide: expected [1099511627776] actual [7]");
    }

    #[test]
    fn test_c_ptr_null_and_contents() {
        let a = std::ffi::CString::new("abc").unwrap();
        let b = std::ffi::CString::new("abc").unwrap();

        let (mismatch, _) = observe(|| unsafe {
            assert_equals_c_ptr("both null", std::ptr::null(), std::ptr::null())
        });
        assert!(mismatch.is_none());

        let (mismatch, _) =
            observe(|| unsafe { assert_equals_c_ptr("same text", a.as_ptr(), b.as_ptr()) });
        assert!(mismatch.is_none());

        let (mismatch, lines) =
            observe(|| unsafe { assert_equals_c_ptr("one null", std::ptr::null(), a.as_ptr()) });
        assert!(mismatch.is_some());
        assert_eq!(lines, vec!["one null: expected [null] actual [abc]".to_string()]);
    }

    #[test]
    fn test_delta_failure_renders_values() {
        let (mismatch, _) = observe(|| assert_equals_delta("rate", 2.5, 2.75, 0.1));
        let mismatch = mismatch.unwrap();
        assert_eq!(mismatch.expected(), "2.5");
        assert_eq!(mismatch.actual(), "2.75");
    }
}

/// Assert equality, choosing the rule by arity
///
/// Three arguments use [`assert_equals`](crate::engine::assert_equals) on
/// borrowed operands; four arguments use
/// [`assert_equals_delta`](crate::engine::assert_equals_delta).
///
/// # Example
///
/// ```
/// use comtest_core::assert_equals;
///
/// assert_equals!("count", 5, 5);
/// assert_equals!("owned text", String::from("abc"), "abc");
/// assert_equals!("ratio", 1.0, 0.95, 0.05);
/// ```
#[macro_export]
macro_rules! assert_equals {
    ($label:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::engine::assert_equals($label, &$expected, &$actual)
    };
    ($label:expr, $expected:expr, $actual:expr, $tolerance:expr $(,)?) => {
        $crate::engine::assert_equals_delta($label, $expected, $actual, $tolerance)
    };
}
