//! comtest Core - Equality assertion engine for test code
//!
//! This crate provides:
//! - Equality assertions with a rule per argument type: exact integers,
//!   nullable C strings, optional text against any text-comparable value,
//!   the type's own `PartialEq`, and an absolute tolerance band for floats
//! - A failure signal that unwinds to the enclosing test boundary carrying a
//!   structured [`AssertionMismatch`]
//! - A routable diagnostic sink (standard error by default)
//! - A per-test catch point, [`run_case`]
//! - The structured logging facility shared by the above
//!
//! On success an assertion has no observable effect. On failure it writes
//! `"<label>: expected [<expected>] actual [<actual>]"` to the sink and
//! unwinds.
//!
//! ```
//! use comtest_core::{assert_equals_delta, assert_equals_int, run_case};
//!
//! let outcome = run_case("tolerance", || {
//!     assert_equals_int("count", 5, 5);
//!     assert_equals_delta("ratio", 1.0, 1.051, 0.05);
//! });
//! assert_eq!(
//!     outcome.unwrap_err().to_string(),
//!     "ratio: expected [1] actual [1.051]"
//! );
//! ```

pub mod boundary;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod render;
pub mod rules;
pub mod sink;

pub use comtest_core_types::schema;

// Re-export commonly used types
pub use boundary::run_case;
pub use engine::{
    assert_equals, assert_equals_c_ptr, assert_equals_cstr, assert_equals_delta,
    assert_equals_int, assert_equals_long, assert_equals_text,
};
pub use errors::{AssertErrorKind, AssertionMismatch, CaseError, Result};
pub use sink::{with_sink, DiagnosticSink, MemorySink, StderrSink};
