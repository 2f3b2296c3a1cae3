//! Equality rules
//!
//! Pure predicates behind each assertion. None of them has side effects; the
//! engine decides what to do with a `false`.

use std::ffi::CStr;

/// Exact-integer rule: bitwise numeric equality
pub fn exact_equal<I: Eq + Copy>(expected: I, actual: I) -> bool {
    expected == actual
}

/// Generic rule: whatever the type's own equality operator defines
pub fn generic_equal<T, U>(expected: &T, actual: &U) -> bool
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    expected == actual
}

/// Text-pointer rule for nullable C strings
///
/// Both absent are equal, exactly one absent is unequal, otherwise the byte
/// sequences including the terminator decide. Addresses are never compared.
pub fn text_ptr_equal(expected: Option<&CStr>, actual: Option<&CStr>) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(expected), Some(actual)) => {
            expected.to_bytes_with_nul() == actual.to_bytes_with_nul()
        }
        _ => false,
    }
}

/// Heterogeneous rule: optional text against an optional value comparable to text
pub fn text_equal<A>(expected: Option<&str>, actual: Option<&A>) -> bool
where
    A: PartialEq<str> + ?Sized,
{
    match (expected, actual) {
        (None, None) => true,
        (Some(expected), Some(actual)) => actual == expected,
        _ => false,
    }
}

/// Tolerance rule: `actual` lies in the closed band `[expected - tolerance, expected + tolerance]`
///
/// The bounds are formed from `expected` rather than subtracting the two
/// values, so a decimal difference exactly equal to the tolerance
/// (`1.0` vs `1.05` at `0.05`) stays on the inclusive side. A negative
/// tolerance yields an empty band and NaN on any side never passes.
pub fn within_tolerance(expected: f64, actual: f64, tolerance: f64) -> bool {
    expected - tolerance <= actual && actual <= expected + tolerance
}
