mod common;

use comtest_core::{assert_equals_int, assert_equals_long};
use common::{assert_passes, expect_mismatch};

#[test]
fn test_equal_ints_pass() {
    assert_passes(|| assert_equals_int("l", 5, 5));
}

#[test]
fn test_unequal_ints_report_both_values_and_label() {
    let m = expect_mismatch(|| assert_equals_int("l", 5, 6));
    let line = m.to_string();
    assert!(line.contains('5'));
    assert!(line.contains('6'));
    assert!(line.starts_with("l:"));
    assert_eq!(line, "l: expected [5] actual [6]");
}

#[test]
fn test_negative_and_extreme_ints() {
    assert_passes(|| assert_equals_int("min", i32::MIN, i32::MIN));
    let m = expect_mismatch(|| assert_equals_int("sign", -1, 1));
    assert_eq!(m.expected(), "-1");
    assert_eq!(m.actual(), "1");
}

#[test]
fn test_wide_ints() {
    assert_passes(|| assert_equals_long("max", i64::MAX, i64::MAX));
    let m = expect_mismatch(|| assert_equals_long("wide", i64::MAX, i64::MAX - 1));
    assert_eq!(
        m.to_string(),
        "wide: expected [9223372036854775807] actual [9223372036854775806]"
    );
}

#[test]
fn test_wide_values_beyond_i32_are_not_truncated() {
    // Equal in the low 32 bits, different overall
    expect_mismatch(|| assert_equals_long("high bits", 1, (1_i64 << 32) + 1));
}
