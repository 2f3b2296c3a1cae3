mod common;

use comtest_core::rules::{text_equal, within_tolerance};
use comtest_core::{assert_equals, assert_equals_delta, assert_equals_int, assert_equals_long};
use common::observe;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_int_reflexive(x in any::<i32>()) {
        let observed = observe(|| assert_equals_int("reflexive", x, x));
        prop_assert!(observed.passed());
        prop_assert!(observed.lines.is_empty());
    }

    #[test]
    fn prop_distinct_longs_fail_with_both_values(x in any::<i64>(), y in any::<i64>()) {
        prop_assume!(x != y);
        let observed = observe(|| assert_equals_long("distinct", x, y));
        let mismatch = observed.mismatch.expect("distinct values must fail");
        prop_assert_eq!(mismatch.to_string(), format!("distinct: expected [{}] actual [{}]", x, y));
    }

    #[test]
    fn prop_string_reflexive_across_buffers(s in ".*") {
        let copy = s.clone();
        let observed = observe(|| assert_equals("text", &s, &copy));
        prop_assert!(observed.passed());
    }

    #[test]
    fn prop_text_rule_matches_option_equality(
        e in proptest::option::of("[a-c]{0,2}"),
        a in proptest::option::of("[a-c]{0,2}"),
    ) {
        prop_assert_eq!(
            text_equal(e.as_deref(), a.as_deref()),
            e == a
        );
    }

    #[test]
    fn prop_tolerance_reflexive(x in -1.0e12_f64..1.0e12, t in 0.0_f64..1.0e6) {
        let observed = observe(|| assert_equals_delta("reflexive", x, x, t));
        prop_assert!(observed.passed());
    }

    #[test]
    fn prop_tolerance_is_symmetric_about_expected(
        e in -1.0e6_f64..1.0e6,
        d in 0.0_f64..1.0e3,
        t in 0.0_f64..1.0e3,
    ) {
        // Offsets well inside or outside the band, away from rounding noise
        prop_assume!((d - t).abs() > 1.0e-6);
        let above = within_tolerance(e, e + d, t);
        let below = within_tolerance(e, e - d, t);
        prop_assert_eq!(above, d < t);
        prop_assert_eq!(below, d < t);
    }

    #[test]
    fn prop_negative_tolerance_never_passes(
        e in -1.0e6_f64..1.0e6,
        a in -1.0e6_f64..1.0e6,
        t in 1.0e-9_f64..1.0e3,
    ) {
        prop_assert!(!within_tolerance(e, a, -t));
    }
}
