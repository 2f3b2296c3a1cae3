//! Case Runner Demonstration
//!
//! A minimal harness around the assertion engine: each body runs inside
//! `run_case`, failures print their diagnostic line to stderr, and the
//! harness carries on with the next case.
//!
//! Run with `RUST_LOG=comtest=debug` to see the boundary events.

use comtest_core::logging_facility::{init, Profile};
use comtest_core::{
    assert_equals, assert_equals_delta, assert_equals_int, assert_equals_text, run_case,
    CaseError,
};

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn integer_sum() {
    assert_equals_int("1 + 2", 3, 1 + 2);
}

fn average_within_tolerance() {
    assert_equals_delta("average", 2.0, average(&[1.0, 2.0, 3.05]), 0.05);
}

fn upper_cased_name() {
    let name = "ada".to_uppercase();
    assert_equals("to_uppercase", "ADA", &name);
}

fn missing_lookup() {
    let found: Option<&String> = None;
    assert_equals_text("lookup", Some("present"), found);
}

fn main() {
    init(Profile::Development);
    println!("=== comtest Case Runner Demo ===\n");

    let cases: [(&str, fn()); 4] = [
        ("integer sum", integer_sum),
        ("average within tolerance", average_within_tolerance),
        ("upper-cased name", upper_cased_name),
        ("missing lookup (fails)", missing_lookup),
    ];

    let mut failed = 0;
    for (name, body) in cases {
        match run_case(name, body) {
            Ok(()) => println!("✓ {}", name),
            Err(CaseError::Mismatch(_)) => {
                failed += 1;
                println!("✗ {}", name);
            }
            Err(err @ CaseError::Panicked { .. }) => {
                failed += 1;
                println!("✗ {} ({})", name, err);
            }
        }
    }

    println!("\n{} failed", failed);
}
