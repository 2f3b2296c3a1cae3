use comtest_core::{with_sink, AssertionMismatch, MemorySink};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// What a single assertion body did: its mismatch, if any, and the sink lines
pub struct Observed {
    pub mismatch: Option<AssertionMismatch>,
    pub lines: Vec<String>,
}

impl Observed {
    #[allow(dead_code)]
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Run `body` with a capturing sink and catch the assertion unwind
///
/// Panics if the body unwinds with something other than an assertion.
#[allow(dead_code)]
pub fn observe<F: FnOnce()>(body: F) -> Observed {
    let sink = MemorySink::new();
    let outcome = with_sink(sink.clone(), || catch_unwind(AssertUnwindSafe(body)));
    let mismatch = outcome.err().map(|payload| {
        AssertionMismatch::from_payload(payload)
            .unwrap_or_else(|_| panic!("body panicked without an assertion payload"))
    });
    Observed {
        mismatch,
        lines: sink.lines(),
    }
}

/// Assert the body passes without writing anything
#[allow(dead_code)]
pub fn assert_passes<F: FnOnce()>(body: F) {
    let observed = observe(body);
    assert!(
        observed.passed(),
        "unexpected mismatch: {:?}",
        observed.mismatch
    );
    assert!(observed.lines.is_empty(), "unexpected output: {:?}", observed.lines);
}

/// Assert the body fails and return its mismatch
#[allow(dead_code)]
pub fn expect_mismatch<F: FnOnce()>(body: F) -> AssertionMismatch {
    let observed = observe(body);
    let mismatch = observed.mismatch.expect("assertion should have failed");
    assert_eq!(observed.lines, vec![mismatch.to_string()]);
    mismatch
}
