use std::any::Any;
use thiserror::Error;

/// Result type alias for outcomes observed at a test boundary
pub type Result<T> = std::result::Result<T, CaseError>;

/// Unwind payload type as delivered by `std::panic::catch_unwind`
pub type PanicPayload = Box<dyn Any + Send + 'static>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events and by callers
/// that classify a failed test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertErrorKind {
    /// An equality assertion found expected and actual to differ
    AssertionMismatch,
    /// The test body panicked for a reason other than an assertion
    Panicked,
}

impl AssertErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AssertErrorKind::AssertionMismatch => "ERR_ASSERTION_MISMATCH",
            AssertErrorKind::Panicked => "ERR_PANICKED",
        }
    }
}

/// The failure raised by every equality assertion
///
/// Carries the label and the rendered expected/actual values. Its `Display`
/// output is exactly the diagnostic line written to the sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{label}: expected [{expected}] actual [{actual}]")]
pub struct AssertionMismatch {
    label: String,
    expected: String,
    actual: String,
}

impl AssertionMismatch {
    /// Create a mismatch from a label and two already rendered values
    pub fn new(
        label: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Get the assertion label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the rendered expected value
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Get the rendered actual value
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Get the error kind
    pub fn kind(&self) -> AssertErrorKind {
        AssertErrorKind::AssertionMismatch
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Recover a mismatch from a caught unwind payload
    ///
    /// # Errors
    ///
    /// Hands the payload back untouched when it was not raised by an
    /// equality assertion.
    pub fn from_payload(payload: PanicPayload) -> std::result::Result<Self, PanicPayload> {
        payload.downcast::<Self>().map(|mismatch| *mismatch)
    }
}

// ========== End Error Facility ==========

/// Outcome of a failed test case as seen by the boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// An equality assertion failed somewhere inside the test body
    #[error(transparent)]
    Mismatch(#[from] AssertionMismatch),

    /// The test body panicked without an assertion payload
    #[error("test body panicked: {message}")]
    Panicked { message: String },
}

impl CaseError {
    /// Classify a caught unwind payload
    pub fn from_payload(payload: PanicPayload) -> Self {
        match AssertionMismatch::from_payload(payload) {
            Ok(mismatch) => CaseError::Mismatch(mismatch),
            Err(payload) => CaseError::Panicked {
                message: panic_message(payload.as_ref()),
            },
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> AssertErrorKind {
        match self {
            CaseError::Mismatch(_) => AssertErrorKind::AssertionMismatch,
            CaseError::Panicked { .. } => AssertErrorKind::Panicked,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Get the mismatch, if this case failed on an assertion
    pub fn mismatch(&self) -> Option<&AssertionMismatch> {
        match self {
            CaseError::Mismatch(mismatch) => Some(mismatch),
            CaseError::Panicked { .. } => None,
        }
    }
}

/// Extract the message of a `panic!` payload (`&str` or `String`)
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
