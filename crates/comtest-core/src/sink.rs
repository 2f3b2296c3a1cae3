//! Diagnostic output sink
//!
//! Failure lines go to the process standard error stream unless the current
//! thread has routed them elsewhere with [`with_sink`].

use std::cell::RefCell;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for assertion failure lines
pub trait DiagnosticSink: Send + Sync {
    /// Write one complete diagnostic line (without trailing newline)
    fn write_line(&self, line: &str);
}

/// Writes each line to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", line).ok();
    }
}

/// Collects lines in memory
///
/// Clones share the same buffer, so a harness can hand one clone to
/// [`with_sink`] and read the lines back from another.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Get the most recently captured line
    pub fn last_line(&self) -> Option<String> {
        self.lines
            .lock()
            .ok()
            .and_then(|l| l.last().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().map(|l| l.is_empty()).unwrap_or(true)
    }

    /// Clear all captured lines
    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut l| l.push(line.to_string()))
            .ok();
    }
}

thread_local! {
    static CURRENT: RefCell<Option<Arc<dyn DiagnosticSink>>> = const { RefCell::new(None) };
}

/// Restores the previous routing when dropped, including during unwinding
struct RestoreSink(Option<Arc<dyn DiagnosticSink>>);

impl Drop for RestoreSink {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT.with(|current| *current.borrow_mut() = previous);
    }
}

/// Route this thread's diagnostic lines to `sink` while `body` runs
///
/// Routings nest; the previous one is reinstated when `body` returns or
/// unwinds.
///
/// # Example
///
/// ```
/// use comtest_core::sink::{with_sink, MemorySink};
///
/// let sink = MemorySink::new();
/// with_sink(sink.clone(), || comtest_core::sink::emit("hello"));
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
pub fn with_sink<S, R, F>(sink: S, body: F) -> R
where
    S: DiagnosticSink + 'static,
    F: FnOnce() -> R,
{
    let previous = CURRENT.with(|current| current.replace(Some(Arc::new(sink))));
    let _restore = RestoreSink(previous);
    body()
}

/// Write one line to the sink currently routed for this thread
pub fn emit(line: &str) {
    let routed = CURRENT.with(|current| current.borrow().clone());
    match routed {
        Some(sink) => sink.write_line(line),
        None => StderrSink.write_line(line),
    }
}
