//! Report sinks for lenient-mode delivery.
//!
//! When a registry is not strict, violations are formatted and handed to a
//! sink instead of being returned as errors:
//! - Console: stdout (default)
//! - Buffer: capture for assertions
//! - Callback: user hook receiving the structured failure
//! - Silent: discard
//!
//! Uses enum dispatch instead of trait objects for static dispatch on this
//! path.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::CheckError;

/// Sink that writes each formatted report to stdout.
///
/// Reports are self-terminated (the rendering ends with a newline), so no
/// separator is added.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Write one report.
    pub fn report(&self, error: &CheckError) {
        print!("{error}");
    }
}

/// Sink that captures formatted reports in a buffer.
///
/// Used by tests that assert on the exact report stream.
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append one report to the buffer.
    pub fn report(&self, error: &CheckError) {
        self.buffer.lock().push_str(&error.to_string());
    }

    /// All captured reports, in delivery order.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Discard captured reports.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook invoked with each structured failure.
pub type ViolationHook = Box<dyn Fn(&CheckError) + Send + Sync>;

/// Sink that forwards each structured failure to a user hook.
pub struct CallbackSink {
    hook: ViolationHook,
}

impl CallbackSink {
    /// Wrap a hook.
    pub fn new(hook: impl Fn(&CheckError) + Send + Sync + 'static) -> Self {
        CallbackSink {
            hook: Box::new(hook),
        }
    }

    /// Invoke the hook with one failure.
    pub fn report(&self, error: &CheckError) {
        (self.hook)(error);
    }
}

/// Report sink implementation using enum dispatch.
pub enum ReportSink {
    /// Writes to stdout (default).
    Console(ConsoleSink),
    /// Captures to a buffer (testing).
    Buffer(BufferSink),
    /// Forwards to a user hook.
    Callback(CallbackSink),
    /// Discards all reports.
    Silent,
}

impl ReportSink {
    /// Deliver one failure.
    pub fn report(&self, error: &CheckError) {
        match self {
            Self::Console(sink) => sink.report(error),
            Self::Buffer(sink) => sink.report(error),
            Self::Callback(sink) => sink.report(error),
            Self::Silent => {}
        }
    }

    /// Captured reports, for sinks that capture.
    ///
    /// Returns an empty string for non-capturing sinks.
    pub fn contents(&self) -> String {
        match self {
            Self::Buffer(sink) => sink.contents(),
            _ => String::new(),
        }
    }

    /// Discard captured reports, for sinks that capture.
    pub fn clear(&self) {
        if let Self::Buffer(sink) = self {
            sink.clear();
        }
    }
}

/// Shared report sink handle.
pub type SharedReportSink = Arc<ReportSink>;

/// Create the default stdout sink.
pub fn console_sink() -> SharedReportSink {
    Arc::new(ReportSink::Console(ConsoleSink))
}

/// Create a capturing sink for assertions.
pub fn buffer_sink() -> SharedReportSink {
    Arc::new(ReportSink::Buffer(BufferSink::new()))
}

/// Create a sink that forwards each structured failure to a hook.
pub fn callback_sink(hook: impl Fn(&CheckError) + Send + Sync + 'static) -> SharedReportSink {
    Arc::new(ReportSink::Callback(CallbackSink::new(hook)))
}

/// Create a sink that discards all reports.
pub fn silent_sink() -> SharedReportSink {
    Arc::new(ReportSink::Silent)
}
