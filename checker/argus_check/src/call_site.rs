//! Call-site attribution for check reports.

use std::fmt;

/// Where a checking session's failures are attributed: a source label
/// (file or module) and a callee label (function or method).
///
/// Attribution is descriptive only; no validation is performed on either
/// label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    source: String,
    callee: String,
}

impl CallSite {
    /// Create an attribution pair.
    pub fn new(source: impl Into<String>, callee: impl Into<String>) -> Self {
        CallSite {
            source: source.into(),
            callee: callee.into(),
        }
    }

    /// The source label (file or module).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The callee label (function or method).
    pub fn callee(&self) -> &str {
        &self.callee
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.source, self.callee)
    }
}
