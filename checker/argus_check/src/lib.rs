//! Runtime argument-type enforcement.
//!
//! A [`Registry`] lets a function validate, at call time, that its
//! parameters match one or more acceptable types. Violations produce
//! structured, attributed failures that are either returned as errors
//! (strict mode, for development) or written to a report sink (lenient
//! mode, for production); checking can also be disabled entirely.
//!
//! Typical flow:
//!
//! ```text
//! let registry = Registry::new();
//! registry.set_call_site("user.js", "create_user");
//! registry.check(&[
//!     ArgSpec::typed(&name, [TypeTag::String]),
//!     ArgSpec::typed(&age, [TypeTag::Number, TypeTag::Null]),
//!     ArgSpec::required(&options),
//! ])?;
//! ```
//!
//! The stored call site is shared mutable state; callers that check from
//! several contexts concurrently should use per-context registries or
//! [`Registry::check_at`], which takes the attribution explicitly.

mod call_site;
pub mod errors;
mod registry;
pub mod sink;

pub use call_site::CallSite;
pub use errors::{CheckError, CheckErrorKind};
pub use registry::{global, ArgSpec, CheckConfig, Registry};
pub use sink::{
    buffer_sink, callback_sink, console_sink, silent_sink, ReportSink, SharedReportSink,
};

// Re-export the value taxonomy so consumers need only one crate.
pub use argus_value::{classify, TypeTag, Value, CUSTOM_CLASS_LABEL, TYPE_TABLE};
