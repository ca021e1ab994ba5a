//! Structured check failures.
//!
//! Every failure is a typed value: a [`CheckErrorKind`] category with its
//! data, wrapped in a [`CheckError`] carrying the call-site attribution.
//! The factory functions are the construction surface used by the engine.
//!
//! Rendering is fixed for compatibility: `[<source>::<callee>]` on the
//! first line, then the detail message, then a trailing newline. Unset
//! attribution renders as `undefined` labels.

use std::fmt;

use argus_value::TypeTag;
use thiserror::Error;

use crate::call_site::CallSite;

/// Label rendered in place of attribution that was never provided.
const UNSET_LABEL: &str = "undefined";

/// Typed failure category for a check.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckErrorKind {
    /// A stateful check ran before any call site was registered.
    #[error("a call site must be registered before any checks can run")]
    MissingCallSite,

    /// A required argument (empty acceptable-type list) was never supplied.
    #[error("Invalid argument passed. Argument *{index}* was not supplied; required")]
    MissingArgument {
        /// 1-based position of the argument in the check call.
        index: usize,
    },

    /// An argument's resolved type matched none of its acceptable types.
    #[error(
        "Invalid argument type. Argument *{index}* is of type: _{actual}_\nShould be of type: _{}_",
        .accepted.join("_, _")
    )]
    InvalidArgumentType {
        /// 1-based position of the argument in the check call.
        index: usize,
        /// Classified name of the value that was actually supplied.
        actual: &'static str,
        /// Names of the acceptable types, in declared order.
        accepted: Vec<String>,
    },
}

/// A check failure with its call-site attribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckError {
    site: Option<CallSite>,
    kind: CheckErrorKind,
}

impl CheckError {
    /// Attach attribution to a failure. `None` means no call site was set
    /// when the failure was detected.
    pub fn new(site: Option<CallSite>, kind: CheckErrorKind) -> Self {
        CheckError { site, kind }
    }

    /// The attribution at the time the failure was detected, if any.
    pub fn site(&self) -> Option<&CallSite> {
        self.site.as_ref()
    }

    /// The failure category and its data.
    pub fn kind(&self) -> &CheckErrorKind {
        &self.kind
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (source, callee) = self
            .site
            .as_ref()
            .map_or((UNSET_LABEL, UNSET_LABEL), |site| {
                (site.source(), site.callee())
            });
        write!(f, "[{source}::{callee}]\n{}\n", self.kind)
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Failure for a check that ran before attribution was set.
pub fn missing_call_site() -> CheckError {
    CheckError::new(None, CheckErrorKind::MissingCallSite)
}

/// Failure for a required argument that was never supplied.
pub fn missing_argument(index: usize) -> CheckErrorKind {
    CheckErrorKind::MissingArgument { index }
}

/// Failure for an argument whose type matched none of its acceptable types.
pub fn invalid_argument_type(
    index: usize,
    actual: &'static str,
    accepted: &[TypeTag],
) -> CheckErrorKind {
    CheckErrorKind::InvalidArgumentType {
        index,
        actual,
        accepted: accepted.iter().map(|tag| tag.name().to_owned()).collect(),
    }
}
