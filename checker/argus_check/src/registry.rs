//! The checking engine: flag state, call-site attribution, and the check
//! operations.
//!
//! A [`Registry`] is cheap to create and internally synchronized, so it can
//! be instance-scoped (one per logical call context) or shared. The
//! process-wide default from [`global()`] serves drop-in singleton usage;
//! [`Registry::check_at`] takes explicit attribution for callers that want
//! no shared call-site state at all.

use std::sync::OnceLock;

use bitflags::bitflags;
use parking_lot::RwLock;
use smallvec::SmallVec;

use argus_value::{classify, TypeTag, Value};

use crate::call_site::CallSite;
use crate::errors::{
    invalid_argument_type, missing_argument, missing_call_site, CheckError, CheckErrorKind,
};
use crate::sink::{console_sink, SharedReportSink};

bitflags! {
    /// Mode flags for a registry.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    struct CheckFlags: u8 {
        /// Checks execute at all.
        const ENABLED = 1 << 0;
        /// Violations are returned as errors instead of reported to the sink.
        const STRICT = 1 << 1;
    }
}

/// Constructor-level configuration for a [`Registry`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CheckConfig {
    /// Whether checks execute at all.
    pub enabled: bool,
    /// Whether a violation is returned as an error (`true`) or only
    /// reported to the sink (`false`).
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            enabled: true,
            strict: true,
        }
    }
}

impl CheckConfig {
    /// Production-leaning configuration: checks run but violations are only
    /// reported, never returned.
    pub fn lenient() -> Self {
        CheckConfig {
            enabled: true,
            strict: false,
        }
    }
}

/// One argument under check: a value plus its acceptable type identities.
///
/// An empty acceptable list means the argument may be of any type but must
/// have been supplied: anything except the `Undefined` sentinel passes, and
/// an explicit `Null` counts as present.
#[derive(Clone, Debug)]
pub struct ArgSpec<'v> {
    value: &'v Value,
    accepts: SmallVec<[TypeTag; 4]>,
}

impl<'v> ArgSpec<'v> {
    /// Required argument with no type restriction.
    pub fn required(value: &'v Value) -> Self {
        ArgSpec {
            value,
            accepts: SmallVec::new(),
        }
    }

    /// Argument restricted to the given acceptable types, scanned in order.
    pub fn typed(value: &'v Value, accepts: impl IntoIterator<Item = TypeTag>) -> Self {
        ArgSpec {
            value,
            accepts: accepts.into_iter().collect(),
        }
    }

    /// The value under check.
    pub fn value(&self) -> &Value {
        self.value
    }

    /// The acceptable type identities, in declared order.
    pub fn accepts(&self) -> &[TypeTag] {
        &self.accepts
    }
}

/// Runtime argument-type checker.
///
/// Holds the enabled/strict flags, the stored call site attributed to
/// stateful checks, and the lenient-mode report sink. All methods take
/// `&self`; state lives behind locks.
pub struct Registry {
    flags: RwLock<CheckFlags>,
    site: RwLock<Option<CallSite>>,
    sink: RwLock<SharedReportSink>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry with the default configuration: enabled and strict, sink on
    /// stdout.
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Registry with the given configuration and the default stdout sink.
    pub fn with_config(config: CheckConfig) -> Self {
        Self::with_sink(config, console_sink())
    }

    /// Registry with the given configuration and sink.
    pub fn with_sink(config: CheckConfig, sink: SharedReportSink) -> Self {
        let mut flags = CheckFlags::empty();
        flags.set(CheckFlags::ENABLED, config.enabled);
        flags.set(CheckFlags::STRICT, config.strict);
        Registry {
            flags: RwLock::new(flags),
            site: RwLock::new(None),
            sink: RwLock::new(sink),
        }
    }

    /// Store the call site attributed to subsequent stateful checks.
    ///
    /// Overwrites any previous site; no validation is performed on the
    /// labels.
    pub fn set_call_site(&self, source: impl Into<String>, callee: impl Into<String>) {
        let site = CallSite::new(source, callee);
        tracing::debug!(site = %site, "call site registered");
        *self.site.write() = Some(site);
    }

    /// The currently stored call site, if any.
    pub fn call_site(&self) -> Option<CallSite> {
        self.site.read().clone()
    }

    /// Turn checking on. Idempotent.
    pub fn enable(&self) {
        self.set_flag(CheckFlags::ENABLED, true);
    }

    /// Turn checking off, making every check a no-op. Idempotent.
    pub fn disable(&self) {
        self.set_flag(CheckFlags::ENABLED, false);
    }

    /// Choose between returning violations (`true`) and reporting them to
    /// the sink (`false`). Idempotent.
    pub fn set_strict(&self, strict: bool) {
        self.set_flag(CheckFlags::STRICT, strict);
    }

    /// Whether checks execute at all.
    pub fn is_enabled(&self) -> bool {
        self.flags.read().contains(CheckFlags::ENABLED)
    }

    /// Whether violations are returned as errors.
    pub fn is_strict(&self) -> bool {
        self.flags.read().contains(CheckFlags::STRICT)
    }

    fn set_flag(&self, flag: CheckFlags, on: bool) {
        let mut flags = self.flags.write();
        flags.set(flag, on);
        tracing::debug!(flags = ?*flags, "check flags updated");
    }

    /// Replace the lenient-mode report sink.
    pub fn set_sink(&self, sink: SharedReportSink) {
        *self.sink.write() = sink;
    }

    /// Check each argument spec against the stored call site.
    ///
    /// A call site must have been registered first; checking without one is
    /// itself a failure and goes through the reporting channel regardless
    /// of the enabled flag (the specs are not examined in that case).
    /// When disabled, returns immediately without examining anything.
    ///
    /// Strict mode returns the first violation and stops. Lenient mode
    /// reports every violation to the sink, keeps evaluating the remaining
    /// specs, and returns `Ok`.
    pub fn check(&self, specs: &[ArgSpec<'_>]) -> Result<(), CheckError> {
        let Some(site) = self.call_site() else {
            return self.deliver(missing_call_site());
        };
        self.check_with_site(&site, specs)
    }

    /// Check each argument spec with explicit attribution.
    ///
    /// Identical semantics to [`Registry::check`], except the stored call
    /// site is neither read nor required, so this never fails with a
    /// missing call site and is safe under concurrent callers.
    pub fn check_at(&self, site: &CallSite, specs: &[ArgSpec<'_>]) -> Result<(), CheckError> {
        self.check_with_site(site, specs)
    }

    /// Evaluate every spec and return all violations found, in spec order.
    ///
    /// Pure query: ignores the enabled flag, the stored call site, and the
    /// sink.
    pub fn audit(&self, specs: &[ArgSpec<'_>]) -> Vec<CheckErrorKind> {
        specs
            .iter()
            .enumerate()
            .filter_map(|(position, spec)| evaluate(spec, position + 1))
            .collect()
    }

    fn check_with_site(&self, site: &CallSite, specs: &[ArgSpec<'_>]) -> Result<(), CheckError> {
        if !self.is_enabled() {
            return Ok(());
        }
        for (position, spec) in specs.iter().enumerate() {
            let index = position + 1;
            tracing::trace!(index, "checking argument");
            if let Some(kind) = evaluate(spec, index) {
                self.deliver(CheckError::new(Some(site.clone()), kind))?;
            }
        }
        Ok(())
    }

    /// Route a failure through the reporting channel: returned when strict,
    /// written to the sink when lenient.
    fn deliver(&self, error: CheckError) -> Result<(), CheckError> {
        if self.is_strict() {
            return Err(error);
        }
        tracing::warn!(%error, "argument check violation");
        self.sink.read().report(&error);
        Ok(())
    }
}

/// Evaluate one spec, returning the violation if there is one.
fn evaluate(spec: &ArgSpec<'_>, index: usize) -> Option<CheckErrorKind> {
    if spec.accepts().is_empty() {
        if spec.value().is_undefined() {
            return Some(missing_argument(index));
        }
        return None;
    }
    if spec.accepts().iter().any(|tag| spec.value().matches(tag)) {
        return None;
    }
    Some(invalid_argument_type(
        index,
        classify(spec.value()),
        spec.accepts(),
    ))
}

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Process-wide default registry, for drop-in singleton usage.
///
/// Created on first access with the default configuration. Independent
/// instances created via [`Registry::new`] do not share its state.
pub fn global() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(Registry::new)
}
