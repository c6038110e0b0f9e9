// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The knob registry.
//!
//! # Architecture
//!
//! ```text
//! Registry
//!   source: Box<dyn KnobSource>      read on every call
//!   state:  Mutex<State>             one lock for all shared state
//!             store    KnobStore
//!             strings  name -> StringHandle
//!             bools    name -> BoolHandle
//!   phase:  InitPhase                guards typed lookups
//!   policy: MalformedPolicy          fate of malformed values
//!
//! string()            --> observe raw
//! bool*/lookup_bool() --> parse --> observe canonical
//! lookup_int()        --> parse --> observe raw
//! register_*()        --> memoized handle
//! setenv()            --> source + store + handles, same lock
//! ```
//!
//! Reading the source and recording the result happen under one hold of
//! the state lock, so a concurrent `setenv` cannot leave a stale record.
//!
//! Every typed accessor has a `try_*` twin returning [`KnobResult`]. The
//! plain accessor hands errors to the [`MalformedPolicy`], which never
//! returns.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bon::Builder;

use super::handle::{BoolHandle, StringHandle};
use super::parse::{format_bool, parse_bool, parse_int};
use super::phase::InitPhase;
use super::policy::MalformedPolicy;
use super::source::{KnobSource, ProcessEnv};
use super::store::KnobStore;
use super::tristate::OptBool;
use crate::error::KnobResult;

/// Construction options for a [`Registry`].
#[derive(Debug, Clone, Copy, Builder)]
pub struct RegistryOptions {
    #[builder(setters(name = with_policy), default)]
    policy: MalformedPolicy,
    /// Start already past the init phase.
    #[builder(setters(name = with_ready), default = false)]
    ready: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RegistryOptions {
    #[must_use]
    pub const fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    #[must_use]
    pub const fn ready(&self) -> bool {
        self.ready
    }
}

#[derive(Default)]
struct State {
    store: KnobStore,
    strings: HashMap<String, StringHandle>,
    bools: HashMap<String, BoolHandle>,
}

/// Process-wide registry of environment knobs.
///
/// Built once by the entry point and shared (by reference or `Arc`) with
/// whatever needs knob access.
pub struct Registry {
    source: Box<dyn KnobSource>,
    state: Mutex<State>,
    phase: InitPhase,
    policy: MalformedPolicy,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("phase", &self.phase)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Creates a guarded registry over `source` with the default policy.
    #[must_use]
    pub fn new(source: impl KnobSource + 'static) -> Self {
        Self::with_options(source, RegistryOptions::default())
    }

    #[must_use]
    pub fn with_options(source: impl KnobSource + 'static, options: RegistryOptions) -> Self {
        Self {
            source: Box::new(source),
            state: Mutex::new(State::default()),
            phase: InitPhase::new(options.ready),
            policy: options.policy,
        }
    }

    /// Creates a guarded registry over the process environment.
    #[must_use]
    pub fn process(options: RegistryOptions) -> Self {
        Self::with_options(ProcessEnv::new(), options)
    }

    #[must_use]
    pub const fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Signals that construction is complete and typed lookups are allowed.
    pub fn set_in_main(&self) {
        if !self.phase.in_main() {
            tracing::debug!("envknob: entering main phase");
        }
        self.phase.set_in_main();
    }

    #[must_use]
    pub fn in_main(&self) -> bool {
        self.phase.in_main()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self, name: &str) -> String {
        self.source.get(name).unwrap_or_default()
    }

    fn or_fail<T>(&self, result: KnobResult<T>) -> T {
        result.unwrap_or_else(|err| self.policy.fail(&err))
    }

    // --- Accessors ---

    /// Returns the raw value of `name`, empty if unset.
    ///
    /// A non-empty value is recorded as in use; an empty one clears any
    /// earlier record.
    pub fn string(&self, name: &str) -> String {
        let mut state = self.lock();
        let value = self.read(name);
        state.store.observe(name, &value);
        drop(state);
        tracing::trace!(knob = name, value = %value, "envknob: read string");
        value
    }

    fn try_bool_or(&self, name: &str, implicit: bool) -> KnobResult<bool> {
        Ok(self.try_lookup_bool(name)?.unwrap_or(implicit))
    }

    /// Returns the boolean value of `name`, `false` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] for a malformed value.
    pub fn try_bool(&self, name: &str) -> KnobResult<bool> {
        self.try_bool_or(name, false)
    }

    /// Returns the boolean value of `name`, `false` if unset.
    ///
    /// A malformed value is fatal.
    pub fn bool(&self, name: &str) -> bool {
        self.or_fail(self.try_bool(name))
    }

    /// Like [`Self::try_bool`] but `true` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] for a malformed value.
    pub fn try_bool_default_true(&self, name: &str) -> KnobResult<bool> {
        self.try_bool_or(name, true)
    }

    /// Like [`Self::bool`] but `true` if unset.
    pub fn bool_default_true(&self, name: &str) -> bool {
        self.or_fail(self.try_bool_default_true(name))
    }

    /// Returns the boolean value of `name`, or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] for a malformed value.
    pub fn try_lookup_bool(&self, name: &str) -> KnobResult<Option<bool>> {
        self.phase.assert_not_in_init(name);
        let mut state = self.lock();
        let value = self.read(name);
        if value.is_empty() {
            return Ok(None);
        }
        let parsed = parse_bool(name, &value)?;
        state.store.observe(name, format_bool(parsed));
        Ok(Some(parsed))
    }

    /// Returns the boolean value of `name`, or `None` if unset.
    ///
    /// A malformed value is fatal.
    pub fn lookup_bool(&self, name: &str) -> Option<bool> {
        self.or_fail(self.try_lookup_bool(name))
    }

    /// Tri-state form of [`Self::try_lookup_bool`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] for a malformed value.
    pub fn try_opt_bool(&self, name: &str) -> KnobResult<OptBool> {
        self.try_lookup_bool(name).map(OptBool::from)
    }

    /// Tri-state form of [`Self::lookup_bool`].
    pub fn opt_bool(&self, name: &str) -> OptBool {
        self.or_fail(self.try_opt_bool(name))
    }

    /// Returns the integer value of `name`, or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidInt`] for a malformed value.
    pub fn try_lookup_int(&self, name: &str) -> KnobResult<Option<i64>> {
        self.phase.assert_not_in_init(name);
        let mut state = self.lock();
        let value = self.read(name);
        if value.is_empty() {
            return Ok(None);
        }
        let parsed = parse_int(name, &value)?;
        state.store.observe(name, &value);
        Ok(Some(parsed))
    }

    /// Returns the integer value of `name`, or `None` if unset.
    ///
    /// A malformed value is fatal.
    pub fn lookup_int(&self, name: &str) -> Option<i64> {
        self.or_fail(self.try_lookup_int(name))
    }

    // --- Registration ---

    /// Returns the shared string handle for `name`, creating it on first use.
    ///
    /// The handle follows later [`Self::setenv`] calls for the same name.
    pub fn register_string(&self, name: &str) -> StringHandle {
        let mut state = self.lock();
        if let Some(handle) = state.strings.get(name) {
            return handle.clone();
        }
        let value = self.read(name);
        if !value.is_empty() {
            state.store.observe(name, &value);
        }
        let handle = StringHandle::new(value);
        state.strings.insert(name.to_owned(), handle.clone());
        tracing::debug!(knob = name, "envknob: registered string");
        handle
    }

    /// Returns the shared boolean handle for `name`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] if the initial value is
    /// malformed. No handle is memoized in that case.
    pub fn try_register_bool(&self, name: &str) -> KnobResult<BoolHandle> {
        let mut state = self.lock();
        if let Some(handle) = state.bools.get(name) {
            return Ok(handle.clone());
        }
        let value = self.read(name);
        let parsed = parse_optional_bool(name, &value)?;
        state.store.observe(name, canonical(&value, parsed));
        let handle = BoolHandle::new(parsed);
        state.bools.insert(name.to_owned(), handle.clone());
        tracing::debug!(knob = name, value = parsed, "envknob: registered bool");
        Ok(handle)
    }

    /// Returns the shared boolean handle for `name`, creating it on first use.
    ///
    /// A malformed initial value is fatal.
    pub fn register_bool(&self, name: &str) -> BoolHandle {
        self.or_fail(self.try_register_bool(name))
    }

    /// Sets `name` to `value` in the source and pushes it into any handles
    /// registered for it. An empty value clears the knob.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KnobError::InvalidBool`] if a bool handle is
    /// registered for `name` and `value` is malformed. Nothing is changed in
    /// that case.
    pub fn try_setenv(&self, name: &str, value: &str) -> KnobResult<()> {
        let mut state = self.lock();
        let parsed_bool = if state.bools.contains_key(name) {
            Some(parse_optional_bool(name, value)?)
        } else {
            None
        };

        self.source.set(name, value);
        let recorded = parsed_bool.map_or(value, |b| canonical(value, b));
        state.store.observe(name, recorded);

        if let Some(handle) = state.strings.get(name) {
            handle.store(value);
        }
        if let (Some(handle), Some(parsed)) = (state.bools.get(name), parsed_bool) {
            handle.store(parsed);
        }
        tracing::debug!(knob = name, value = %value, "envknob: setenv");
        Ok(())
    }

    /// Sets `name` to `value`. See [`Self::try_setenv`].
    ///
    /// A malformed value for a registered bool knob is fatal.
    pub fn setenv(&self, name: &str, value: &str) {
        self.or_fail(self.try_setenv(name, value));
    }

    // --- Introspection ---

    /// Returns the active knobs in ascending name order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.lock().store.snapshot()
    }

    /// Calls `logf` with one `envknob: NAME="value"` line per active knob,
    /// in ascending name order.
    ///
    /// The set is captured under the lock; `logf` runs after it is released
    /// so it may itself read knobs.
    pub fn log_current(&self, logf: impl FnMut(&str)) {
        let store = self.lock().store.clone();
        store.log_with(logf);
    }

    /// [`Self::log_current`] into `tracing` at info level.
    pub fn log_current_tracing(&self) {
        self.log_current(|line| tracing::info!(target: "envknob", "{line}"));
    }
}

/// Parses a possibly empty bool value; empty is `false`.
fn parse_optional_bool(name: &str, value: &str) -> KnobResult<bool> {
    if value.is_empty() {
        Ok(false)
    } else {
        parse_bool(name, value)
    }
}

/// Value to record for a bool knob: empty stays empty (clears the record).
const fn canonical(raw: &str, parsed: bool) -> &'static str {
    if raw.is_empty() { "" } else { format_bool(parsed) }
}
