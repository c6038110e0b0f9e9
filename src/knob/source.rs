// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where knob values come from.
//!
//! ```text
//! KnobSource (trait)
//!   ProcessEnv  overrides (RwLock<BTreeMap>) --> std::env::var
//!   MapSource   RwLock<BTreeMap> only
//! ```

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// A source of named string values.
///
/// `get` returns `None` for unset names. An empty value is treated the same
/// as an unset one by the registry.
pub trait KnobSource: Send + Sync {
    /// Reads the current value of `name`.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value` for subsequent reads. Empty clears it.
    fn set(&self, name: &str, value: &str);
}

/// The host process environment.
///
/// Values written through [`KnobSource::set`] go to an in-process override
/// layer that shadows the real environment, so the process environment
/// block itself is never mutated.
#[derive(Debug, Default)]
pub struct ProcessEnv {
    overrides: RwLock<BTreeMap<String, String>>,
}

impl ProcessEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KnobSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        let overrides = self
            .overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = overrides.get(name) {
            return Some(value.clone());
        }
        drop(overrides);
        // Non-UTF-8 values are treated as unset
        std::env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) {
        self.overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned(), value.to_owned());
    }
}

/// An in-memory source.
#[derive(Debug, Default)]
pub struct MapSource {
    vars: RwLock<BTreeMap<String, String>>,
}

impl MapSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with `vars`.
    #[must_use]
    pub fn from_pairs<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KnobSource for MapSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        let mut vars = self.vars.write().unwrap_or_else(PoisonError::into_inner);
        if value.is_empty() {
            vars.remove(name);
        } else {
            vars.insert(name.to_owned(), value.to_owned());
        }
    }
}
