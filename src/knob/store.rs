// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The set of knobs currently in use.
//!
//! Holds the last non-empty raw value seen per knob. Observing an empty
//! value drops the entry, so the store is a snapshot of what is active
//! rather than a history.

use std::collections::BTreeMap;

/// Last observed non-empty value per knob, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct KnobStore {
    set: BTreeMap<String, String>,
}

impl KnobStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            set: BTreeMap::new(),
        }
    }

    /// Records the value seen for `name`. Empty removes it.
    pub fn observe(&mut self, name: &str, raw: &str) {
        if raw.is_empty() {
            self.set.remove(name);
        } else {
            self.set.insert(name.to_owned(), raw.to_owned());
        }
    }

    /// Returns the value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.set.get(name).map(String::as_str)
    }

    /// Returns all active knobs in ascending name order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.set
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Calls `logf` once per active knob, in ascending name order.
    pub fn log_with(&self, mut logf: impl FnMut(&str)) {
        for (name, value) in &self.set {
            logf(&format_line(name, value));
        }
    }
}

/// Formats a knob as `envknob: NAME="value"`.
#[must_use]
pub fn format_line(name: &str, value: &str) -> String {
    format!("envknob: {name}={value:?}")
}
