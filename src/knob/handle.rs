// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identity-stable cells returned by knob registration.
//!
//! Clones share one cell. Only the registry writes to it, through
//! `Registry::setenv`; readers never need to take the registry lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared string value of a registered knob.
#[derive(Debug, Clone, Default)]
pub struct StringHandle(Arc<RwLock<String>>);

impl StringHandle {
    pub(crate) fn new(value: String) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Returns the current value. Empty if the knob is unset.
    #[must_use]
    pub fn get(&self) -> String {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns true if both handles refer to the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn store(&self, value: &str) {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        value.clone_into(&mut guard);
    }
}

/// Shared boolean value of a registered knob. Unset reads as `false`.
#[derive(Debug, Clone, Default)]
pub struct BoolHandle(Arc<AtomicBool>);

impl BoolHandle {
    pub(crate) fn new(value: bool) -> Self {
        Self(Arc::new(AtomicBool::new(value)))
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns true if both handles refer to the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn store(&self, value: bool) {
        self.0.store(value, Ordering::Release);
    }
}
