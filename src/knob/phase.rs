// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init-phase tripwire.
//!
//! ```text
//! guarded --set_in_main()--> in main (one way)
//!   guarded accessor while guarded => panic
//! ```
//!
//! Typed lookups are not meaningful while statics and subsystems are still
//! being wired together, so they are refused until the entry point says
//! construction is done.

use std::sync::atomic::{AtomicBool, Ordering};

/// Write-once flag recording that the process has entered `main` proper.
#[derive(Debug, Default)]
pub struct InitPhase {
    in_main: AtomicBool,
}

impl InitPhase {
    #[must_use]
    pub const fn new(in_main: bool) -> Self {
        Self {
            in_main: AtomicBool::new(in_main),
        }
    }

    /// Marks construction as complete. Cannot be undone.
    pub fn set_in_main(&self) {
        self.in_main.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn in_main(&self) -> bool {
        self.in_main.load(Ordering::Acquire)
    }

    /// Panics if `name` is being checked before [`Self::set_in_main`].
    ///
    /// # Panics
    ///
    /// Always, while still in the init phase. This is a programming error,
    /// not a configuration one.
    #[track_caller]
    pub fn assert_not_in_init(&self, name: &str) {
        if self.in_main() {
            return;
        }
        panic!("envknob: check of {name} called before main");
    }
}
