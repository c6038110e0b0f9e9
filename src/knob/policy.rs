// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! What happens when a knob is set to a malformed value.

use serde::{Deserialize, Serialize};

use crate::error::KnobError;

/// Handling of malformed knob values by the non-`try_` accessors.
///
/// Both variants are fatal to the caller. Code that wants to recover uses
/// the `try_*` accessors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Report the diagnostic and exit the process with status 1.
    ///
    /// Exiting skips destructors, so buffered writers such as a
    /// non-blocking log file are not flushed. Entry points that own a
    /// `LogGuard` should use the `try_*` accessors and return the error.
    #[default]
    Exit,
    /// Panic with the diagnostic.
    Panic,
}

impl MalformedPolicy {
    /// Terminates according to the policy.
    ///
    /// `Exit` reports through `tracing` when a subscriber is installed and
    /// on stderr otherwise, exactly once.
    ///
    /// # Panics
    ///
    /// With [`MalformedPolicy::Panic`], always.
    #[track_caller]
    pub fn fail(self, err: &KnobError) -> ! {
        match self {
            Self::Exit => {
                if tracing::dispatcher::has_been_set() {
                    tracing::error!(knob = err.knob_name().unwrap_or_default(), "{err}");
                } else {
                    eprintln!("{err}");
                }
                std::process::exit(1)
            }
            Self::Panic => panic!("{err}"),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Panic => "panic",
        }
    }
}

impl std::fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
