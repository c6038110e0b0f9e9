// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            KnobError
//!               |
//!     +---------+----------+
//!     |         |          |
//!     v         v          v
//! InvalidBool InvalidInt  Config
//! {name,value}{name,value} Box<ConfigError>
//!
//! ConfigError  Load, InvalidValue
//! ```
//!
//! Absent knobs are never errors. A present but malformed value is, and the
//! registry's `MalformedPolicy` decides whether it terminates the process.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`KnobError`].
pub type KnobResult<T> = std::result::Result<T, KnobError>;

/// Knob parsing and configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnobError {
    /// A boolean knob was set to something outside the boolean grammar.
    #[error("invalid boolean environment variable {name} value {value:?}")]
    InvalidBool { name: String, value: String },

    /// An integer knob was set to something that is not a base-10 integer.
    #[error("invalid integer environment variable {name}: {value:?}")]
    InvalidInt { name: String, value: String },

    /// Settings could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl KnobError {
    /// Name of the offending knob, if the error concerns one.
    #[must_use]
    pub fn knob_name(&self) -> Option<&str> {
        match self {
            Self::InvalidBool { name, .. } | Self::InvalidInt { name, .. } => Some(name),
            Self::Config(_) => None,
        }
    }
}

impl From<ConfigError> for KnobError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The layered sources could not be merged or deserialized.
    #[error("failed to load settings: {0}")]
    Load(String),

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
