// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the `envknob` binary and for embedders building a registry.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envknob.toml (cwd, optional)
//! 3. --config FILE
//! 4. ENVKNOB__* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVKNOB__LOGGING__LEVEL=4            → logging.level = 4
//! ENVKNOB__KNOBS__ON_MALFORMED=panic   → knobs.on_malformed = "panic"
//! ```
//!
//! These settings configure the tool itself; they are not knobs and are
//! never recorded in a registry.

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::knob::{MalformedPolicy, RegistryOptions};
use crate::logging::LogLevel;

use loader::SettingsLoader;

/// Complete settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub knobs: KnobSettings,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Console log level (0-6).
    pub level: LogLevel,
    /// Optional log file, written at trace level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// `[knobs]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnobSettings {
    /// What the registry does with a malformed knob value.
    pub on_malformed: MalformedPolicy,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envknob::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("envknob.toml")
    ///     .with_env_prefix("ENVKNOB")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Registry options derived from these settings.
    ///
    /// The registry still starts in the init phase; the entry point decides
    /// when to leave it.
    #[must_use]
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions::builder()
            .with_policy(self.knobs.on_malformed)
            .build()
    }
}
