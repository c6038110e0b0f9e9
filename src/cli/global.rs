// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional settings file
//! --log-level N     ← Console verbosity (0-6)
//! --log-file FILE   ← Trace-level log file
//! --set KEY=VAL     ← Direct settings override
//!
//! Precedence: CLI flags > --set > env > --config > envknob.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to an additional TOML settings file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets a setting, such as 'knobs.on_malformed=panic'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Splits `--set` options into key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first option without an `=`.
    pub fn overrides(&self) -> crate::error::Result<Vec<(&str, &str)>> {
        self.options
            .iter()
            .map(|opt| {
                opt.split_once('=')
                    .map(|(k, v)| (k.trim(), v.trim()))
                    .ok_or_else(|| anyhow::anyhow!("invalid --set option '{opt}', expected KEY=VALUE"))
            })
            .collect()
    }
}
