// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envknob using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envknob [global options] <command>
//! get NAME
//! bool NAME [--default-true]
//! int NAME
//! opt-bool NAME
//! active [--json]
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Inspect environment debug knobs.
#[derive(Debug, Parser)]
#[command(
    name = "envknob",
    author,
    version,
    about = "Inspect environment debug knobs",
    long_about = "Reads environment-variable debug knobs the same way the \
                  services that use them do, and reports which ones are set.\n\n\
                  Malformed boolean or integer values are fatal, exactly as \
                  they would be at service startup.",
    after_help = "SETTINGS:\n\n\
                  envknob reads `envknob.toml` from the current directory if \
                  present, then any --config file, then ENVKNOB__SECTION__KEY \
                  environment variables, then --set overrides."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the raw value of a knob (empty if unset)
    Get(NameArgs),

    /// Prints a boolean knob
    Bool(BoolArgs),

    /// Prints an integer knob, or "unset"
    Int(NameArgs),

    /// Prints a boolean knob as true, false or unset
    OptBool(NameArgs),

    /// Reads the well-known knobs and lists every active one
    Active(ActiveArgs),

    /// Prints the version
    #[command(visible_alias = "-v")]
    Version,
}

/// A single knob name.
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Knob (environment variable) name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `bool`.
#[derive(Debug, Clone, Args)]
pub struct BoolArgs {
    /// Knob (environment variable) name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Treat an unset knob as true
    #[arg(long)]
    pub default_true: bool,
}

/// Arguments for `active`.
#[derive(Debug, Clone, Default, Args)]
pub struct ActiveArgs {
    /// Print a JSON object instead of log lines
    #[arg(long)]
    pub json: bool,

    /// Additional string knobs to read before listing
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

/// Parses the process arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
