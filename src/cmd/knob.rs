// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Knob inspection commands.
//!
//! Handlers use the `try_*` accessors and return a malformed value as an
//! error, so `main` can report it and flush logging before exiting.

use std::collections::BTreeMap;
use std::io::Write;

use crate::cli::{ActiveArgs, BoolArgs, NameArgs};
use crate::error::Result;
use crate::knob::Registry;
use crate::knob::known;

/// Handler for `get`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_get_command(args: &NameArgs, knobs: &Registry, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", knobs.string(&args.name))?;
    Ok(())
}

/// Handler for `bool`.
///
/// # Errors
///
/// Returns an error if the value is malformed or writing to `out` fails.
pub fn run_bool_command(args: &BoolArgs, knobs: &Registry, out: &mut impl Write) -> Result<()> {
    let value = if args.default_true {
        knobs.try_bool_default_true(&args.name)?
    } else {
        knobs.try_bool(&args.name)?
    };
    writeln!(out, "{value}")?;
    Ok(())
}

/// Handler for `int`.
///
/// # Errors
///
/// Returns an error if the value is malformed or writing to `out` fails.
pub fn run_int_command(args: &NameArgs, knobs: &Registry, out: &mut impl Write) -> Result<()> {
    match knobs.try_lookup_int(&args.name)? {
        Some(value) => writeln!(out, "{value}")?,
        None => writeln!(out, "unset")?,
    }
    Ok(())
}

/// Handler for `opt-bool`.
///
/// # Errors
///
/// Returns an error if the value is malformed or writing to `out` fails.
pub fn run_opt_bool_command(
    args: &NameArgs,
    knobs: &Registry,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", knobs.try_opt_bool(&args.name)?)?;
    Ok(())
}

/// Handler for `active`.
///
/// Reads the well-known knobs plus any extra names, then lists what is set.
///
/// # Errors
///
/// Returns an error if a well-known boolean is malformed or writing to
/// `out` fails.
pub fn run_active_command(
    args: &ActiveArgs,
    knobs: &Registry,
    out: &mut impl Write,
) -> Result<()> {
    read_well_known(knobs)?;
    for name in &args.names {
        knobs.string(name);
    }
    knobs.log_current_tracing();

    if args.json {
        let active: BTreeMap<String, String> = knobs.snapshot().into_iter().collect();
        serde_json::to_writer_pretty(&mut *out, &active)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut written = Ok(());
    knobs.log_current(|line| {
        if written.is_ok() {
            written = writeln!(out, "{line}");
        }
    });
    written?;
    Ok(())
}

fn read_well_known(knobs: &Registry) -> Result<()> {
    for name in known::BOOLS {
        knobs.try_bool(name)?;
    }
    knobs.ssh_policy_file();
    Ok(())
}
