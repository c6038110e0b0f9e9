// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value grammars for typed knobs.
//!
//! ```text
//! bool (ASCII case-insensitive)
//!   true:  1 t true yes
//!   false: 0 f false no
//! int:   base-10 i64, optional sign, no whitespace
//! ```

use crate::error::{KnobError, KnobResult};

/// Parses `value` with the boolean grammar.
///
/// # Errors
///
/// Returns [`KnobError::InvalidBool`] naming `name` if `value` is not an
/// accepted spelling.
pub fn parse_bool(name: &str, value: &str) -> KnobResult<bool> {
    const TRUTHY: [&str; 4] = ["1", "t", "true", "yes"];
    const FALSY: [&str; 4] = ["0", "f", "false", "no"];

    if TRUTHY.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        Ok(true)
    } else if FALSY.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        Ok(false)
    } else {
        Err(KnobError::InvalidBool {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Canonical textual form of a boolean, as recorded in the knob store.
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Parses `value` as a base-10 integer.
///
/// # Errors
///
/// Returns [`KnobError::InvalidInt`] naming `name` if `value` is not a
/// base-10 integer that fits in an `i64`.
pub fn parse_int(name: &str, value: &str) -> KnobResult<i64> {
    value.parse::<i64>().map_err(|_| KnobError::InvalidInt {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}
