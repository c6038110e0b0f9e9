// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers(&Registry, out)
//!   get, bool, int, opt-bool, active
//! ```

pub mod knob;
