// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                     |
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + ENVKNOB__* layers |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------+
//!   |  knob   Registry, store, parse, handles |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! The entry point owns one [`knob::Registry`] per process and passes it to
//! whatever needs knob access.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod knob;
pub mod logging;
