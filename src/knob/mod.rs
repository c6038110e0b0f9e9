// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-variable tweakable debug settings.
//!
//! These are knobs used during development, or by users when asked to while
//! debugging something. They are not a stable interface.
//!
//! ```text
//!                Registry
//!                   |
//!     +------+------+------+-------+
//!     |      |      |      |       |
//!     v      v      v      v       v
//!  source  store  parse  handle  phase
//!  (env)  (active) (bool  (shared (init
//!                  /int)  cells)  guard)
//! ```
//!
//! # Example
//!
//! ```
//! use envknob::knob::{MapSource, Registry, RegistryOptions};
//!
//! let knobs = Registry::with_options(
//!     MapSource::from_pairs([("TS_DEBUG_MTU", "1280")]),
//!     RegistryOptions::default(),
//! );
//! knobs.set_in_main();
//!
//! assert_eq!(knobs.lookup_int("TS_DEBUG_MTU"), Some(1280));
//! assert!(!knobs.bool("TS_DEBUG_UNSET"));
//!
//! let mut lines = Vec::new();
//! knobs.log_current(|line| lines.push(line.to_owned()));
//! assert_eq!(lines, ["envknob: TS_DEBUG_MTU=\"1280\""]);
//! ```

pub mod handle;
pub mod known;
pub mod parse;
pub mod phase;
pub mod policy;
pub mod registry;
pub mod source;
pub mod store;
pub mod tristate;


pub use handle::{BoolHandle, StringHandle};
pub use policy::MalformedPolicy;
pub use registry::{Registry, RegistryOptions};
pub use source::{KnobSource, MapSource, ProcessEnv};
pub use tristate::OptBool;
