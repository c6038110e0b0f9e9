// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the knob registry.
//!
//! Exercises the public API the way a service would: one registry built at
//! startup, shared across threads, inspected for support sessions.

use std::sync::Arc;

use envknob::error::KnobError;
use envknob::knob::{MalformedPolicy, MapSource, OptBool, Registry, RegistryOptions};

fn ready(vars: &[(&str, &str)]) -> Registry {
    let options = RegistryOptions::builder()
        .with_policy(MalformedPolicy::Panic)
        .with_ready(true)
        .build();
    Registry::with_options(MapSource::from_pairs(vars.iter().copied()), options)
}

fn lines(knobs: &Registry) -> Vec<String> {
    let mut lines = Vec::new();
    knobs.log_current(|line| lines.push(line.to_owned()));
    lines
}

// =============================================================================
// Snapshot semantics
// =============================================================================

#[test]
fn snapshot_tracks_only_active_knobs() {
    let knobs = ready(&[("TS_A", "1")]);
    knobs.string("TS_A");
    assert_eq!(lines(&knobs), ["envknob: TS_A=\"1\""]);

    knobs.setenv("TS_A", "");
    knobs.string("TS_A");
    assert!(lines(&knobs).is_empty());
}

#[test]
fn snapshot_is_sorted_regardless_of_read_order() {
    let knobs = ready(&[("TS_C", "c"), ("TS_A", "a"), ("TS_B", "b")]);
    for name in ["TS_C", "TS_A", "TS_B"] {
        knobs.string(name);
    }
    insta::assert_snapshot!(lines(&knobs).join("\n"), @r#"
    envknob: TS_A="a"
    envknob: TS_B="b"
    envknob: TS_C="c"
    "#);
}

#[test]
fn log_callback_may_read_knobs() {
    let knobs = ready(&[("TS_A", "a"), ("TS_B", "b")]);
    knobs.string("TS_A");
    let mut seen = Vec::new();
    knobs.log_current(|line| {
        seen.push(line.to_owned());
        knobs.string("TS_B");
    });
    assert_eq!(seen, ["envknob: TS_A=\"a\""]);
    assert_eq!(knobs.snapshot().len(), 2);
}

// =============================================================================
// Typed accessors
// =============================================================================

#[test]
fn unset_bool_defaults() {
    let knobs = ready(&[]);
    assert!(!knobs.bool("UNSET_KNOB"));
    assert!(knobs.bool_default_true("UNSET_KNOB"));
    assert_eq!(knobs.lookup_bool("UNSET_KNOB"), None);
    assert_eq!(knobs.opt_bool("UNSET_KNOB"), OptBool::Unset);
    assert!(knobs.snapshot().is_empty());
}

#[test]
fn truthy_spellings_are_canonicalized() {
    for raw in ["1", "true", "TRUE", "t", "yes"] {
        let knobs = ready(&[("TS_FLAG", raw)]);
        assert!(knobs.bool("TS_FLAG"), "{raw}");
        assert_eq!(knobs.snapshot(), [("TS_FLAG".to_string(), "true".to_string())]);
    }
}

#[test]
fn explicit_false_is_present() {
    let knobs = ready(&[("TS_FLAG", "false")]);
    assert_eq!(knobs.lookup_bool("TS_FLAG"), Some(false));
    assert_eq!(knobs.opt_bool("TS_FLAG"), OptBool::False);
}

#[test]
fn integers_round_trip() {
    for value in [0_i64, 1, -1, 1280, i64::MAX, i64::MIN] {
        let raw = value.to_string();
        let knobs = ready(&[("TS_INT", raw.as_str())]);
        assert_eq!(knobs.lookup_int("TS_INT"), Some(value));
        assert_eq!(knobs.snapshot(), [("TS_INT".to_string(), raw.clone())]);
    }
}

#[test]
fn out_of_range_integer_is_an_error() {
    let knobs = ready(&[("TS_INT", "9223372036854775808")]);
    assert_eq!(
        knobs.try_lookup_int("TS_INT"),
        Err(KnobError::InvalidInt {
            name: "TS_INT".to_string(),
            value: "9223372036854775808".to_string(),
        })
    );
}

// =============================================================================
// SSH server scenario
// =============================================================================

#[test]
fn can_sshd_follows_disable_knob() {
    let knobs = ready(&[]);
    assert!(knobs.can_sshd());

    knobs.setenv("TS_DISABLE_SSH_SERVER", "true");
    assert!(!knobs.can_sshd());
}

#[test]
#[should_panic(expected = "invalid boolean environment variable TS_DISABLE_SSH_SERVER value \"banana\"")]
fn can_sshd_aborts_on_garbage() {
    let knobs = ready(&[("TS_DISABLE_SSH_SERVER", "banana")]);
    let _ = knobs.can_sshd();
}

// =============================================================================
// Registered handles
// =============================================================================

#[test]
fn registered_handles_share_identity_across_threads() {
    let knobs = Arc::new(ready(&[("TS_NAME", "a"), ("TS_ON", "0")]));

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let knobs = Arc::clone(&knobs);
            std::thread::spawn(move || (knobs.register_string("TS_NAME"), knobs.register_bool("TS_ON")))
        })
        .collect();
    let handles: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();

    let (first_name, first_on) = &handles[0];
    for (name, on) in &handles {
        assert!(name.ptr_eq(first_name));
        assert!(on.ptr_eq(first_on));
    }

    knobs.setenv("TS_NAME", "b");
    knobs.setenv("TS_ON", "1");
    for (name, on) in &handles {
        assert_eq!(name.get(), "b");
        assert!(on.get());
    }
}

// =============================================================================
// Init phase
// =============================================================================

#[test]
#[should_panic(expected = "called before main")]
fn guarded_lookup_before_main_panics() {
    let knobs = Registry::new(MapSource::new());
    let _ = knobs.opt_bool("TS_FLAG");
}

#[test]
fn guarded_lookup_after_main_succeeds() {
    let knobs = Registry::new(MapSource::from_pairs([("TS_FLAG", "1")]));
    knobs.set_in_main();
    assert_eq!(knobs.opt_bool("TS_FLAG"), OptBool::True);
}
