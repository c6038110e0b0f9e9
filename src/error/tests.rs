// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, KnobError, KnobResult};

#[test]
fn test_invalid_bool_display() {
    let err = KnobError::InvalidBool {
        name: "TS_DISABLE_SSH_SERVER".to_string(),
        value: "banana".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r#"invalid boolean environment variable TS_DISABLE_SSH_SERVER value "banana""#
    );
}

#[test]
fn test_invalid_int_display() {
    let err = KnobError::InvalidInt {
        name: "TS_DEBUG_MTU".to_string(),
        value: "12x".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r#"invalid integer environment variable TS_DEBUG_MTU: "12x""#
    );
}

#[test]
fn test_config_error_wraps_into_knob_error() {
    let err: KnobError = ConfigError::InvalidValue {
        section: "logging".to_string(),
        key: "level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    }
    .into();

    assert!(err.knob_name().is_none());
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid value for 'level' in section '[logging]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_knob_name() {
    let err = KnobError::InvalidInt {
        name: "KNOB".to_string(),
        value: "x".to_string(),
    };
    assert_eq!(err.knob_name(), Some("KNOB"));
}

#[test]
fn test_knob_result_size() {
    // Config is boxed so the result stays two strings wide
    let size = std::mem::size_of::<KnobResult<()>>();
    assert!(size <= 56, "KnobResult<()> is {size} bytes, expected <= 56");
}
