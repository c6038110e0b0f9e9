// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.

use clap::Parser;
use envknob::cli::{Cli, Command};

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envknob"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_get() {
    let cli = Cli::try_parse_from(["envknob", "get", "TS_DEBUG_SSH_POLICY_FILE"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r#"
    Some(
        Get(
            NameArgs {
                name: "TS_DEBUG_SSH_POLICY_FILE",
            },
        ),
    )
    "#);
}

#[test]
fn cli_opt_bool_kebab_case() {
    let cli = Cli::try_parse_from(["envknob", "opt-bool", "TS_FLAG"]).unwrap();
    assert!(matches!(cli.command, Some(Command::OptBool(ref a)) if a.name == "TS_FLAG"));
}

#[test]
fn cli_active_with_names() {
    let cli = Cli::try_parse_from(["envknob", "active", "TS_A", "TS_B"]).unwrap();
    match cli.command {
        Some(Command::Active(args)) => {
            assert!(!args.json);
            assert_eq!(args.names, ["TS_A", "TS_B"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_get_requires_name() {
    assert!(Cli::try_parse_from(["envknob", "get"]).is_err());
}

#[test]
fn cli_repeated_set() {
    let cli = Cli::try_parse_from([
        "envknob",
        "-s",
        "logging.level=4",
        "--set",
        "knobs.on_malformed=panic",
        "version",
    ])
    .unwrap();
    assert_eq!(
        cli.global.overrides().unwrap(),
        [("logging.level", "4"), ("knobs.on_malformed", "panic")]
    );
}
