// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envknob", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));

    let cli = Cli::try_parse_from(["envknob", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_bool_default_true() {
    let cli = Cli::try_parse_from(["envknob", "bool", "TS_FOO", "--default-true"]).unwrap();
    match cli.command {
        Some(Command::Bool(args)) => {
            assert_eq!(args.name, "TS_FOO");
            assert!(args.default_true);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envknob",
        "-l",
        "5",
        "-c",
        "/etc/envknob.toml",
        "--set",
        "knobs.on_malformed=panic",
        "active",
        "--json",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.config.as_deref(),
        Some(std::path::Path::new("/etc/envknob.toml"))
    );
    assert!(matches!(cli.command, Some(Command::Active(ref a)) if a.json));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envknob", "-l", "7", "version"]).is_err());
}

#[test]
fn test_overrides() {
    let global = GlobalOptions {
        options: vec!["logging.level = 4".to_string(), "a=b=c".to_string()],
        ..GlobalOptions::default()
    };
    assert_eq!(
        global.overrides().unwrap(),
        [("logging.level", "4"), ("a", "b=c")]
    );

    let bad = GlobalOptions {
        options: vec!["novalue".to_string()],
        ..GlobalOptions::default()
    };
    assert!(bad.overrides().is_err());
}
