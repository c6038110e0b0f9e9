// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Registry::set_in_main()
//!   --> Command Dispatch: Get | Bool | Int | OptBool | Active | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use envknob::cli::global::GlobalOptions;
use envknob::cli::{self, Command};
use envknob::cmd::knob::{
    run_active_command, run_bool_command, run_get_command, run_int_command, run_opt_bool_command,
};
use envknob::config::Settings;
use envknob::config::loader::SettingsLoader;
use envknob::knob::Registry;
use envknob::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(?settings, "settings resolved");

    let knobs = Registry::process(settings.registry_options());
    knobs.set_in_main();

    // Returning (not exiting) lets `_log_guard` flush the log file.
    match dispatch_command(&cli, &knobs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if log_config.console_level().to_tracing_level().is_some() {
                tracing::error!("{e:#}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions, settings: &Settings) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(settings.logging.level);

    let log_file = global
        .log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| settings.logging.file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &cli::Cli, knobs: &Registry) -> envknob::error::Result<()> {
    let mut out = std::io::stdout().lock();
    match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        Some(Command::Get(args)) => run_get_command(args, knobs, &mut out),
        Some(Command::Bool(args)) => run_bool_command(args, knobs, &mut out),
        Some(Command::Int(args)) => run_int_command(args, knobs, &mut out),
        Some(Command::OptBool(args)) => run_opt_bool_command(args, knobs, &mut out),
        Some(Command::Active(args)) => run_active_command(args, knobs, &mut out),
        None => anyhow::bail!("no command specified, use --help for usage information"),
    }
}

fn build_settings_loader(global: &GlobalOptions) -> SettingsLoader {
    let mut loader = Settings::builder().add_toml_file_optional("envknob.toml");
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("ENVKNOB")
}

fn load_settings(global: &GlobalOptions) -> envknob::error::Result<Settings> {
    let mut loader = build_settings_loader(global);
    for (key, value) in global.overrides()? {
        loader = loader.set(key, value);
    }
    loader.build()
}
