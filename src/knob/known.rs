// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Well-known knobs with dedicated accessors.

use super::registry::Registry;

/// Permits use of work-in-progress code paths.
pub const USE_WIP_CODE: &str = "TAILSCALE_USE_WIP_CODE";
/// Disables the SSH server.
pub const DISABLE_SSH_SERVER: &str = "TS_DISABLE_SSH_SERVER";
/// Path to a development SSH policy file.
pub const DEBUG_SSH_POLICY_FILE: &str = "TS_DEBUG_SSH_POLICY_FILE";
/// Ignores the tailnet SSH policy during development.
pub const DEBUG_SSH_IGNORE_TAILNET_POLICY: &str = "TS_DEBUG_SSH_IGNORE_TAILNET_POLICY";
/// Opts out of log uploads and technical support.
pub const NO_LOGS_NO_SUPPORT: &str = "TS_NO_LOGS_NO_SUPPORT";

/// Well-known boolean knobs.
pub const BOOLS: [&str; 4] = [
    USE_WIP_CODE,
    DEBUG_SSH_IGNORE_TAILNET_POLICY,
    DISABLE_SSH_SERVER,
    NO_LOGS_NO_SUPPORT,
];

impl Registry {
    /// Whether work-in-progress code may be used.
    pub fn use_wip_code(&self) -> bool {
        self.bool(USE_WIP_CODE)
    }

    /// Whether the SSH server is allowed to run.
    ///
    /// If disabled, the server won't start and attempts to enable it fail.
    pub fn can_sshd(&self) -> bool {
        !self.bool(DISABLE_SSH_SERVER)
    }

    /// Path to the development SSH policy file, empty if none.
    pub fn ssh_policy_file(&self) -> String {
        self.string(DEBUG_SSH_POLICY_FILE)
    }

    pub fn ssh_ignore_tailnet_policy(&self) -> bool {
        self.bool(DEBUG_SSH_IGNORE_TAILNET_POLICY)
    }

    /// Whether the user opted out of log uploads and support.
    pub fn no_logs_no_support(&self) -> bool {
        self.bool(NO_LOGS_NO_SUPPORT)
    }

    /// Enables no-logs-no-support mode.
    pub fn set_no_logs_no_support(&self) {
        self.setenv(NO_LOGS_NO_SUPPORT, "true");
    }
}
