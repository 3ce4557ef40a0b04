//! Shared utility functions for Armature crates

use anyhow::anyhow;
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// shell-level overrides (containers, CI sandboxes) stay consistent with
/// what child processes will see in $HOME.
pub fn get_home_dir() -> anyhow::Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}

/// Get the current user's login name
///
/// Read-only: only used to build a deployment host name. Falls back to
/// USERNAME on Windows, then to a neutral placeholder.
pub fn current_user() -> String {
    std::env::var("USER")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var("USERNAME").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "dev".to_string())
}
