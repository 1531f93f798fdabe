//! Locating kbsearch files on disk
//!
//! Catalog and config paths may be absolute, relative to the working
//! directory, or start with `~`. The default config file lives in the
//! platform config directory (`$XDG_CONFIG_HOME/kbsearch` on Linux).

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Expand a leading `~` to the home directory
///
/// Paths without a tilde, and `~user` forms, come back unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Turn a user-supplied path into an absolute one, anchored at the current
/// directory when relative
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(current_dir.join(expanded))
}

/// Platform config directory for kbsearch
///
/// Fails when no home directory can be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "kbsearch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine a config directory (is HOME set?)"))
}

/// `config.toml` inside [`get_config_dir`]
pub fn get_default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}
