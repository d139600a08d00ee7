//! Centralized configuration paths for pluginpad
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/pluginpad/`
//! - Windows: `%APPDATA%\pluginpad\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs, io,
    path::PathBuf,
};

const APP_DIR: &str = "pluginpad";

/// Base config directory for pluginpad
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/pluginpad`
///   - Else: `~/.config/pluginpad`
///
/// Windows:
///   - `%APPDATA%\pluginpad`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/pluginpad/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/pluginpad/recent.json`
pub fn recent_plugins_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("recent.json"))
}

/// `~/.config/pluginpad/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return its path
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "No config directory available")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Root directory for transient execution staging
///
/// Every run stages its payload in a uniquely named subdirectory of this
/// directory; the subdirectory is removed when the run completes.
pub fn scratch_dir() -> PathBuf {
    env::temp_dir().join(APP_DIR)
}
