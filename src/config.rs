//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/pluginpad/config.yaml`. A config
//! only persists to the store path it was loaded from (or explicitly given);
//! a default-constructed config is in-memory only, so embedders and tests
//! never touch the user's config file by accident.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Directory the last plugin was saved to or opened from; seeds the
    /// file dialogs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_plugin_directory: Option<PathBuf>,

    /// Where this config is persisted; `None` keeps it in-memory only
    #[serde(skip)]
    store: Option<PathBuf>,
}

impl EditorConfig {
    /// Load config from the user config directory, or return defaults
    ///
    /// The returned config persists back to the same location on
    /// [`EditorConfig::save`].
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        let mut config = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Self::default()
        };

        config.store = Some(path);
        config
    }

    /// Config persisting to an explicit file (embedders and tests)
    pub fn stored_at(path: PathBuf) -> Self {
        Self {
            store: Some(path),
            ..Self::default()
        }
    }

    /// Save config to its store path
    ///
    /// Creates the parent directory if it doesn't exist. An in-memory
    /// config (no store path) is left as-is and the save succeeds.
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = &self.store else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_last_directory() {
        let config = EditorConfig::default();
        assert!(config.last_plugin_directory.is_none());
    }

    #[test]
    fn test_default_save_is_in_memory_noop() {
        let config = EditorConfig {
            last_plugin_directory: Some(PathBuf::from("/somewhere")),
            ..Default::default()
        };
        assert_eq!(config.save(), Ok(()));
    }

    #[test]
    fn test_stored_at_writes_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = EditorConfig::stored_at(path.clone());
        config.last_plugin_directory = Some(PathBuf::from("/home/user/plugins"));
        config.save().unwrap();

        let loaded: EditorConfig =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            loaded.last_plugin_directory,
            Some(PathBuf::from("/home/user/plugins"))
        );
    }

    #[test]
    fn test_store_path_does_not_serialize() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::stored_at(dir.path().join("config.yaml"));
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("store"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EditorConfig {
            last_plugin_directory: Some(PathBuf::from("/home/user/plugins")),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            loaded.last_plugin_directory,
            Some(PathBuf::from("/home/user/plugins"))
        );
    }

    #[test]
    fn test_empty_yaml_parses_to_defaults() {
        let loaded: EditorConfig = serde_yaml::from_str("{}").unwrap();
        assert!(loaded.last_plugin_directory.is_none());
    }
}
