//! Persistent recent plugins list
//!
//! Tracks plugins saved or opened in the editor and persists them to disk.
//! Entries are stored in MRU (most recently used) order with a capacity
//! limit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use crate::collab::RecentRegistry;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 25;

/// A single entry in the recent plugins list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path to the plugin
    pub path: PathBuf,
    /// Timestamp when last used (Unix epoch seconds)
    pub used_at: u64,
    /// Number of times the plugin has been saved or opened
    #[serde(default)]
    pub use_count: u32,
}

impl RecentEntry {
    /// Create a new entry for the current time
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            used_at: now_epoch_secs(),
            use_count: 1,
        }
    }

    /// Update entry for re-use
    pub fn touch(&mut self) {
        self.used_at = now_epoch_secs();
        self.use_count += 1;
    }

    /// Check if the plugin file still exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent plugins list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentPlugins {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Recent plugin entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentPlugins {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load recent plugins from disk
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::recent_plugins_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut recent: Self = serde_json::from_str(&contents).unwrap_or_default();
                recent.prune_missing();
                recent
            }
            Err(_) => Self::default(),
        }
    }

    /// Save recent plugins to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::recent_plugins_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Add a plugin to the list (or update if already present)
    pub fn add(&mut self, path: PathBuf) {
        // Canonicalize path for consistent matching
        let canonical = path.canonicalize().unwrap_or(path);

        if let Some(idx) = self.find_index(&canonical) {
            // Update existing entry and move to front
            self.entries[idx].touch();
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(0, RecentEntry::new(canonical));
        }

        self.entries.truncate(MAX_ENTRIES);
    }

    /// Prune entries for plugins that no longer exist
    pub fn prune_missing(&mut self) {
        let original_len = self.entries.len();
        self.entries.retain(|e| e.exists());
        if self.entries.len() != original_len {
            tracing::debug!(
                "Pruned {} missing plugins from recent list",
                original_len - self.entries.len()
            );
        }
    }

    /// Find index of entry by path
    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}

/// Thread-safe [`RecentRegistry`] backed by the persistent list
///
/// Saves the list after every recorded plugin; a failed persist is logged
/// and otherwise ignored (the save that triggered it already succeeded).
pub struct PersistentRecent {
    inner: Mutex<RecentPlugins>,
}

impl PersistentRecent {
    /// Load the registry from disk
    pub fn load() -> Self {
        Self {
            inner: Mutex::new(RecentPlugins::load()),
        }
    }

    /// Snapshot the current entries, most recent first
    pub fn entries(&self) -> Vec<RecentEntry> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecentPlugins> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecentRegistry for PersistentRecent {
    fn record(&self, path: &Path) {
        let mut list = self.lock();
        list.add(path.to_path_buf());
        if let Err(e) = list.save() {
            tracing::warn!("Failed to persist recent plugins: {}", e);
        }
    }
}
