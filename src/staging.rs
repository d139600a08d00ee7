//! Execution staging - disposable temp copies of the authoritative payload
//!
//! Every run stages its payload into a uniquely named subdirectory of the
//! scratch root, under the session's display name so the execution
//! collaborator can infer extension-sensitive behavior. Two concurrent
//! runs never collide. The subdirectory and file are removed when the
//! [`StagedPlugin`] is dropped, which happens on every exit path of a run.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config_paths;
use crate::error::EditorError;

/// A staged plugin file inside its own scratch subdirectory
///
/// Dropping this removes both the file and the directory.
#[derive(Debug)]
pub struct StagedPlugin {
    dir: TempDir,
    path: PathBuf,
}

impl StagedPlugin {
    /// Stage a payload under the default scratch root
    pub fn create(payload: &str, display_name: &str) -> Result<Self, EditorError> {
        Self::create_in(&config_paths::scratch_dir(), payload, display_name)
    }

    /// Stage a payload under an explicit scratch root
    pub fn create_in(root: &Path, payload: &str, display_name: &str) -> Result<Self, EditorError> {
        fs::create_dir_all(root).map_err(|e| EditorError::io(root, e))?;

        let dir = tempfile::Builder::new()
            .prefix("plugin-")
            .tempdir_in(root)
            .map_err(|e| EditorError::io(root, e))?;

        let path = dir.path().join(staged_file_name(display_name));
        fs::write(&path, payload).map_err(|e| EditorError::io(&path, e))?;

        tracing::debug!("Staged plugin at {}", path.display());
        Ok(Self { dir, path })
    }

    /// Path of the staged file, handed to the execution collaborator
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The scratch subdirectory containing the staged file
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Reduce a display name to a bare file name for staging
///
/// Display names come from the UI layer; path separators in them must not
/// let the staged file escape its scratch subdirectory.
fn staged_file_name(display_name: &str) -> OsString {
    Path::new(display_name)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("plugin.txt"))
}
