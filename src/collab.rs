//! External collaborator interfaces and the implementations shipped with
//! the crate
//!
//! The core never talks to a UI toolkit, interpreter, or dialog directly;
//! everything crosses one of these traits. All collaborators must be
//! `Send + Sync` because save, run, and open each execute on their own
//! background thread.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::EditorError;

/// Interprets or compiles-and-runs the plugin file at `path`
pub trait PluginRunner: Send + Sync {
    fn run(&self, path: &Path) -> anyhow::Result<()>;
}

/// Native file selection; `None` means the user dismissed the dialog
pub trait FileDialog: Send + Sync {
    /// Choose a destination for a first-time save
    fn choose_save(
        &self,
        suggested_name: &str,
        start_dir: Option<&Path>,
        extension: Option<&str>,
    ) -> Option<PathBuf>;

    /// Choose an existing plugin to open
    fn choose_open(&self, start_dir: Option<&Path>) -> Option<PathBuf>;
}

/// Asks the user whether an existing file may be overwritten
pub trait ConfirmOverwrite: Send + Sync {
    fn confirm_overwrite(&self, path: &Path) -> bool;
}

/// Gate checked before any save ("can the current content even compile")
///
/// A `false` answer abandons the save silently; it is "not yet ready",
/// not an error.
pub trait Precondition: Send + Sync {
    fn can_proceed(&self) -> bool;
}

/// Records successfully saved plugins (see [`crate::recent`])
pub trait RecentRegistry: Send + Sync {
    fn record(&self, path: &Path);
}

/// Centralized sink for disk and execution faults
pub trait FailureReporter: Send + Sync {
    fn report(&self, error: &EditorError);
}

/// The full set of collaborators a [`crate::editor::PluginEditor`] needs
///
/// Cloning is cheap; clones are handed to background tasks.
#[derive(Clone)]
pub struct Collaborators {
    pub runner: Arc<dyn PluginRunner>,
    pub dialog: Arc<dyn FileDialog>,
    pub confirm: Arc<dyn ConfirmOverwrite>,
    pub precondition: Arc<dyn Precondition>,
    pub recent: Arc<dyn RecentRegistry>,
    pub reporter: Arc<dyn FailureReporter>,
}

// ============================================================================
// Shipped implementations
// ============================================================================

/// Native dialogs via rfd
pub struct NativeDialogs;

impl FileDialog for NativeDialogs {
    fn choose_save(
        &self,
        suggested_name: &str,
        start_dir: Option<&Path>,
        extension: Option<&str>,
    ) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new().set_file_name(suggested_name);
        if let Some(dir) = start_dir {
            dlg = dlg.set_directory(dir);
        }
        if let Some(ext) = extension {
            dlg = dlg.add_filter("Plugin", &[ext]);
        }
        dlg.save_file()
    }

    fn choose_open(&self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new();
        if let Some(dir) = start_dir {
            dlg = dlg.set_directory(dir);
        }
        dlg.pick_file()
    }
}

impl ConfirmOverwrite for NativeDialogs {
    fn confirm_overwrite(&self, path: &Path) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_title("Overwrite file?")
            .set_description(format!(
                "{} already exists. Overwrite it?",
                path.display()
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        answer == rfd::MessageDialogResult::Yes
    }
}

/// Failure reporter that routes everything to the tracing log
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn report(&self, error: &EditorError) {
        tracing::error!("Plugin editor failure: {}", error);
    }
}

/// Precondition that never blocks a save
///
/// Embedders with a compile check plug in their own implementation.
pub struct AlwaysReady;

impl Precondition for AlwaysReady {
    fn can_proceed(&self) -> bool {
        true
    }
}
