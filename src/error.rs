//! Error taxonomy for the plugin editor core
//!
//! Disk and execution faults are caught at the boundary of the background
//! task that performs them and routed to the failure reporter collaborator;
//! they never propagate to the UI thread. User cancellation and a failed
//! save precondition are silent outcomes, not errors (see
//! [`crate::messages::SaveOutcome`]).

use std::path::PathBuf;

/// Faults that reach the failure reporter
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Reading, writing, or inspecting a file failed
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The execution collaborator failed to run the staged plugin
    ///
    /// The underlying error is opaque to this core; whatever the
    /// interpreter/compiler reports is carried through as-is.
    #[error("plugin '{plugin}' failed to run: {cause:#}")]
    Execution {
        plugin: String,
        cause: anyhow::Error,
    },
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
