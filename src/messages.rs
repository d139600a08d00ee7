//! Message types for the plugin editor core
//!
//! UI-toolkit callbacks are expressed as [`EditorEvent`] variants dispatched
//! into [`crate::editor::PluginEditor::handle_event`]; background tasks
//! answer with [`EditorMsg`] values over the editor's channel.

use std::path::PathBuf;

/// User-triggered events dispatched into the core
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// The text widget's content changed
    EditOccurred {
        /// The widget's current full text
        text: String,
        /// Caret position in chars
        caret: usize,
    },
    /// Run the current plugin
    RunRequested,
    /// Save the current plugin
    SaveRequested,
    /// Open an existing plugin via the file dialog
    OpenRequested,
}

/// Results posted back from background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// The disk content won a conflict; the buffer must be replaced
    BufferReloaded {
        text: String,
        /// Caret to preserve, clamped on apply
        caret: usize,
    },
    /// A save (or open) established the session's backing path
    PathBound(PathBuf),
    /// A save task finished
    SaveCompleted(SaveOutcome),
    /// A run task finished
    RunCompleted(Result<(), String>),
}

/// How a save attempt ended
///
/// Only `Failed` involves the failure reporter; `Cancelled` and `NotReady`
/// are silent non-errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Buffer written to this path and registered as a recent plugin
    Saved(PathBuf),
    /// Dialog dismissed or overwrite declined; nothing written
    Cancelled,
    /// The precondition collaborator said the content is not ready
    NotReady,
    /// The write failed; details went to the failure reporter
    Failed(String),
}
