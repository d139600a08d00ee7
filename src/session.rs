//! Edit session model - the plugin buffer and its backing file state

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where the session's content lives on disk, if anywhere
///
/// A session starts `Unbound` and becomes `Bound` on the first successful
/// save or when an existing plugin is opened. The reverse transition does
/// not exist: once an editor is editing file X, that identity is permanent
/// for the session (a later open or save-as may rebind it to a different
/// file, but never back to unbound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackingFile {
    /// No backing file yet; every run executes the buffer directly
    Unbound,
    /// Backed by this path; runs must reconcile buffer vs. disk
    Bound(PathBuf),
}

impl BackingFile {
    /// The backing path, if bound
    pub fn path(&self) -> Option<&Path> {
        match self {
            BackingFile::Unbound => None,
            BackingFile::Bound(path) => Some(path),
        }
    }
}

/// Session state - the plugin text buffer and associated file metadata
///
/// The buffer is mutated only through [`EditSession::apply_edit`] (driven by
/// the UI layer's edit notifications) and [`EditSession::reload`] (driven by
/// a disk-authoritative run). Background tasks never touch the session
/// directly; they work from a [`SessionSnapshot`].
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Current editor content
    pub buffer: String,
    /// Backing file on disk (Unbound for new/unsaved plugins)
    pub backing: BackingFile,
    /// Timestamp of the last in-memory edit, non-decreasing within a session
    pub last_edit: SystemTime,
    /// Caret position in chars, clamped to the buffer length
    pub caret: usize,
    /// Display name, e.g. "Template.java"; drives the staged file name and
    /// the default save extension
    pub display_name: String,
}

/// Immutable copy of the session fields a background save/run task needs,
/// taken at dispatch time
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub buffer: String,
    pub backing_path: Option<PathBuf>,
    pub last_edit: SystemTime,
    pub caret: usize,
    pub display_name: String,
}

impl EditSession {
    /// Create an unbound session with initial content
    pub fn new(content: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            buffer: content.into(),
            backing: BackingFile::Unbound,
            last_edit: SystemTime::now(),
            caret: 0,
            display_name: display_name.into(),
        }
    }

    /// Load a session from an existing plugin file
    pub fn from_file(path: PathBuf) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let display_name = file_display_name(&path);
        Ok(Self {
            buffer: content,
            backing: BackingFile::Bound(path),
            last_edit: SystemTime::now(),
            caret: 0,
            display_name,
        })
    }

    /// Whether the session has a backing file
    pub fn is_bound(&self) -> bool {
        matches!(self.backing, BackingFile::Bound(_))
    }

    /// Replace the buffer from the UI layer and advance the edit timestamp
    ///
    /// `last_edit` never moves backwards, even if the system clock does.
    pub fn apply_edit(&mut self, text: String, caret: usize) {
        self.buffer = text;
        self.caret = caret.min(self.buffer.chars().count());
        self.last_edit = self.last_edit.max(SystemTime::now());
    }

    /// Replace the buffer with freshly-read disk content
    ///
    /// The caret is preserved numerically, clamped to the new content's
    /// length. `last_edit` is left untouched: a reload is not a keystroke.
    pub fn reload(&mut self, text: String, caret: usize) {
        self.caret = caret.min(text.chars().count());
        self.buffer = text;
    }

    /// Bind the session to a backing path (first save, save-as, or open)
    ///
    /// Also updates the display name to the file's name.
    pub fn bind(&mut self, path: PathBuf) {
        self.display_name = file_display_name(&path);
        self.backing = BackingFile::Bound(path);
    }

    /// Default extension for the save dialog, derived from the display name
    pub fn default_extension(&self) -> Option<String> {
        Path::new(&self.display_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
    }

    /// Snapshot the fields a background task needs
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            buffer: self.buffer.clone(),
            backing_path: self.backing.path().map(Path::to_path_buf),
            last_edit: self.last_edit,
            caret: self.caret,
            display_name: self.display_name.clone(),
        }
    }
}

fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
