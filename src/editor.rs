//! The plugin editor core
//!
//! [`PluginEditor`] owns the [`EditSession`] on the UI thread and dispatches
//! user events into background save/run/open tasks. Tasks receive an
//! immutable [`crate::session::SessionSnapshot`] at dispatch time and post
//! their results back over an internal channel; the UI thread applies them
//! by calling [`PluginEditor::poll`]. Nothing in this module touches a UI
//! toolkit.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

use crate::collab::Collaborators;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::messages::{EditorEvent, EditorMsg};
use crate::run::run_task;
use crate::save::save_task;
use crate::session::EditSession;

pub struct PluginEditor {
    /// The single mutable session; owned by the UI thread
    pub session: EditSession,
    config: EditorConfig,
    collab: Collaborators,
    msg_tx: Sender<EditorMsg>,
    msg_rx: Receiver<EditorMsg>,
}

impl PluginEditor {
    /// Create an editor around a session, loading persisted config
    pub fn new(session: EditSession, collab: Collaborators) -> Self {
        Self::with_config(session, EditorConfig::load(), collab)
    }

    /// Create an editor with an explicit config (embedders and tests)
    ///
    /// A default-constructed config has no store path, so path binds are
    /// tracked in-memory without touching the user's config file.
    pub fn with_config(session: EditSession, config: EditorConfig, collab: Collaborators) -> Self {
        let (msg_tx, msg_rx) = channel();
        Self {
            session,
            config,
            collab,
            msg_tx,
            msg_rx,
        }
    }

    /// Dispatch a user-triggered event into the core
    ///
    /// Edits apply synchronously. Run, save, and open each spawn one
    /// background thread and return its handle (callers may join it for
    /// shutdown or tests, or drop it - tasks always run to completion;
    /// there is no cancellation). Saves dispatched in rapid succession are
    /// not serialized against each other: each one snapshots the buffer at
    /// dispatch time.
    pub fn handle_event(&mut self, event: EditorEvent) -> Option<JoinHandle<()>> {
        match event {
            EditorEvent::EditOccurred { text, caret } => {
                self.session.apply_edit(text, caret);
                None
            }
            EditorEvent::RunRequested => {
                let snap = self.session.snapshot();
                let collab = self.collab.clone();
                let tx = self.msg_tx.clone();
                Some(std::thread::spawn(move || run_task(snap, collab, tx)))
            }
            EditorEvent::SaveRequested => {
                let snap = self.session.snapshot();
                let start_dir = self.config.last_plugin_directory.clone();
                let collab = self.collab.clone();
                let tx = self.msg_tx.clone();
                Some(std::thread::spawn(move || {
                    save_task(snap, start_dir, collab, tx)
                }))
            }
            EditorEvent::OpenRequested => {
                let start_dir = self.config.last_plugin_directory.clone();
                let collab = self.collab.clone();
                let tx = self.msg_tx.clone();
                Some(std::thread::spawn(move || open_task(start_dir, collab, tx)))
            }
        }
    }

    /// Drain pending task results, apply them to the session, and return
    /// them for status display
    ///
    /// Call this from the UI thread (e.g. once per frame or on a wakeup).
    pub fn poll(&mut self) -> Vec<EditorMsg> {
        let mut msgs = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.apply(&msg);
            msgs.push(msg);
        }
        msgs
    }

    /// Last directory a plugin was saved to or opened from
    pub fn last_plugin_directory(&self) -> Option<&PathBuf> {
        self.config.last_plugin_directory.as_ref()
    }

    fn apply(&mut self, msg: &EditorMsg) {
        match msg {
            EditorMsg::BufferReloaded { text, caret } => {
                self.session.reload(text.clone(), *caret);
            }
            EditorMsg::PathBound(path) => {
                self.session.bind(path.clone());
                self.config.last_plugin_directory = path.parent().map(|p| p.to_path_buf());
                if let Err(e) = self.config.save() {
                    tracing::warn!("Failed to persist config: {}", e);
                }
            }
            EditorMsg::SaveCompleted(outcome) => {
                tracing::debug!("Save completed: {:?}", outcome);
            }
            EditorMsg::RunCompleted(result) => {
                tracing::debug!("Run completed: {:?}", result);
            }
        }
    }
}

/// Body of a background open task
///
/// Dialog dismissal is silent; a read failure goes to the reporter. On
/// success the chosen path is bound and the disk content replaces the
/// buffer with the caret reset to the start.
fn open_task(start_dir: Option<PathBuf>, collab: Collaborators, tx: Sender<EditorMsg>) {
    let Some(path) = collab.dialog.choose_open(start_dir.as_deref()) else {
        return;
    };
    match fs::read_to_string(&path) {
        Ok(text) => {
            let _ = tx.send(EditorMsg::PathBound(path));
            let _ = tx.send(EditorMsg::BufferReloaded { text, caret: 0 });
        }
        Err(e) => {
            collab.reporter.report(&EditorError::io(path, e));
        }
    }
}
