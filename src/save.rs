//! Save coordination
//!
//! Persists the buffer to a stable location, establishing that location
//! interactively at most once per session. Runs on its own background
//! thread so a slow write never blocks input; the chosen path travels back
//! to the UI thread as [`EditorMsg::PathBound`] and is applied there.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::collab::Collaborators;
use crate::error::EditorError;
use crate::messages::{EditorMsg, SaveOutcome};
use crate::session::SessionSnapshot;

/// Body of a background save task
pub(crate) fn save_task(
    snap: SessionSnapshot,
    start_dir: Option<PathBuf>,
    collab: Collaborators,
    tx: Sender<EditorMsg>,
) {
    let outcome = match persist(&snap, start_dir.as_deref(), &collab, &tx) {
        Ok(outcome) => outcome,
        Err(err) => {
            collab.reporter.report(&err);
            SaveOutcome::Failed(err.to_string())
        }
    };
    let _ = tx.send(EditorMsg::SaveCompleted(outcome));
}

fn persist(
    snap: &SessionSnapshot,
    start_dir: Option<&Path>,
    collab: &Collaborators,
    tx: &Sender<EditorMsg>,
) -> Result<SaveOutcome, EditorError> {
    if !collab.precondition.can_proceed() {
        tracing::debug!("Save abandoned: content not ready");
        return Ok(SaveOutcome::NotReady);
    }

    let path = match &snap.backing_path {
        Some(path) => path.clone(),
        None => {
            let Some(path) = resolve_target(snap, start_dir, collab) else {
                return Ok(SaveOutcome::Cancelled);
            };
            // One-way transition from unsaved to saved; every later save
            // reuses this path without prompting.
            let _ = tx.send(EditorMsg::PathBound(path.clone()));
            path
        }
    };

    fs::write(&path, &snap.buffer).map_err(|e| EditorError::io(&path, e))?;
    collab.recent.record(&path);
    tracing::info!("Saved plugin to {}", path.display());
    Ok(SaveOutcome::Saved(path))
}

/// Interactively resolve a destination for a first-time save
///
/// Returns `None` when the user dismisses the dialog or declines to
/// overwrite an existing file.
fn resolve_target(
    snap: &SessionSnapshot,
    start_dir: Option<&Path>,
    collab: &Collaborators,
) -> Option<PathBuf> {
    let extension = Path::new(&snap.display_name)
        .extension()
        .map(|e| e.to_string_lossy().to_string());

    let chosen = collab
        .dialog
        .choose_save(&snap.display_name, start_dir, extension.as_deref())?;
    let chosen = ensure_extension(chosen, extension.as_deref());

    if chosen.exists() && !collab.confirm.confirm_overwrite(&chosen) {
        return None;
    }
    Some(chosen)
}

/// Append the default extension if the user-entered name lacks it
fn ensure_extension(path: PathBuf, extension: Option<&str>) -> PathBuf {
    let Some(ext) = extension else {
        return path;
    };
    if path.extension().and_then(|e| e.to_str()) == Some(ext) {
        return path;
    }
    let mut name = path.into_os_string();
    name.push(format!(".{}", ext));
    PathBuf::from(name)
}
