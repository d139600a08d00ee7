//! Run orchestration
//!
//! A run decides which content is authoritative (buffer vs. disk), commits
//! buffer-authoritative edits durably to the backing path, stages the
//! payload into a disposable scratch copy, and invokes the execution
//! collaborator on it. Staged artifacts are removed on every exit path,
//! including collaborator failure and panics.

use std::fs;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::Sender;

use crate::collab::Collaborators;
use crate::error::EditorError;
use crate::messages::EditorMsg;
use crate::resolve::{self, Authority};
use crate::session::SessionSnapshot;
use crate::staging::StagedPlugin;

/// Body of a background run task
pub(crate) fn run_task(snap: SessionSnapshot, collab: Collaborators, tx: Sender<EditorMsg>) {
    // The staged TempDir is owned inside `execute`, so unwinding out of
    // the runner still removes the scratch artifacts.
    let result = catch_unwind(AssertUnwindSafe(|| execute(&snap, &collab, &tx)));

    let outcome = match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => {
            collab.reporter.report(&err);
            Err(err.to_string())
        }
        Err(_) => {
            tracing::error!("Run of '{}' panicked", snap.display_name);
            Err(format!("run of '{}' panicked", snap.display_name))
        }
    };
    let _ = tx.send(EditorMsg::RunCompleted(outcome));
}

fn execute(
    snap: &SessionSnapshot,
    collab: &Collaborators,
    tx: &Sender<EditorMsg>,
) -> Result<(), EditorError> {
    let payload = authoritative_payload(snap, tx)?;
    let staged = StagedPlugin::create(&payload, &snap.display_name)?;

    tracing::debug!("Running plugin from {}", staged.path().display());
    collab
        .runner
        .run(staged.path())
        .map_err(|cause| EditorError::Execution {
            plugin: snap.display_name.clone(),
            cause,
        })
}

/// Decide what to execute, syncing buffer and backing file along the way
///
/// - Unbound session: the buffer, as-is. No conflict is possible.
/// - Bound, buffer authoritative: the buffer, flushed to the backing path
///   first so running durably commits the edit (this also recreates a
///   backing file that vanished from disk).
/// - Bound, disk authoritative: the freshly-read disk content, sent back
///   to the UI thread as a [`EditorMsg::BufferReloaded`] before execution.
fn authoritative_payload(
    snap: &SessionSnapshot,
    tx: &Sender<EditorMsg>,
) -> Result<String, EditorError> {
    let Some(path) = &snap.backing_path else {
        return Ok(snap.buffer.clone());
    };

    let authority =
        resolve::against_disk(path, snap.last_edit).map_err(|e| EditorError::io(path, e))?;

    match authority {
        Authority::UseBuffer => {
            fs::write(path, &snap.buffer).map_err(|e| EditorError::io(path, e))?;
            Ok(snap.buffer.clone())
        }
        Authority::UseDisk => {
            let text = fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
            tracing::info!(
                "Backing file {} changed externally, reloading",
                path.display()
            );
            let _ = tx.send(EditorMsg::BufferReloaded {
                text: text.clone(),
                caret: snap.caret,
            });
            Ok(text)
        }
    }
}
