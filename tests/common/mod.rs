//! Shared fake collaborators for integration tests
//!
//! Note: Items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pluginpad::collab::{
    Collaborators, ConfirmOverwrite, FailureReporter, FileDialog, PluginRunner, Precondition,
    RecentRegistry,
};
use pluginpad::error::EditorError;
use pluginpad::{EditSession, EditorConfig, PluginEditor};

/// What the fake runner saw when it was invoked
#[derive(Debug, Clone)]
pub struct RunObservation {
    /// The staged path handed to the runner
    pub path: PathBuf,
    /// Content of the staged file at run time
    pub payload: String,
    /// Whether the staged file existed at run time
    pub existed: bool,
}

/// Runner that records every invocation and optionally fails
#[derive(Default)]
pub struct RecordingRunner {
    pub fail: bool,
    pub observations: Mutex<Vec<RunObservation>>,
}

impl RecordingRunner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn observations(&self) -> Vec<RunObservation> {
        self.observations.lock().unwrap().clone()
    }
}

impl PluginRunner for RecordingRunner {
    fn run(&self, path: &Path) -> anyhow::Result<()> {
        let observation = RunObservation {
            path: path.to_path_buf(),
            payload: std::fs::read_to_string(path).unwrap_or_default(),
            existed: path.exists(),
        };
        self.observations.lock().unwrap().push(observation);
        if self.fail {
            anyhow::bail!("interpreter rejected the plugin");
        }
        Ok(())
    }
}

/// Runner that panics mid-execution, recording the staged path first
#[derive(Default)]
pub struct PanickingRunner {
    pub observations: Mutex<Vec<PathBuf>>,
}

impl PanickingRunner {
    pub fn observations(&self) -> Vec<PathBuf> {
        self.observations.lock().unwrap().clone()
    }
}

impl PluginRunner for PanickingRunner {
    fn run(&self, path: &Path) -> anyhow::Result<()> {
        self.observations.lock().unwrap().push(path.to_path_buf());
        panic!("interpreter blew up");
    }
}

/// Dialog that answers from a script instead of prompting
///
/// Records the `start_dir` each call was seeded with.
#[derive(Default)]
pub struct ScriptedDialog {
    pub save_choice: Option<PathBuf>,
    pub open_choice: Option<PathBuf>,
    pub save_calls: AtomicUsize,
    pub open_calls: AtomicUsize,
    pub save_start_dirs: Mutex<Vec<Option<PathBuf>>>,
    pub open_start_dirs: Mutex<Vec<Option<PathBuf>>>,
}

impl ScriptedDialog {
    pub fn saving_to(path: PathBuf) -> Self {
        Self {
            save_choice: Some(path),
            ..Default::default()
        }
    }

    pub fn opening(path: PathBuf) -> Self {
        Self {
            open_choice: Some(path),
            ..Default::default()
        }
    }

    pub fn save_start_dirs(&self) -> Vec<Option<PathBuf>> {
        self.save_start_dirs.lock().unwrap().clone()
    }

    pub fn open_start_dirs(&self) -> Vec<Option<PathBuf>> {
        self.open_start_dirs.lock().unwrap().clone()
    }
}

impl FileDialog for ScriptedDialog {
    fn choose_save(
        &self,
        _suggested_name: &str,
        start_dir: Option<&Path>,
        _extension: Option<&str>,
    ) -> Option<PathBuf> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.save_start_dirs
            .lock()
            .unwrap()
            .push(start_dir.map(|d| d.to_path_buf()));
        self.save_choice.clone()
    }

    fn choose_open(&self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        self.open_start_dirs
            .lock()
            .unwrap()
            .push(start_dir.map(|d| d.to_path_buf()));
        self.open_choice.clone()
    }
}

/// Overwrite confirmation with a fixed answer
#[derive(Default)]
pub struct StaticConfirm {
    pub answer: bool,
    pub calls: AtomicUsize,
}

impl StaticConfirm {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ConfirmOverwrite for StaticConfirm {
    fn confirm_overwrite(&self, _path: &Path) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Precondition with a fixed answer
pub struct StaticPrecondition(pub bool);

impl Precondition for StaticPrecondition {
    fn can_proceed(&self) -> bool {
        self.0
    }
}

/// Registry that records every path handed to it
#[derive(Default)]
pub struct RecordingRecent {
    pub recorded: Mutex<Vec<PathBuf>>,
}

impl RecordingRecent {
    pub fn recorded(&self) -> Vec<PathBuf> {
        self.recorded.lock().unwrap().clone()
    }
}

impl RecentRegistry for RecordingRecent {
    fn record(&self, path: &Path) {
        self.recorded.lock().unwrap().push(path.to_path_buf());
    }
}

/// Reporter that records the display of every failure
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, error: &EditorError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}

/// Bundle of fakes plus the `Collaborators` view the editor consumes
pub struct TestCollab {
    pub runner: Arc<RecordingRunner>,
    pub dialog: Arc<ScriptedDialog>,
    pub confirm: Arc<StaticConfirm>,
    pub precondition: Arc<StaticPrecondition>,
    pub recent: Arc<RecordingRecent>,
    pub reporter: Arc<RecordingReporter>,
}

impl Default for TestCollab {
    fn default() -> Self {
        Self {
            runner: Arc::new(RecordingRunner::default()),
            dialog: Arc::new(ScriptedDialog::default()),
            confirm: Arc::new(StaticConfirm::accepting()),
            precondition: Arc::new(StaticPrecondition(true)),
            recent: Arc::new(RecordingRecent::default()),
            reporter: Arc::new(RecordingReporter::default()),
        }
    }
}

impl TestCollab {
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            runner: self.runner.clone(),
            dialog: self.dialog.clone(),
            confirm: self.confirm.clone(),
            precondition: self.precondition.clone(),
            recent: self.recent.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

/// Editor over the given session and fakes, with an in-memory config
pub fn test_editor(session: EditSession, collab: &TestCollab) -> PluginEditor {
    PluginEditor::with_config(session, EditorConfig::default(), collab.collaborators())
}
