//! pluginpad - edit/save/run synchronization core for a plugin editor
//!
//! This crate provides the core types and logic that keep an in-memory
//! plugin buffer, its optional backing file on disk, and a transient
//! execution copy consistent across repeated "run" and "save" operations.
//! The text widget, interpreter, and window plumbing are external
//! collaborators consumed through the traits in [`collab`].

pub mod collab;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod error;
pub mod messages;
pub mod recent;
pub mod resolve;
pub mod run;
pub mod save;
pub mod session;
pub mod staging;
pub mod tracing;

// Re-export commonly used types
pub use collab::Collaborators;
pub use config::EditorConfig;
pub use editor::PluginEditor;
pub use error::EditorError;
pub use messages::{EditorEvent, EditorMsg, SaveOutcome};
pub use resolve::Authority;
pub use session::{BackingFile, EditSession, SessionSnapshot};
