//! Editing engine for Dungeonwright worlds.
//!
//! Tools turn drag gestures into planned operations; the [`Editor`] executes
//! them against a [`dw_core::World`] and records the result as reversible
//! [`Command`]s in a bounded [`History`].

/// Reversible edit commands.
pub mod command;
/// Session configuration.
pub mod config;
/// The editing session.
pub mod editor;
/// Error types for the editing engine.
pub mod error;
/// Undo/redo log.
pub mod history;
/// Drag tools and the tool state machine.
pub mod tool;

/// Re-export of [`command::Command`].
pub use command::Command;
/// Re-export configuration types.
pub use config::{EditorConfig, Palette};
/// Re-export of [`editor::Editor`].
pub use editor::Editor;
/// Re-export error types.
pub use error::{EditError, EditResult};
/// Re-export of [`history::History`].
pub use history::History;
/// Re-export tool types.
pub use tool::{Anchor, Gesture, Op, PreviewItem, Tool, ToolContext, ToolEngine, ToolKind};
