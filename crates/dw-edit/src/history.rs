//! Undo/redo log.

use std::collections::VecDeque;

use dw_core::World;

use crate::command::Command;
use crate::error::EditResult;

/// Undo and redo stacks with a bounded depth.
///
/// Recording a new command discards every redo entry. When the undo stack
/// grows past `max_depth` the oldest entries are forgotten.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Command>,
    redo: Vec<Command>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

impl History {
    /// An empty log keeping at most `max_depth` entries (0 = unlimited).
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Push an already performed command.
    pub fn record(&mut self, command: Command) {
        tracing::debug!(label = %command.label(), edits = command.len(), "recorded");
        self.undo.push_back(command);
        self.redo.clear();
        self.trim();
    }

    /// Push several already performed commands as one entry.
    ///
    /// Returns false, recording nothing, when `commands` is empty.
    pub fn record_batch(&mut self, commands: Vec<Command>, label: impl Into<String>) -> bool {
        if commands.is_empty() {
            return false;
        }
        self.record(Command::Batch {
            label: label.into(),
            commands,
        });
        true
    }

    /// Revert the most recent entry. Returns false when there is none.
    pub fn undo(&mut self, world: &mut World) -> EditResult<bool> {
        let Some(command) = self.undo.pop_back() else {
            return Ok(false);
        };
        tracing::debug!(label = %command.label(), "undo");
        if let Err(e) = command.revert(world) {
            self.undo.push_back(command);
            return Err(e);
        }
        self.redo.push(command);
        Ok(true)
    }

    /// Re-apply the most recently undone entry. Returns false when there is
    /// none.
    pub fn redo(&mut self, world: &mut World) -> EditResult<bool> {
        let Some(command) = self.redo.pop() else {
            return Ok(false);
        };
        tracing::debug!(label = %command.label(), "redo");
        if let Err(e) = command.apply(world) {
            self.redo.push(command);
            return Err(e);
        }
        self.undo.push_back(command);
        self.trim();
        Ok(true)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Change the depth limit, trimming immediately if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        self.trim();
    }

    /// Whether [`History::undo`] would do anything.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether [`History::redo`] would do anything.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Label of the entry `undo` would revert.
    pub fn undo_label(&self) -> Option<String> {
        self.undo.back().map(Command::label)
    }

    /// Label of the entry `redo` would re-apply.
    pub fn redo_label(&self) -> Option<String> {
        self.redo.last().map(Command::label)
    }

    /// Number of undoable entries.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Number of redoable entries.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn trim(&mut self) {
        if self.max_depth == 0 {
            return;
        }
        while self.undo.len() > self.max_depth {
            if let Some(dropped) = self.undo.pop_front() {
                tracing::debug!(label = %dropped.label(), "history entry evicted");
            }
        }
    }
}
