//! The tool state machine: idle, or drawing one gesture.

use dw_core::CellPos;

use super::{Anchor, Gesture, Op, PreviewItem, ToolContext, ToolKind};
use crate::error::{EditError, EditResult};

/// Holds the active tool and at most one open gesture.
///
/// `update` only recomputes the preview; nothing reaches the world until the
/// ops returned by `finish` are executed.
#[derive(Debug, Clone)]
pub struct ToolEngine {
    active: ToolKind,
    gesture: Option<Gesture>,
    preview: Vec<PreviewItem>,
    max_cells: u64,
}

impl ToolEngine {
    /// An idle engine with the wall tool selected.
    pub fn new(max_cells: u64) -> Self {
        Self {
            active: ToolKind::default(),
            gesture: None,
            preview: Vec::new(),
            max_cells,
        }
    }

    /// The selected tool.
    pub fn active(&self) -> ToolKind {
        self.active
    }

    /// The open gesture, if drawing.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Whether a gesture is open.
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// The preview computed by the last `update`.
    pub fn preview(&self) -> &[PreviewItem] {
        &self.preview
    }

    /// Switch tools, cancelling any open gesture. Returns whether one was
    /// cancelled.
    pub fn select(&mut self, kind: ToolKind) -> bool {
        let cancelled = self.cancel();
        self.active = kind;
        cancelled
    }

    /// Open a gesture at `anchor`.
    pub fn start(&mut self, anchor: Anchor) -> EditResult<()> {
        if self.gesture.is_some() {
            return Err(EditError::GestureInProgress(self.active));
        }
        tracing::debug!(tool = %self.active, pos = %anchor.pos, edge = ?anchor.edge, "gesture started");
        self.gesture = Some(Gesture::new(anchor));
        self.preview.clear();
        Ok(())
    }

    /// Move the cursor and recompute the preview.
    ///
    /// Without an open gesture this returns an empty preview. An oversized
    /// gesture is reported and stays open.
    pub fn update(&mut self, pos: CellPos, ctx: &ToolContext<'_>) -> EditResult<&[PreviewItem]> {
        let Some(gesture) = self.gesture.as_mut() else {
            self.preview.clear();
            return Ok(&self.preview);
        };
        gesture.track(pos);
        let gesture = *gesture;
        self.preview.clear();
        self.check_size(&gesture)?;
        self.preview = self
            .active
            .tool()
            .plan(&gesture, ctx)
            .iter()
            .filter_map(|op| PreviewItem::from_op(op, ctx.world))
            .collect();
        Ok(&self.preview)
    }

    /// Close the gesture at `pos` and return the ops to commit.
    ///
    /// `None` when no gesture was open. An oversized gesture is discarded and
    /// reported.
    pub fn finish(&mut self, pos: CellPos, ctx: &ToolContext<'_>) -> EditResult<Option<Vec<Op>>> {
        let Some(mut gesture) = self.gesture.take() else {
            return Ok(None);
        };
        self.preview.clear();
        gesture.track(pos);
        self.check_size(&gesture)?;
        let ops = self.active.tool().plan(&gesture, ctx);
        tracing::debug!(tool = %self.active, ops = ops.len(), "gesture finished");
        Ok(Some(ops))
    }

    /// Drop the open gesture and its preview. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.preview.clear();
        let cancelled = self.gesture.take().is_some();
        if cancelled {
            tracing::debug!(tool = %self.active, "gesture cancelled");
        }
        cancelled
    }

    fn check_size(&self, gesture: &Gesture) -> EditResult<()> {
        let cells = self.active.reach(gesture);
        if self.max_cells > 0 && cells > self.max_cells {
            return Err(EditError::GestureTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }
}

impl Default for ToolEngine {
    fn default() -> Self {
        Self::new(10_000)
    }
}
