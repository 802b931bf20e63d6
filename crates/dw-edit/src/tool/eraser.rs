//! Erasers: the placement geometry, removing instead of adding.
//!
//! Each eraser plans one remove per occupied key and skips empty ones.

use dw_core::Slot;

use super::{Gesture, Op, Tool, ToolContext, ToolKind};

/// Removes the walls along a dragged run.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallEraser;

impl Tool for WallEraser {
    fn kind(&self) -> ToolKind {
        ToolKind::EraseWall
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        gesture
            .line()
            .into_iter()
            .map(Slot::Wall)
            .filter(|slot| ctx.world.id_at(*slot).is_some())
            .map(Op::Remove)
            .collect()
    }
}

/// Removes floors, and the fixed items standing on them, across a dragged
/// rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorEraser;

impl Tool for FloorEraser {
    fn kind(&self) -> ToolKind {
        ToolKind::EraseFloor
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        gesture
            .rect()
            .cells()
            .flat_map(|pos| [Slot::Item(pos), Slot::Floor(pos)])
            .filter(|slot| ctx.world.id_at(*slot).is_some())
            .map(Op::Remove)
            .collect()
    }
}

/// Removes the door on the targeted edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoorEraser;

impl Tool for DoorEraser {
    fn kind(&self) -> ToolKind {
        ToolKind::EraseDoor
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        let slot = Slot::Door(gesture.door_edge());
        match ctx.world.id_at(slot) {
            Some(_) => vec![Op::Remove(slot)],
            None => Vec::new(),
        }
    }
}
