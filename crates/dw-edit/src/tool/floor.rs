//! Floor tool.

use dw_core::Floor;

use super::{Gesture, Op, Tool, ToolContext, ToolKind};

/// Paints every cell of the dragged rectangle with floor, tagged with the
/// selected room.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorTool;

impl Tool for FloorTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Floor
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        let room = ctx.world.rooms().selected().number;
        gesture
            .rect()
            .cells()
            .map(|pos| Op::Place {
                entity: Floor {
                    pos,
                    color: ctx.palette.floor_color,
                    material: ctx.palette.floor_material.clone(),
                    room,
                }
                .into(),
                room: Some(room),
            })
            .collect()
    }
}
