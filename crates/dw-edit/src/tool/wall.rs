//! Wall tool.

use dw_core::Wall;

use super::{Gesture, Op, Tool, ToolContext, ToolKind};

/// Draws a straight run of walls along the locked axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallTool;

impl Tool for WallTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Wall
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        gesture
            .line()
            .into_iter()
            .map(|edge| Op::Place {
                entity: Wall {
                    edge,
                    color: ctx.palette.wall_color,
                    material: ctx.palette.wall_material.clone(),
                }
                .into(),
                room: None,
            })
            .collect()
    }
}
