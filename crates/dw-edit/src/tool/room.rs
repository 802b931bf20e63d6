//! Room tool.

use dw_core::{Bounds, CellPos, Direction, EdgeKey, Floor, Slot, Wall, World};

use super::{Gesture, Op, Tool, ToolContext, ToolKind};

/// Floors the dragged rectangle, walls its rim, and groups both into a new
/// room named after its number.
///
/// Rim edges that already hold a wall or a door are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomTool;

impl Tool for RoomTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Room
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        let palette = ctx.palette;
        let number = ctx.world.rooms().next_number();
        let rect = gesture.rect();

        let mut ops = vec![Op::CreateRoom {
            name: format!("Room {number}"),
            number,
        }];
        ops.extend(rect.cells().map(|pos| Op::Place {
            entity: Floor {
                pos,
                color: palette.floor_color,
                material: palette.floor_material.clone(),
                room: number,
            }
            .into(),
            room: Some(number),
        }));
        ops.extend(
            rim(&rect)
                .into_iter()
                .filter(|edge| is_open(ctx.world, *edge))
                .map(|edge| Op::Place {
                    entity: Wall {
                        edge,
                        color: palette.wall_color,
                        material: palette.wall_material.clone(),
                    }
                    .into(),
                    room: Some(number),
                }),
        );
        ops
    }
}

fn is_open(world: &World, edge: EdgeKey) -> bool {
    world.id_at(Slot::Wall(edge)).is_none() && world.id_at(Slot::Door(edge)).is_none()
}

/// The outward-facing edges around a rectangle: north and south rows, then
/// west and east columns.
pub fn rim(rect: &Bounds) -> Vec<EdgeKey> {
    let (min, max) = (rect.min, rect.max);
    let mut edges = Vec::new();
    for x in min.x..=max.x {
        edges.push(CellPos::new(x, min.y, min.z).edge(Direction::North));
    }
    for x in min.x..=max.x {
        edges.push(CellPos::new(x, min.y, max.z).edge(Direction::South));
    }
    for z in min.z..=max.z {
        edges.push(CellPos::new(min.x, min.y, z).edge(Direction::West));
    }
    for z in min.z..=max.z {
        edges.push(CellPos::new(max.x, min.y, z).edge(Direction::East));
    }
    edges
}
