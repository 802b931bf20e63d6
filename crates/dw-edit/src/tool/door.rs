//! Door tool and hinge inference.

use dw_core::{Door, EdgeKey, Member, Pivot, Slot, World};

use super::{Gesture, Op, Tool, ToolContext, ToolKind};

/// Places a single door, or cycles the hinge of the door already there.
///
/// A wall on the target edge is removed first, and the new door joins the
/// room the wall belonged to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoorTool;

impl Tool for DoorTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Door
    }

    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op> {
        let world = ctx.world;
        let edge = gesture.door_edge();

        if let Some((id, existing)) = world.at(Slot::Door(edge)) {
            let mut entity = existing.clone();
            if let Some(door) = entity.as_door_mut() {
                door.cycle_hinge();
            }
            return vec![Op::Modify { id, entity }];
        }

        let mut ops = Vec::with_capacity(2);
        let mut room = None;
        if world.get_wall(edge).is_some() {
            room = world
                .rooms()
                .room_of(Member::Wall(edge))
                .map(|r| r.number);
            ops.push(Op::Remove(Slot::Wall(edge)));
        }
        let mut door = Door::new(edge, ctx.palette.door_color);
        door.pivot = infer_pivot(world, edge);
        ops.push(Op::Place {
            entity: door.into(),
            room,
        });
        ops
    }
}

/// Pick the hinge side of a new door from the walls beside it.
///
/// Looks at the parallel edges one step back and one step forward along the
/// run axis. When exactly one of them is walled the hinge goes on that side;
/// otherwise it defaults to left.
pub fn infer_pivot(world: &World, edge: EdgeKey) -> Pivot {
    let before = world.get_wall(edge.along(-1)).is_some();
    let after = world.get_wall(edge.along(1)).is_some();
    match (before, after) {
        (false, true) => Pivot::Right,
        _ => Pivot::Left,
    }
}
