//! Reversible edits.
//!
//! Each command carries the data needed to replay and to invert one change.
//! Both directions are idempotent: applying an already applied command, or
//! reverting an already reverted one, leaves the world untouched.

use dw_core::{Entity, EntityId, Member, Placed, Room, RoomId, Slot, World};
use serde::{Deserialize, Serialize};

use crate::error::EditResult;

/// One undoable edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// An entity was placed, possibly displacing another on the same key.
    Place {
        /// The new entity, its id and room.
        placed: Placed,
        /// The entity it replaced.
        displaced: Option<Placed>,
    },
    /// An entity was removed.
    Remove {
        /// The removed entity, its id and room.
        removed: Placed,
    },
    /// An entity's data was edited in place.
    Modify {
        /// The edited entity.
        id: EntityId,
        /// Data before the edit.
        before: Entity,
        /// Data after the edit.
        after: Entity,
    },
    /// A room was created (empty).
    CreateRoom {
        /// The room as created.
        room: Room,
    },
    /// A room was deleted.
    DeleteRoom {
        /// The room with its members at deletion time.
        room: Room,
    },
    /// A key changed room.
    Assign {
        /// The key.
        member: Member,
        /// Its previous room.
        from: Option<RoomId>,
        /// Its new room.
        to: Option<RoomId>,
    },
    /// Several commands undone and redone as one.
    Batch {
        /// Menu label.
        label: String,
        /// The commands in execution order.
        commands: Vec<Command>,
    },
}

impl Command {
    /// Short description for undo/redo menus.
    pub fn label(&self) -> String {
        match self {
            Self::Place { placed, .. } => format!("place {}", placed.entity.kind()),
            Self::Remove { removed } => format!("remove {}", removed.entity.kind()),
            Self::Modify { after, .. } => format!("edit {}", after.kind()),
            Self::CreateRoom { room } => format!("create {}", room.name),
            Self::DeleteRoom { room } => format!("delete {}", room.name),
            Self::Assign { .. } => "assign room".to_string(),
            Self::Batch { label, .. } => label.clone(),
        }
    }

    /// Number of primitive edits, counting through batches.
    pub fn len(&self) -> usize {
        match self {
            Self::Batch { commands, .. } => commands.iter().map(Command::len).sum(),
            _ => 1,
        }
    }

    /// Whether this is an empty batch.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Perform (or redo) the edit.
    pub fn apply(&self, world: &mut World) -> EditResult<()> {
        match self {
            Self::Place { placed, .. } => {
                if world.entity(placed.id).is_none() {
                    world.restore(placed.clone())?;
                }
            }
            Self::Remove { removed } => take_if_live(world, removed),
            Self::Modify { id, after, .. } => {
                world.modify(*id, after.clone())?;
            }
            Self::CreateRoom { room } => {
                if world.rooms().room(&room.id).is_none() {
                    world.rooms_mut().insert_room(room.clone())?;
                }
            }
            Self::DeleteRoom { room } => {
                world.rooms_mut().take_room(&room.id);
            }
            Self::Assign { member, to, .. } => assign(world, *member, to.as_ref()),
            Self::Batch { commands, .. } => {
                for command in commands {
                    command.apply(world)?;
                }
            }
        }
        Ok(())
    }

    /// Undo the edit.
    pub fn revert(&self, world: &mut World) -> EditResult<()> {
        match self {
            Self::Place { placed, displaced } => {
                take_if_live(world, placed);
                if let Some(displaced) = displaced
                    && world.entity(displaced.id).is_none()
                {
                    world.restore(displaced.clone())?;
                }
            }
            Self::Remove { removed } => {
                if world.entity(removed.id).is_none() {
                    world.restore(removed.clone())?;
                }
            }
            Self::Modify { id, before, .. } => {
                world.modify(*id, before.clone())?;
            }
            Self::CreateRoom { room } => {
                world.rooms_mut().take_room(&room.id);
            }
            Self::DeleteRoom { room } => {
                if world.rooms().room(&room.id).is_none() {
                    world.rooms_mut().insert_room(room.clone())?;
                }
            }
            Self::Assign { member, from, .. } => assign(world, *member, from.as_ref()),
            Self::Batch { commands, .. } => {
                for command in commands.iter().rev() {
                    command.revert(world)?;
                }
            }
        }
        Ok(())
    }
}

fn take_if_live(world: &mut World, placed: &Placed) {
    if let Some(slot) = Slot::of(&placed.entity)
        && world.id_at(slot) == Some(placed.id)
    {
        world.take(slot);
    }
}

fn assign(world: &mut World, member: Member, room: Option<&RoomId>) {
    match room {
        Some(room) => {
            world.rooms_mut().add_to_room(room, member);
        }
        None => {
            world.rooms_mut().release(member);
        }
    }
}
