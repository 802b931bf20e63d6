//! An editing session: a world, its history, and the tools that edit it.

use dw_core::{
    CellPos, Direction, EdgeKey, Member, Placed, Room, RoomId, Slot, World, WorldSnapshot,
};

use crate::command::Command;
use crate::config::{EditorConfig, Palette};
use crate::error::EditResult;
use crate::history::History;
use crate::tool::{Anchor, Op, PreviewItem, ToolContext, ToolEngine, ToolKind};

/// The editing session.
///
/// Every change to the world made through an `Editor` is recorded in its
/// history, so undo and redo restore the exact previous state, ids included.
#[derive(Debug)]
pub struct Editor {
    world: World,
    history: History,
    tools: ToolEngine,
    config: EditorConfig,
}

impl Editor {
    /// Start a session on an existing world.
    pub fn new(world: World, config: EditorConfig) -> Self {
        Self {
            world,
            history: History::new(config.history_depth),
            tools: ToolEngine::new(config.max_gesture_cells),
            config,
        }
    }

    /// The world being edited.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The undo/redo log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The tool state machine.
    pub fn tools(&self) -> &ToolEngine {
        &self.tools
    }

    /// Session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Colors and materials for new geometry.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.config.palette
    }

    /// Hand the world back, ending the session.
    pub fn into_world(self) -> World {
        self.world
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Switch tools, cancelling any open gesture.
    pub fn select_tool(&mut self, kind: ToolKind) -> bool {
        self.tools.select(kind)
    }

    /// Begin a gesture with the active tool.
    pub fn start(&mut self, pos: CellPos, edge: Option<Direction>) -> EditResult<()> {
        self.tools.start(Anchor { pos, edge })
    }

    /// Move the cursor; returns the preview of what `finish` would do.
    pub fn update(&mut self, pos: CellPos) -> EditResult<&[PreviewItem]> {
        let ctx = ToolContext {
            world: &self.world,
            palette: &self.config.palette,
        };
        self.tools.update(pos, &ctx)
    }

    /// Commit the gesture as one history entry.
    ///
    /// Returns false when no gesture was open or it changed nothing. If any
    /// step fails, the steps already taken are rolled back before the error
    /// is returned.
    pub fn finish(&mut self, pos: CellPos) -> EditResult<bool> {
        let kind = self.tools.active();
        let ctx = ToolContext {
            world: &self.world,
            palette: &self.config.palette,
        };
        let Some(ops) = self.tools.finish(pos, &ctx)? else {
            return Ok(false);
        };
        let commands = self.execute(ops)?;
        let recorded = self.history.record_batch(commands, kind.label());
        tracing::debug!(tool = %kind, recorded, "gesture committed");
        Ok(recorded)
    }

    /// Abandon the open gesture. Nothing is changed or recorded.
    pub fn cancel(&mut self) -> bool {
        self.tools.cancel()
    }

    fn execute(&mut self, ops: Vec<Op>) -> EditResult<Vec<Command>> {
        let mut done = Vec::with_capacity(ops.len());
        for op in ops {
            match self.run(op) {
                Ok(Some(command)) => done.push(command),
                Ok(None) => {}
                Err(e) => {
                    for command in done.iter().rev() {
                        if let Err(undo) = command.revert(&mut self.world) {
                            tracing::warn!(error = %undo, "rollback step failed");
                        }
                    }
                    return Err(e);
                }
            }
        }
        Ok(done)
    }

    fn run(&mut self, op: Op) -> EditResult<Option<Command>> {
        let command = match op {
            Op::CreateRoom { name, number } => {
                let room = Room::new(RoomId::generate(), name, number);
                self.world.rooms_mut().insert_room(room.clone())?;
                Some(Command::CreateRoom { room })
            }
            Op::Place { entity, room } => {
                let room_id = room
                    .and_then(|n| self.world.rooms().room_by_number(n))
                    .map(|r| r.id.clone());
                let placement = self.world.place(entity.clone(), room_id.as_ref())?;
                let room = Slot::of(&entity)
                    .and_then(|slot| self.world.rooms().room_of(slot.member()))
                    .map(|r| r.id.clone());
                Some(Command::Place {
                    placed: Placed {
                        id: placement.id,
                        entity,
                        room,
                    },
                    displaced: placement.displaced,
                })
            }
            Op::Remove(slot) => self
                .world
                .take(slot)
                .map(|removed| Command::Remove { removed }),
            Op::Modify { id, entity } => self
                .world
                .modify(id, entity.clone())?
                .map(|before| Command::Modify {
                    id,
                    before,
                    after: entity,
                }),
        };
        Ok(command)
    }

    // -----------------------------------------------------------------------
    // Undo / redo
    // -----------------------------------------------------------------------

    /// Revert the latest entry. Returns false when there is none.
    pub fn undo(&mut self) -> EditResult<bool> {
        self.tools.cancel();
        self.history.undo(&mut self.world)
    }

    /// Re-apply the latest undone entry. Returns false when there is none.
    pub fn redo(&mut self) -> EditResult<bool> {
        self.tools.cancel();
        self.history.redo(&mut self.world)
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Create an empty room (recorded).
    pub fn create_room(&mut self, name: impl Into<String>) -> RoomId {
        let room = self.world.rooms_mut().create_room(name).clone();
        let id = room.id.clone();
        self.history.record(Command::CreateRoom { room });
        id
    }

    /// Delete a room (recorded). Returns false for the default room or an
    /// unknown id.
    pub fn delete_room(&mut self, id: &RoomId) -> bool {
        match self.world.rooms_mut().take_room(id) {
            Some(room) => {
                self.history.record(Command::DeleteRoom { room });
                true
            }
            None => false,
        }
    }

    /// Make a room current for the floor tool. Not recorded.
    pub fn select_room(&mut self, id: &RoomId) -> bool {
        self.world.rooms_mut().select_room(id)
    }

    /// Rename a room. Not recorded.
    pub fn rename_room(&mut self, id: &RoomId, name: impl Into<String>) -> bool {
        self.world.rooms_mut().rename_room(id, name)
    }

    /// Move a key into a room (recorded). Returns false for an unknown room
    /// or a key already there.
    pub fn assign_to_room(&mut self, member: Member, id: &RoomId) -> bool {
        let member = member.canonical();
        let from = self.world.rooms().room_of(member).map(|r| r.id.clone());
        if from.as_ref() == Some(id) || !self.world.rooms_mut().add_to_room(id, member) {
            return false;
        }
        self.history.record(Command::Assign {
            member,
            from,
            to: Some(id.clone()),
        });
        true
    }

    // -----------------------------------------------------------------------
    // Door properties
    // -----------------------------------------------------------------------

    /// Open or close a door (recorded). Returns false if there is no door or
    /// it is locked.
    pub fn toggle_door(&mut self, edge: EdgeKey) -> EditResult<bool> {
        self.edit_door(edge, |door| door.toggle_open())
    }

    /// Lock or unlock a door (recorded). Locking closes it. Returns false if
    /// there is no door or nothing changed.
    pub fn set_door_locked(&mut self, edge: EdgeKey, locked: bool) -> EditResult<bool> {
        self.edit_door(edge, |door| {
            if door.is_locked == locked {
                return false;
            }
            if locked {
                door.lock();
            } else {
                door.unlock();
            }
            true
        })
    }

    /// Advance a door's hinge configuration (recorded).
    pub fn cycle_door(&mut self, edge: EdgeKey) -> EditResult<bool> {
        self.edit_door(edge, |door| {
            door.cycle_hinge();
            true
        })
    }

    fn edit_door(
        &mut self,
        edge: EdgeKey,
        f: impl FnOnce(&mut dw_core::Door) -> bool,
    ) -> EditResult<bool> {
        let Some((id, before)) = self.world.at(Slot::Door(edge)) else {
            return Ok(false);
        };
        let before = before.clone();
        let mut after = before.clone();
        let changed = after.as_door_mut().is_some_and(f);
        if !changed {
            return Ok(false);
        }
        self.world.modify(id, after.clone())?;
        self.history.record(Command::Modify { id, before, after });
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Replace the world with a snapshot. History and any open gesture are
    /// discarded.
    ///
    /// On error the session is left exactly as it was.
    pub fn load(&mut self, snapshot: WorldSnapshot) -> EditResult<()> {
        let world = World::from_snapshot(snapshot)?;
        self.tools.cancel();
        self.world = world;
        self.history.clear();
        Ok(())
    }

    /// Full-fidelity snapshot of the world.
    pub fn export(&self) -> WorldSnapshot {
        self.world.export()
    }
}
