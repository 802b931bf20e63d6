//! Flat JSON export and import of a whole world.
//!
//! A snapshot stores every entity with its id plus both counters, so loading
//! reproduces the exact identities that were saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, EntityKind};
use crate::error::{DwError, DwResult};
use crate::room::{Room, RoomId};
use crate::world::{Placed, World, WorldMeta};

/// Snapshot layout version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// One saved entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The id it held when saved.
    pub id: EntityId,
    /// The entity data.
    #[serde(flatten)]
    pub entity: Entity,
}

/// Full-fidelity image of a world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Layout version; see [`FORMAT_VERSION`].
    pub format_version: u32,
    /// World metadata.
    pub meta: WorldMeta,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The registry counter at save time.
    pub next_id: u64,
    /// The room number counter at save time.
    pub next_room_number: u32,
    /// The room selected at save time.
    pub selected_room: RoomId,
    /// Floors in cell order.
    #[serde(default)]
    pub floors: Vec<Record>,
    /// Walls in canonical edge order.
    #[serde(default)]
    pub walls: Vec<Record>,
    /// Doors in canonical edge order.
    #[serde(default)]
    pub doors: Vec<Record>,
    /// Fixed items in cell order.
    #[serde(default)]
    pub items: Vec<Record>,
    /// Creatures, characters and carried items.
    #[serde(default)]
    pub actors: Vec<Record>,
    /// Every room, default included, with members.
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl WorldSnapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> DwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, rejecting unknown layout versions.
    pub fn from_json(json: &str) -> DwResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> DwResult<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(DwError::UnsupportedFormat {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(())
    }
}

fn records<'a>(iter: impl Iterator<Item = (EntityId, &'a Entity)>) -> Vec<Record> {
    iter.map(|(id, entity)| Record {
        id,
        entity: entity.clone(),
    })
    .collect()
}

impl World {
    /// Capture the whole world.
    pub fn export(&self) -> WorldSnapshot {
        let by_id = |id: EntityId| self.entity(id).map(|e| (id, e));
        let snapshot = WorldSnapshot {
            format_version: FORMAT_VERSION,
            meta: self.meta.clone(),
            saved_at: Utc::now(),
            next_id: self.registry().next_id(),
            next_room_number: self.rooms().next_number(),
            selected_room: self.rooms().selected().id.clone(),
            floors: records(self.floors().filter_map(|(id, _)| by_id(id))),
            walls: records(self.walls().filter_map(|(id, _)| by_id(id))),
            doors: records(self.doors().filter_map(|(id, _)| by_id(id))),
            items: records(self.items()),
            actors: records(self.actors()),
            rooms: self.rooms().rooms().cloned().collect(),
        };
        tracing::info!(
            world = %self.meta.name,
            entities = self.entity_count(),
            rooms = snapshot.rooms.len(),
            "world exported"
        );
        snapshot
    }

    /// Replace the whole world with a snapshot.
    ///
    /// The snapshot is built into a fresh world first; on error `self` is
    /// left untouched. Entities are replayed through the same placement path
    /// used by undo, so key invariants are enforced again: a snapshot holding
    /// a wall and a door on one edge keeps the later one.
    pub fn import(&mut self, snapshot: WorldSnapshot) -> DwResult<()> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }

    /// Build a fresh world from a snapshot.
    pub fn from_snapshot(snapshot: WorldSnapshot) -> DwResult<Self> {
        snapshot.check_version()?;
        let mut world = World::new(snapshot.meta.clone());
        world.replay(snapshot)?;
        Ok(world)
    }

    fn replay(&mut self, snapshot: WorldSnapshot) -> DwResult<()> {
        let default_id = RoomId::default_room();
        for room in snapshot.rooms {
            if room.id.is_default() || room.number == 0 {
                let rooms = self.rooms_mut();
                rooms.rename_room(&default_id, room.name.clone());
                for member in room.members() {
                    rooms.add_to_room(&default_id, member);
                }
            } else {
                self.rooms_mut().insert_room(room)?;
            }
        }

        let lists = [
            (EntityKind::Floor, snapshot.floors),
            (EntityKind::Wall, snapshot.walls),
            (EntityKind::Door, snapshot.doors),
            (EntityKind::Item, snapshot.items),
        ];
        for (kind, list) in lists {
            for record in list {
                if record.entity.kind() != kind {
                    return Err(DwError::KindMismatch {
                        id: record.id,
                        expected: kind.as_str(),
                        found: record.entity.kind().as_str(),
                    });
                }
                let evicted = self.restore(Placed {
                    id: record.id,
                    entity: record.entity,
                    room: None,
                })?;
                if let Some(evicted) = evicted {
                    tracing::warn!(
                        kept = %record.id,
                        dropped = %evicted.id,
                        "snapshot held two entities on one key"
                    );
                }
            }
        }
        for record in snapshot.actors {
            self.restore_actor(record.id, record.entity)?;
        }

        self.reset_id_counter(snapshot.next_id);
        self.rooms_mut().reset_counter(snapshot.next_room_number);
        if !self.rooms_mut().select_room(&snapshot.selected_room) {
            self.rooms_mut().select_room(&default_id);
        }
        tracing::info!(
            world = %self.meta.name,
            entities = self.entity_count(),
            next_id = self.registry().next_id(),
            "world imported"
        );
        Ok(())
    }
}
