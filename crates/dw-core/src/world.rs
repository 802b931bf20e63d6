use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Body, Door, Entity, EntityId, EntityKind, Floor, Wall};
use crate::error::{DwError, DwResult};
use crate::key::{Bounds, CellPos, EdgeKey};
use crate::registry::Registry;
use crate::room::{Member, RoomId, RoomIndex};

/// Metadata about the dungeon itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// When the world was first created.
    pub created_at: DateTime<Utc>,
}

impl WorldMeta {
    /// Metadata with the given name, created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// Where a placeable entity lives in the store.
///
/// Edge slots are always held in canonical form. Walls and doors share one
/// edge map, so a wall slot and a door slot on the same edge collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "slot", content = "key", rename_all = "snake_case")]
pub enum Slot {
    /// The floor on a cell.
    Floor(CellPos),
    /// The wall on an edge.
    Wall(EdgeKey),
    /// The door on an edge.
    Door(EdgeKey),
    /// The fixed item anchored on a cell.
    Item(CellPos),
}

impl Slot {
    /// The slot an entity occupies, or `None` for actors and carried items.
    pub fn of(entity: &Entity) -> Option<Slot> {
        match &entity.body {
            Body::Floor(f) => Some(Slot::Floor(f.pos)),
            Body::Wall(w) => Some(Slot::Wall(w.edge.canonical())),
            Body::Door(d) => Some(Slot::Door(d.edge.canonical())),
            Body::Item(i) => match (i.pos, i.footprint) {
                (Some(pos), Some(_)) => Some(Slot::Item(pos)),
                _ => None,
            },
            Body::Creature(_) | Body::Character(_) => None,
        }
    }

    /// Same slot with its edge folded to canonical form.
    pub fn canonical(self) -> Self {
        match self {
            Slot::Wall(e) => Slot::Wall(e.canonical()),
            Slot::Door(e) => Slot::Door(e.canonical()),
            other => other,
        }
    }

    /// The kind of entity this slot holds.
    pub fn kind(self) -> EntityKind {
        match self {
            Slot::Floor(_) => EntityKind::Floor,
            Slot::Wall(_) => EntityKind::Wall,
            Slot::Door(_) => EntityKind::Door,
            Slot::Item(_) => EntityKind::Item,
        }
    }

    /// The room membership key for this slot.
    pub fn member(self) -> Member {
        match self {
            Slot::Floor(p) => Member::Floor(p),
            Slot::Wall(e) => Member::Wall(e),
            Slot::Door(e) => Member::Door(e),
            Slot::Item(p) => Member::Item(p),
        }
        .canonical()
    }
}

/// An entity lifted out of the store together with everything needed to put
/// it back exactly: its id and its room membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placed {
    /// The id it held.
    pub id: EntityId,
    /// The entity itself.
    pub entity: Entity,
    /// The room its slot belonged to.
    pub room: Option<RoomId>,
}

/// Result of placing an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Id of the newly placed entity.
    pub id: EntityId,
    /// Whatever previously occupied the key, now destroyed.
    pub displaced: Option<Placed>,
}

/// The spatial world store: registry, key maps, and rooms.
#[derive(Debug, Clone)]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    registry: Registry,
    floors: BTreeMap<CellPos, EntityId>,
    edges: BTreeMap<EdgeKey, EntityId>,
    items: BTreeMap<CellPos, EntityId>,
    actors: BTreeSet<EntityId>,
    rooms: RoomIndex,
}

impl World {
    /// An empty world with only the default room.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            registry: Registry::new(),
            floors: BTreeMap::new(),
            edges: BTreeMap::new(),
            items: BTreeMap::new(),
            actors: BTreeSet::new(),
            rooms: RoomIndex::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Generic placement
    // -----------------------------------------------------------------------

    /// Place an entity on its slot, destroying whatever occupied the key.
    ///
    /// Placing a door evicts a wall on the same edge and vice versa. The new
    /// entity always receives a fresh id. When `room` names an existing room
    /// the slot joins it.
    pub fn place(&mut self, entity: Entity, room: Option<&RoomId>) -> DwResult<Placement> {
        entity.validate()?;
        let slot = Slot::of(&entity).ok_or(DwError::NotPlaceable(entity.kind().as_str()))?;
        let displaced = self.evict(slot);
        let id = self.registry.allocate(entity);
        self.index(slot, id);
        if let Some(room) = room {
            self.rooms.add_to_room(room, slot.member());
        }
        tracing::debug!(%id, ?slot, replaced = displaced.as_ref().map(|p| p.id.0), "placed");
        Ok(Placement { id, displaced })
    }

    /// Lift the entity of the given kind out of a slot.
    ///
    /// Returns `None`, changing nothing, when the slot is empty or holds the
    /// other edge kind.
    pub fn take(&mut self, slot: Slot) -> Option<Placed> {
        let slot = slot.canonical();
        let id = self.id_at(slot)?;
        self.unindex(slot);
        let room = self.rooms.release(slot.member());
        let entity = self.registry.destroy(id)?;
        tracing::debug!(%id, ?slot, "removed");
        Some(Placed { id, entity, room })
    }

    /// Put a previously taken entity back under its old id.
    ///
    /// Anything occupying the key is evicted and returned.
    pub fn restore(&mut self, placed: Placed) -> DwResult<Option<Placed>> {
        placed.entity.validate()?;
        let slot = Slot::of(&placed.entity)
            .ok_or(DwError::NotPlaceable(placed.entity.kind().as_str()))?;
        if self.registry.contains(placed.id) {
            return Err(DwError::IdInUse(placed.id));
        }
        let displaced = self.evict(slot);
        self.registry.restore(placed.id, placed.entity)?;
        self.index(slot, placed.id);
        if let Some(room) = &placed.room {
            self.rooms.add_to_room(room, slot.member());
        }
        tracing::debug!(id = %placed.id, ?slot, "restored");
        Ok(displaced)
    }

    /// Replace an entity's data without changing its id or key.
    ///
    /// Returns the previous data, or `None` if the id is not live.
    pub fn modify(&mut self, id: EntityId, entity: Entity) -> DwResult<Option<Entity>> {
        entity.validate()?;
        let Some(current) = self.registry.get(id) else {
            return Ok(None);
        };
        if current.kind() != entity.kind() {
            return Err(DwError::KindMismatch {
                id,
                expected: current.kind().as_str(),
                found: entity.kind().as_str(),
            });
        }
        if Slot::of(current) != Slot::of(&entity) {
            return Err(DwError::KeyChanged(id));
        }
        Ok(self
            .registry
            .get_mut(id)
            .map(|slot| std::mem::replace(slot, entity)))
    }

    /// The id occupying a slot, if it holds the slot's kind.
    pub fn id_at(&self, slot: Slot) -> Option<EntityId> {
        let id = match slot.canonical() {
            Slot::Floor(p) => self.floors.get(&p),
            Slot::Wall(e) | Slot::Door(e) => self.edges.get(&e),
            Slot::Item(p) => self.items.get(&p),
        }
        .copied()?;
        let entity = self.registry.get(id)?;
        (entity.kind() == slot.kind()).then_some(id)
    }

    /// The entity occupying a slot, if it holds the slot's kind.
    pub fn at(&self, slot: Slot) -> Option<(EntityId, &Entity)> {
        let id = self.id_at(slot)?;
        self.registry.get(id).map(|e| (id, e))
    }

    fn evict(&mut self, slot: Slot) -> Option<Placed> {
        let occupant = match slot {
            Slot::Floor(p) => self.floors.get(&p),
            Slot::Wall(e) | Slot::Door(e) => self.edges.get(&e),
            Slot::Item(p) => self.items.get(&p),
        }
        .and_then(|id| self.registry.get(*id))
        .and_then(Slot::of)?;
        self.take(occupant)
    }

    fn index(&mut self, slot: Slot, id: EntityId) {
        match slot {
            Slot::Floor(p) => self.floors.insert(p, id),
            Slot::Wall(e) | Slot::Door(e) => self.edges.insert(e, id),
            Slot::Item(p) => self.items.insert(p, id),
        };
    }

    fn unindex(&mut self, slot: Slot) {
        match slot {
            Slot::Floor(p) => self.floors.remove(&p),
            Slot::Wall(e) | Slot::Door(e) => self.edges.remove(&e),
            Slot::Item(p) => self.items.remove(&p),
        };
    }

    // -----------------------------------------------------------------------
    // Floors
    // -----------------------------------------------------------------------

    /// Place a floor, joining the room whose number it carries.
    pub fn set_floor(&mut self, floor: Floor) -> DwResult<EntityId> {
        let room = self.rooms.room_by_number(floor.room).map(|r| r.id.clone());
        self.place(floor.into(), room.as_ref()).map(|p| p.id)
    }

    /// The floor on a cell.
    pub fn get_floor(&self, pos: CellPos) -> Option<&Floor> {
        self.at(Slot::Floor(pos)).and_then(|(_, e)| e.as_floor())
    }

    /// Remove the floor on a cell. Returns false if there was none.
    pub fn remove_floor(&mut self, pos: CellPos) -> bool {
        self.take(Slot::Floor(pos)).is_some()
    }

    /// All floors in key order.
    pub fn floors(&self) -> impl Iterator<Item = (EntityId, &Floor)> {
        self.floors.values().filter_map(|id| {
            self.registry
                .get(*id)
                .and_then(Entity::as_floor)
                .map(|f| (*id, f))
        })
    }

    // -----------------------------------------------------------------------
    // Walls and doors
    // -----------------------------------------------------------------------

    /// Place a wall, evicting any door on the same edge.
    pub fn set_wall(&mut self, wall: Wall) -> DwResult<EntityId> {
        self.place(wall.into(), None).map(|p| p.id)
    }

    /// The wall on an edge, under either of its spellings.
    pub fn get_wall(&self, edge: EdgeKey) -> Option<&Wall> {
        self.at(Slot::Wall(edge)).and_then(|(_, e)| e.as_wall())
    }

    /// Remove the wall on an edge. Returns false if there was none.
    pub fn remove_wall(&mut self, edge: EdgeKey) -> bool {
        self.take(Slot::Wall(edge)).is_some()
    }

    /// All walls in canonical edge order.
    pub fn walls(&self) -> impl Iterator<Item = (EntityId, &Wall)> {
        self.edges.values().filter_map(|id| {
            self.registry
                .get(*id)
                .and_then(Entity::as_wall)
                .map(|w| (*id, w))
        })
    }

    /// Place a door, evicting any wall on the same edge.
    pub fn set_door(&mut self, door: Door) -> DwResult<EntityId> {
        self.place(door.into(), None).map(|p| p.id)
    }

    /// The door on an edge, under either of its spellings.
    pub fn get_door(&self, edge: EdgeKey) -> Option<&Door> {
        self.at(Slot::Door(edge)).and_then(|(_, e)| e.as_door())
    }

    /// Remove the door on an edge. Returns false if there was none.
    pub fn remove_door(&mut self, edge: EdgeKey) -> bool {
        self.take(Slot::Door(edge)).is_some()
    }

    /// Edit a door in place, keeping its id. Returns `None` if absent.
    pub fn update_door(&mut self, edge: EdgeKey, f: impl FnOnce(&mut Door)) -> Option<EntityId> {
        let id = self.id_at(Slot::Door(edge))?;
        let door = self.registry.get_mut(id)?.as_door_mut()?;
        let edge = door.edge;
        f(door);
        door.edge = edge;
        Some(id)
    }

    /// All doors in canonical edge order.
    pub fn doors(&self) -> impl Iterator<Item = (EntityId, &Door)> {
        self.edges.values().filter_map(|id| {
            self.registry
                .get(*id)
                .and_then(Entity::as_door)
                .map(|d| (*id, d))
        })
    }

    // -----------------------------------------------------------------------
    // Items and actors
    // -----------------------------------------------------------------------

    /// Place a fixed item on its anchor cell.
    pub fn set_item(&mut self, item: Entity) -> DwResult<EntityId> {
        if item.as_item().is_none() {
            return Err(DwError::NotPlaceable(item.kind().as_str()));
        }
        self.place(item, None).map(|p| p.id)
    }

    /// The fixed item anchored on a cell.
    pub fn get_item(&self, pos: CellPos) -> Option<&Entity> {
        self.at(Slot::Item(pos)).map(|(_, e)| e)
    }

    /// Remove the fixed item on a cell. Returns false if there was none.
    pub fn remove_item(&mut self, pos: CellPos) -> bool {
        self.take(Slot::Item(pos)).is_some()
    }

    /// All fixed items in cell order.
    pub fn items(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.items
            .values()
            .filter_map(|id| self.registry.get(*id).map(|e| (*id, e)))
    }

    /// Register an entity that has no grid slot (creature, character, or
    /// carried item).
    pub fn spawn(&mut self, entity: Entity) -> DwResult<EntityId> {
        entity.validate()?;
        if Slot::of(&entity).is_some() {
            return Err(DwError::NotAnActor(entity.kind().as_str()));
        }
        let id = self.registry.allocate(entity);
        self.actors.insert(id);
        Ok(id)
    }

    /// Put an actor back under a known id (loading).
    pub fn restore_actor(&mut self, id: EntityId, entity: Entity) -> DwResult<()> {
        entity.validate()?;
        if Slot::of(&entity).is_some() {
            return Err(DwError::NotAnActor(entity.kind().as_str()));
        }
        self.registry.restore(id, entity)?;
        self.actors.insert(id);
        Ok(())
    }

    /// Remove an actor.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        if !self.actors.remove(&id) {
            return None;
        }
        self.registry.destroy(id)
    }

    /// All actors in id order.
    pub fn actors(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.actors
            .iter()
            .filter_map(|id| self.registry.get(*id).map(|e| (*id, e)))
    }

    // -----------------------------------------------------------------------
    // Rooms, registry, statistics
    // -----------------------------------------------------------------------

    /// The room index.
    pub fn rooms(&self) -> &RoomIndex {
        &self.rooms
    }

    /// The room index, for membership and selection changes.
    pub fn rooms_mut(&mut self) -> &mut RoomIndex {
        &mut self.rooms
    }

    /// The entity registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Look up any entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.registry.get(id)
    }

    /// Move the id counter; used only when loading.
    pub fn reset_id_counter(&mut self, start: u64) {
        self.registry.reset_counter(start);
    }

    /// Smallest box containing every floor, wall, door and fixed item.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self
            .floors
            .keys()
            .chain(self.items.keys())
            .copied()
            .chain(self.edges.values().filter_map(|id| {
                self.registry.get(*id).and_then(Entity::position)
            }));
        let first = cells.next()?;
        let mut bounds = Bounds::point(first);
        for pos in cells {
            bounds.include(pos);
        }
        Some(bounds)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    /// Drop every entity and room, restarting ids and room numbers.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.floors.clear();
        self.edges.clear();
        self.items.clear();
        self.actors.clear();
        self.rooms.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::entity::{Body, Creature, Footprint, Item};
    use crate::key::Direction;

    fn test_world() -> World {
        World::new(WorldMeta::new("Test Dungeon"))
    }

    fn floor(x: i32, z: i32) -> Floor {
        Floor {
            pos: CellPos::new(x, 0, z),
            color: Color::STONE,
            material: "stone".into(),
            room: 0,
        }
    }

    fn wall(edge: EdgeKey) -> Wall {
        Wall {
            edge,
            color: Color::BRICK,
            material: "stone".into(),
        }
    }

    fn edge(x: i32, z: i32, d: Direction) -> EdgeKey {
        CellPos::new(x, 0, z).edge(d)
    }

    #[test]
    fn set_and_get_floor() {
        let mut world = test_world();
        let id = world.set_floor(floor(1, 2)).unwrap();
        assert_eq!(id, EntityId(1));
        assert_eq!(world.get_floor(CellPos::new(1, 0, 2)).unwrap().material, "stone");
        assert!(world.get_floor(CellPos::new(0, 0, 0)).is_none());
    }

    #[test]
    fn overwrite_allocates_fresh_id() {
        let mut world = test_world();
        let first = world.set_floor(floor(0, 0)).unwrap();
        let second = world
            .set_floor(Floor {
                color: Color::OAK,
                ..floor(0, 0)
            })
            .unwrap();
        assert_ne!(first, second);
        assert!(world.entity(first).is_none());
        assert_eq!(world.floors().count(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut world = test_world();
        assert!(!world.remove_floor(CellPos::new(0, 0, 0)));
        assert!(!world.remove_wall(edge(0, 0, Direction::North)));
        assert!(!world.remove_door(edge(0, 0, Direction::North)));
    }

    #[test]
    fn door_evicts_wall_and_back() {
        let mut world = test_world();
        let e = edge(2, 2, Direction::North);
        let wall_id = world.set_wall(wall(e)).unwrap();
        world.set_door(Door::new(e, Color::OAK)).unwrap();
        assert!(world.get_wall(e).is_none());
        assert!(world.get_door(e).is_some());
        assert!(world.entity(wall_id).is_none());

        world.set_wall(wall(e)).unwrap();
        assert!(world.get_door(e).is_none());
        assert!(world.get_wall(e).is_some());
        assert_eq!(world.walls().count(), 1);
        assert_eq!(world.doors().count(), 0);
    }

    #[test]
    fn aliased_edges_share_one_slot() {
        let mut world = test_world();
        world.set_wall(wall(edge(3, 5, Direction::South))).unwrap();
        let alias = edge(3, 6, Direction::North);
        assert!(world.get_wall(alias).is_some());
        world.set_door(Door::new(alias, Color::OAK)).unwrap();
        assert!(world.get_wall(edge(3, 5, Direction::South)).is_none());
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn remove_wall_ignores_door() {
        let mut world = test_world();
        let e = edge(0, 0, Direction::West);
        world.set_door(Door::new(e, Color::OAK)).unwrap();
        assert!(!world.remove_wall(e));
        assert!(world.get_door(e).is_some());
    }

    #[test]
    fn take_and_restore_keeps_id_and_room() {
        let mut world = test_world();
        let hall = world.rooms_mut().create_room("Hall").clone();
        let id = world.set_floor(Floor {
            room: hall.number,
            ..floor(4, 4)
        })
        .unwrap();
        assert!(world.take(Slot::Wall(edge(4, 4, Direction::North))).is_none());

        let placed = world.take(Slot::Floor(CellPos::new(4, 0, 4))).unwrap();
        assert_eq!(placed.id, id);
        assert_eq!(placed.room.as_ref(), Some(&hall.id));
        assert_eq!(world.rooms().counts(&hall.id).unwrap().floors, 0);

        world.restore(placed).unwrap();
        assert_eq!(world.id_at(Slot::Floor(CellPos::new(4, 0, 4))), Some(id));
        assert_eq!(world.rooms().counts(&hall.id).unwrap().floors, 1);
    }

    #[test]
    fn restore_live_id_rejected() {
        let mut world = test_world();
        let id = world.set_floor(floor(0, 0)).unwrap();
        let entity = world.entity(id).unwrap().clone();
        let err = world.restore(Placed {
            id,
            entity,
            room: None,
        });
        assert!(matches!(err, Err(DwError::IdInUse(_))));
    }

    #[test]
    fn update_door_keeps_identity() {
        let mut world = test_world();
        let e = edge(1, 1, Direction::East);
        let id = world.set_door(Door::new(e, Color::OAK)).unwrap();
        let updated = world.update_door(e, |d| d.lock());
        assert_eq!(updated, Some(id));
        assert!(world.get_door(e).unwrap().is_locked);
        assert!(world.update_door(edge(9, 9, Direction::East), |d| d.lock()).is_none());
    }

    #[test]
    fn modify_rejects_moves_and_kind_changes() {
        let mut world = test_world();
        let id = world.set_floor(floor(0, 0)).unwrap();
        assert!(matches!(
            world.modify(id, floor(1, 0).into()),
            Err(DwError::KeyChanged(_))
        ));
        assert!(matches!(
            world.modify(id, wall(edge(0, 0, Direction::North)).into()),
            Err(DwError::KindMismatch { .. })
        ));
        let before = world
            .modify(
                id,
                Floor {
                    color: Color::OAK,
                    ..floor(0, 0)
                }
                .into(),
            )
            .unwrap()
            .unwrap();
        assert_eq!(before.as_floor().unwrap().color, Color::STONE);
        assert_eq!(world.get_floor(CellPos::new(0, 0, 0)).unwrap().color, Color::OAK);
    }

    #[test]
    fn items_validate_footprint() {
        let mut world = test_world();
        let bad = Entity::new(Body::Item(Item {
            pos: Some(CellPos::new(0, 0, 0)),
            footprint: Some(Footprint { width: 1, depth: 0 }),
        }));
        assert!(matches!(
            world.set_item(bad),
            Err(DwError::InvalidFootprint { .. })
        ));
        let good = Entity::new(Body::Item(Item {
            pos: Some(CellPos::new(0, 0, 0)),
            footprint: Some(Footprint { width: 2, depth: 1 }),
        }))
        .with_name("Table");
        let id = world.set_item(good).unwrap();
        assert_eq!(world.get_item(CellPos::new(0, 0, 0)).unwrap().name, "Table");
        assert_eq!(world.items().next().unwrap().0, id);
    }

    #[test]
    fn actors_spawn_and_despawn() {
        let mut world = test_world();
        let goblin = Entity::new(Body::Creature(Creature {
            pos: CellPos::new(1, 0, 1),
            hit_points: 7,
        }))
        .with_name("Goblin");
        let id = world.spawn(goblin).unwrap();
        assert_eq!(world.actors().count(), 1);
        assert!(world.spawn(floor(0, 0).into()).is_err());
        assert!(world.despawn(id).is_some());
        assert!(world.despawn(id).is_none());
    }

    #[test]
    fn bounds_cover_all_geometry() {
        let mut world = test_world();
        assert!(world.bounds().is_none());
        world.set_floor(floor(-2, 3)).unwrap();
        world.set_wall(wall(edge(5, -1, Direction::North))).unwrap();
        let bounds = world.bounds().unwrap();
        assert_eq!(bounds.min, CellPos::new(-2, 0, -1));
        assert_eq!(bounds.max, CellPos::new(5, 0, 3));
    }

    #[test]
    fn off_grid_keys_rejected() {
        let mut world = test_world();
        let far = edge(i32::MAX, 0, Direction::East);
        assert!(matches!(
            world.set_wall(wall(far)),
            Err(DwError::InvalidCoordinate(_))
        ));
        assert!(world.get_wall(far).is_none());

        let err = world.restore(Placed {
            id: EntityId(7),
            entity: floor(0, i32::MIN).into(),
            room: None,
        });
        assert!(matches!(err, Err(DwError::InvalidCoordinate(_))));
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut world = test_world();
        world.set_floor(floor(0, 0)).unwrap();
        world.rooms_mut().create_room("Hall");
        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.rooms().len(), 1);
        assert_eq!(world.set_floor(floor(0, 0)).unwrap(), EntityId(1));
    }
}
