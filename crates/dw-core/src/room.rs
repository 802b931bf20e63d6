use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DwError, DwResult};
use crate::key::{CellPos, EdgeKey};

/// Identifier of a room. The default room is always `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Id of the permanent default room.
    pub const DEFAULT: &'static str = "default";

    /// The default room's id.
    pub fn default_room() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(format!("room-{}", Uuid::new_v4().simple()))
    }

    /// Whether this names the default room.
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Membership category of a room key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Floor cells.
    Floors,
    /// Wall edges.
    Walls,
    /// Door edges.
    Doors,
    /// Cells holding fixed items.
    Items,
}

/// A key that can belong to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "category", content = "key", rename_all = "snake_case")]
pub enum Member {
    /// A floor cell.
    Floor(CellPos),
    /// A wall edge.
    Wall(EdgeKey),
    /// A door edge.
    Door(EdgeKey),
    /// A fixed item's anchor cell.
    Item(CellPos),
}

impl Member {
    /// The set this member lives in.
    pub fn category(self) -> Category {
        match self {
            Self::Floor(_) => Category::Floors,
            Self::Wall(_) => Category::Walls,
            Self::Door(_) => Category::Doors,
            Self::Item(_) => Category::Items,
        }
    }

    /// Same member with edges folded to their canonical spelling.
    pub fn canonical(self) -> Self {
        match self {
            Self::Wall(e) => Self::Wall(e.canonical()),
            Self::Door(e) => Self::Door(e.canonical()),
            other => other,
        }
    }
}

/// Member totals for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoomCounts {
    /// Floor cells.
    pub floors: usize,
    /// Wall edges.
    pub walls: usize,
    /// Door edges.
    pub doors: usize,
    /// Fixed items.
    pub items: usize,
    /// Sum of the above.
    pub total: usize,
}

/// A named, numbered group of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Room number; 0 is the default room.
    pub number: u32,
    /// Floor cells in the room.
    #[serde(default)]
    pub floors: BTreeSet<CellPos>,
    /// Wall edges in the room (canonical).
    #[serde(default)]
    pub walls: BTreeSet<EdgeKey>,
    /// Door edges in the room (canonical).
    #[serde(default)]
    pub doors: BTreeSet<EdgeKey>,
    /// Fixed item cells in the room.
    #[serde(default)]
    pub items: BTreeSet<CellPos>,
}

impl Room {
    /// An empty room.
    pub fn new(id: RoomId, name: impl Into<String>, number: u32) -> Self {
        Self {
            id,
            name: name.into(),
            number,
            floors: BTreeSet::new(),
            walls: BTreeSet::new(),
            doors: BTreeSet::new(),
            items: BTreeSet::new(),
        }
    }

    /// Whether this is the default room.
    pub fn is_default(&self) -> bool {
        self.number == 0
    }

    /// Every member, in category order.
    pub fn members(&self) -> Vec<Member> {
        self.floors
            .iter()
            .map(|p| Member::Floor(*p))
            .chain(self.walls.iter().map(|e| Member::Wall(*e)))
            .chain(self.doors.iter().map(|e| Member::Door(*e)))
            .chain(self.items.iter().map(|p| Member::Item(*p)))
            .collect()
    }

    /// Member totals.
    pub fn counts(&self) -> RoomCounts {
        let floors = self.floors.len();
        let walls = self.walls.len();
        let doors = self.doors.len();
        let items = self.items.len();
        RoomCounts {
            floors,
            walls,
            doors,
            items,
            total: floors + walls + doors + items,
        }
    }

    fn insert(&mut self, member: Member) -> bool {
        match member {
            Member::Floor(p) => self.floors.insert(p),
            Member::Wall(e) => self.walls.insert(e),
            Member::Door(e) => self.doors.insert(e),
            Member::Item(p) => self.items.insert(p),
        }
    }

    fn remove(&mut self, member: Member) -> bool {
        match member {
            Member::Floor(p) => self.floors.remove(&p),
            Member::Wall(e) => self.walls.remove(&e),
            Member::Door(e) => self.doors.remove(&e),
            Member::Item(p) => self.items.remove(&p),
        }
    }
}

/// All rooms of a world plus the current selection.
///
/// Membership is exclusive: a key belongs to at most one room, and adding it
/// to a room moves it out of its previous one.
#[derive(Debug, Clone)]
pub struct RoomIndex {
    default: Room,
    rooms: BTreeMap<u32, Room>,
    by_id: HashMap<RoomId, u32>,
    owner: HashMap<Member, u32>,
    selected: u32,
    next_number: u32,
}

impl Default for RoomIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomIndex {
    /// An index holding only the default room, which is selected.
    pub fn new() -> Self {
        let default = Room::new(RoomId::default_room(), "Default Room", 0);
        let mut by_id = HashMap::new();
        by_id.insert(default.id.clone(), 0);
        Self {
            default,
            rooms: BTreeMap::new(),
            by_id,
            owner: HashMap::new(),
            selected: 0,
            next_number: 1,
        }
    }

    /// Create a room with the next free number.
    pub fn create_room(&mut self, name: impl Into<String>) -> &Room {
        let number = self.next_number;
        self.next_number += 1;
        let mut id = RoomId::generate();
        while self.by_id.contains_key(&id) {
            id = RoomId::generate();
        }
        let room = Room::new(id, name, number);
        tracing::info!(room = %room.id, number, name = %room.name, "room created");
        self.by_id.insert(room.id.clone(), number);
        self.rooms.entry(number).or_insert(room)
    }

    /// Put back a room, members included. Used by undo and loading.
    pub fn insert_room(&mut self, room: Room) -> DwResult<()> {
        if self.by_id.contains_key(&room.id) {
            return Err(DwError::DuplicateRoom(room.id.to_string()));
        }
        if room.number == 0 || self.rooms.contains_key(&room.number) {
            return Err(DwError::DuplicateRoom(format!("number {}", room.number)));
        }
        let number = room.number;
        let members = room.members();
        self.by_id.insert(room.id.clone(), number);
        self.rooms.insert(
            number,
            Room {
                floors: BTreeSet::new(),
                walls: BTreeSet::new(),
                doors: BTreeSet::new(),
                items: BTreeSet::new(),
                ..room
            },
        );
        for member in members {
            self.assign(number, member);
        }
        if number >= self.next_number {
            self.next_number = number + 1;
        }
        Ok(())
    }

    /// Delete a room. Returns false for the default room or an unknown id.
    pub fn delete_room(&mut self, id: &RoomId) -> bool {
        self.take_room(id).is_some()
    }

    /// Delete a room and hand it back with its members.
    ///
    /// The default room cannot be taken. Members are released, not moved.
    pub fn take_room(&mut self, id: &RoomId) -> Option<Room> {
        let number = *self.by_id.get(id)?;
        if number == 0 {
            return None;
        }
        self.by_id.remove(id);
        let room = self.rooms.remove(&number)?;
        for member in room.members() {
            self.owner.remove(&member);
        }
        if self.selected == number {
            self.selected = 0;
        }
        tracing::info!(room = %room.id, number, "room deleted");
        Some(room)
    }

    /// Make a room current. Returns false for an unknown id.
    pub fn select_room(&mut self, id: &RoomId) -> bool {
        match self.by_id.get(id) {
            Some(number) => {
                self.selected = *number;
                true
            }
            None => false,
        }
    }

    /// The currently selected room.
    pub fn selected(&self) -> &Room {
        self.get(self.selected).unwrap_or(&self.default)
    }

    /// Rename a room. Returns false for an unknown id.
    pub fn rename_room(&mut self, id: &RoomId, name: impl Into<String>) -> bool {
        let Some(number) = self.by_id.get(id) else {
            return false;
        };
        let number = *number;
        match self.get_mut(number) {
            Some(room) => {
                room.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Add a key to a room, moving it out of any other room.
    ///
    /// Returns false, changing nothing, if the room does not exist.
    pub fn add_to_room(&mut self, id: &RoomId, member: Member) -> bool {
        match self.by_id.get(id) {
            Some(&number) => {
                self.assign(number, member);
                true
            }
            None => false,
        }
    }

    /// Remove a key from a room. Returns false if it was not a member.
    pub fn remove_from_room(&mut self, id: &RoomId, member: Member) -> bool {
        let member = member.canonical();
        let Some(&number) = self.by_id.get(id) else {
            return false;
        };
        if self.owner.get(&member) != Some(&number) {
            return false;
        }
        self.owner.remove(&member);
        self.get_mut(number).is_some_and(|room| room.remove(member))
    }

    /// Remove a key from whichever room holds it, returning that room.
    pub fn release(&mut self, member: Member) -> Option<RoomId> {
        let member = member.canonical();
        let number = self.owner.remove(&member)?;
        let room = self.get_mut(number)?;
        room.remove(member);
        Some(room.id.clone())
    }

    /// The room a key belongs to.
    pub fn room_of(&self, member: Member) -> Option<&Room> {
        self.owner
            .get(&member.canonical())
            .and_then(|n| self.get(*n))
    }

    /// Look up a room by id.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.by_id.get(id).and_then(|n| self.get(*n))
    }

    /// Look up a room by number.
    pub fn room_by_number(&self, number: u32) -> Option<&Room> {
        self.get(number)
    }

    /// All rooms in number order, default first.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        std::iter::once(&self.default).chain(self.rooms.values())
    }

    /// Member totals for a room.
    pub fn counts(&self, id: &RoomId) -> Option<RoomCounts> {
        self.room(id).map(Room::counts)
    }

    /// Number of rooms, default included.
    pub fn len(&self) -> usize {
        self.rooms.len() + 1
    }

    /// Always false; the default room exists.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The number the next created room will get.
    pub fn next_number(&self) -> u32 {
        self.next_number
    }

    /// Move the number counter, used only when loading.
    pub fn reset_counter(&mut self, next: u32) {
        let floor = self.rooms.keys().next_back().map_or(1, |n| n + 1);
        self.next_number = next.max(floor);
    }

    /// Back to a lone, empty default room.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn assign(&mut self, number: u32, member: Member) {
        let member = member.canonical();
        if let Some(previous) = self.owner.insert(member, number)
            && previous != number
            && let Some(room) = self.get_mut(previous)
        {
            room.remove(member);
        }
        if let Some(room) = self.get_mut(number) {
            room.insert(member);
        }
    }

    fn get(&self, number: u32) -> Option<&Room> {
        if number == 0 {
            Some(&self.default)
        } else {
            self.rooms.get(&number)
        }
    }

    fn get_mut(&mut self, number: u32) -> Option<&mut Room> {
        if number == 0 {
            Some(&mut self.default)
        } else {
            self.rooms.get_mut(&number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Direction;

    fn cell(x: i32, z: i32) -> CellPos {
        CellPos::new(x, 0, z)
    }

    #[test]
    fn default_room_present_and_selected() {
        let index = RoomIndex::new();
        let room = index.selected();
        assert_eq!(room.number, 0);
        assert!(room.id.is_default());
        assert_eq!(index.room_by_number(0).unwrap().id, RoomId::default_room());
    }

    #[test]
    fn default_room_cannot_be_deleted() {
        let mut index = RoomIndex::new();
        assert!(!index.delete_room(&RoomId::default_room()));
        assert!(index.room(&RoomId::default_room()).is_some());
    }

    #[test]
    fn rooms_number_from_one() {
        let mut index = RoomIndex::new();
        let a = index.create_room("Hall").number;
        let b = index.create_room("Vault").number;
        assert_eq!((a, b), (1, 2));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn generated_ids_keep_the_whole_uuid() {
        let id = RoomId::generate();
        assert_eq!(id.0.len(), "room-".len() + 32);

        let mut index = RoomIndex::new();
        let ids: BTreeSet<RoomId> = (0..64)
            .map(|i| index.create_room(format!("Cell {i}")).id.clone())
            .collect();
        assert_eq!(ids.len(), 64);
        assert!(ids.iter().all(|id| index.room(id).is_some()));
    }

    #[test]
    fn membership_is_exclusive() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        let vault = index.create_room("Vault").id.clone();
        let floor = Member::Floor(cell(1, 1));

        assert!(index.add_to_room(&hall, floor));
        assert!(index.add_to_room(&vault, floor));
        assert_eq!(index.counts(&hall).unwrap().floors, 0);
        assert_eq!(index.counts(&vault).unwrap().floors, 1);
        assert_eq!(index.room_of(floor).unwrap().id, vault);
    }

    #[test]
    fn wall_membership_uses_canonical_edge() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        index.add_to_room(&hall, Member::Wall(cell(0, 0).edge(Direction::South)));
        let alias = Member::Wall(cell(0, 1).edge(Direction::North));
        assert_eq!(index.room_of(alias).unwrap().id, hall);
        assert!(index.remove_from_room(&hall, alias));
        assert_eq!(index.counts(&hall).unwrap().total, 0);
    }

    #[test]
    fn counts_sum_categories() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        index.add_to_room(&hall, Member::Floor(cell(0, 0)));
        index.add_to_room(&hall, Member::Floor(cell(1, 0)));
        index.add_to_room(&hall, Member::Wall(cell(0, 0).edge(Direction::North)));
        index.add_to_room(&hall, Member::Door(cell(1, 0).edge(Direction::North)));
        let counts = index.counts(&hall).unwrap();
        assert_eq!(
            counts,
            RoomCounts {
                floors: 2,
                walls: 1,
                doors: 1,
                items: 0,
                total: 4
            }
        );
    }

    #[test]
    fn unknown_room_is_not_an_error() {
        let mut index = RoomIndex::new();
        let ghost = RoomId::from("nowhere");
        assert!(!index.add_to_room(&ghost, Member::Floor(cell(0, 0))));
        assert!(!index.select_room(&ghost));
        assert!(!index.delete_room(&ghost));
        assert!(index.counts(&ghost).is_none());
    }

    #[test]
    fn deleting_selected_room_falls_back_to_default() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        index.add_to_room(&hall, Member::Floor(cell(0, 0)));
        assert!(index.select_room(&hall));
        let room = index.take_room(&hall).unwrap();
        assert_eq!(room.floors.len(), 1);
        assert!(index.selected().is_default());
        assert!(index.room_of(Member::Floor(cell(0, 0))).is_none());
    }

    #[test]
    fn insert_room_restores_members_and_counter() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        index.add_to_room(&hall, Member::Floor(cell(2, 2)));
        let room = index.take_room(&hall).unwrap();
        index.insert_room(room.clone()).unwrap();
        assert_eq!(index.room(&hall), Some(&room));
        assert_eq!(index.room_of(Member::Floor(cell(2, 2))).unwrap().id, hall);
        assert!(index.insert_room(room).is_err());
        assert_eq!(index.create_room("Next").number, 2);
    }

    #[test]
    fn release_reports_previous_owner() {
        let mut index = RoomIndex::new();
        let hall = index.create_room("Hall").id.clone();
        let m = Member::Item(cell(3, 3));
        index.add_to_room(&hall, m);
        assert_eq!(index.release(m), Some(hall));
        assert_eq!(index.release(m), None);
    }
}
