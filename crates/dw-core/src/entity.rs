use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{DwError, DwResult};
use crate::key::{CellPos, EdgeKey};

/// Unique identifier for every placed entity.
///
/// Ids come from a monotonically increasing counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of an entity, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A floor tile on one cell.
    Floor,
    /// A wall segment on one edge.
    Wall,
    /// A door on one edge.
    Door,
    /// A loose or fixed object.
    Item,
    /// A monster or animal.
    Creature,
    /// A player or non-player character.
    Character,
}

impl EntityKind {
    /// Lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Item => "item",
            Self::Creature => "creature",
            Self::Character => "character",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A floor tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// The cell this tile covers.
    pub pos: CellPos,
    /// Surface color.
    pub color: Color,
    /// Free-form material name (stone, wood, ...).
    pub material: String,
    /// Number of the room that was selected when the tile was placed.
    pub room: u32,
}

/// A wall segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// The edge as it was addressed when placed.
    pub edge: EdgeKey,
    /// Surface color.
    pub color: Color,
    /// Free-form material name.
    pub material: String,
}

/// The side of the opening a door hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pivot {
    /// Hinged toward the negative end of the edge's run axis.
    Left,
    /// Hinged toward the positive end of the edge's run axis.
    Right,
}

/// Which way a door opens, relative to the cell it was placed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swing {
    /// Opens into the owning cell.
    In,
    /// Opens away from the owning cell.
    Out,
}

/// A door occupying an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// The edge as it was addressed when placed.
    pub edge: EdgeKey,
    /// Panel color.
    pub color: Color,
    /// Whether the door currently stands open.
    pub is_open: bool,
    /// Whether the door is locked. A locked door is always closed.
    pub is_locked: bool,
    /// Hinge side.
    pub pivot: Pivot,
    /// Opening direction.
    pub swing: Swing,
    /// Item that unlocks this door, if any.
    pub required_item: Option<EntityId>,
}

impl Door {
    /// A closed, unlocked door hinged left and swinging out.
    pub fn new(edge: EdgeKey, color: Color) -> Self {
        Self {
            edge,
            color,
            is_open: false,
            is_locked: false,
            pivot: Pivot::Left,
            swing: Swing::Out,
            required_item: None,
        }
    }

    /// Advance to the next hinge configuration:
    /// left/out, right/out, left/in, right/in, then back to left/out.
    pub fn cycle_hinge(&mut self) {
        (self.pivot, self.swing) = match (self.pivot, self.swing) {
            (Pivot::Left, Swing::Out) => (Pivot::Right, Swing::Out),
            (Pivot::Right, Swing::Out) => (Pivot::Left, Swing::In),
            (Pivot::Left, Swing::In) => (Pivot::Right, Swing::In),
            (Pivot::Right, Swing::In) => (Pivot::Left, Swing::Out),
        };
    }

    /// Lock the door, closing it.
    pub fn lock(&mut self) {
        self.is_locked = true;
        self.is_open = false;
    }

    /// Unlock the door. It stays closed.
    pub fn unlock(&mut self) {
        self.is_locked = false;
    }

    /// Open or close the door. Returns false, leaving it shut, if locked.
    pub fn toggle_open(&mut self) -> bool {
        if self.is_locked {
            return false;
        }
        self.is_open = !self.is_open;
        true
    }
}

/// Cells covered by a fixed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Extent along x.
    pub width: u32,
    /// Extent along z.
    pub depth: u32,
}

/// An object. Fixed items (furniture, altars) have a footprint and a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Anchor cell when placed in the world.
    pub pos: Option<CellPos>,
    /// Footprint for fixed items; `None` for carryable ones.
    pub footprint: Option<Footprint>,
}

/// A monster or animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Current cell.
    pub pos: CellPos,
    /// Remaining hit points.
    pub hit_points: i32,
}

/// A player or non-player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Current cell.
    pub pos: CellPos,
    /// Experience level.
    pub level: u32,
}

/// Per-kind payload of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    /// See [`Floor`].
    Floor(Floor),
    /// See [`Wall`].
    Wall(Wall),
    /// See [`Door`].
    Door(Door),
    /// See [`Item`].
    Item(Item),
    /// See [`Creature`].
    Creature(Creature),
    /// See [`Character`].
    Character(Character),
}

/// Every placed object in the world. Owned exclusively by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Display name; empty for plain geometry.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Kind-specific data.
    #[serde(flatten)]
    pub body: Body,
}

impl Entity {
    /// Wrap a payload with empty base fields.
    pub fn new(body: Body) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            body,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The entity's kind.
    pub fn kind(&self) -> EntityKind {
        match self.body {
            Body::Floor(_) => EntityKind::Floor,
            Body::Wall(_) => EntityKind::Wall,
            Body::Door(_) => EntityKind::Door,
            Body::Item(_) => EntityKind::Item,
            Body::Creature(_) => EntityKind::Creature,
            Body::Character(_) => EntityKind::Character,
        }
    }

    /// The cell the entity stands on, if it has one.
    pub fn position(&self) -> Option<CellPos> {
        match &self.body {
            Body::Floor(f) => Some(f.pos),
            Body::Wall(w) => Some(w.edge.pos),
            Body::Door(d) => Some(d.edge.pos),
            Body::Item(i) => i.pos,
            Body::Creature(c) => Some(c.pos),
            Body::Character(c) => Some(c.pos),
        }
    }

    /// Check kind-specific constraints and that the entity lies on the grid.
    pub fn validate(&self) -> DwResult<()> {
        if let Some(pos) = self.position() {
            pos.check()?;
        }
        if let Body::Item(Item {
            footprint: Some(fp),
            ..
        }) = &self.body
            && (fp.width == 0 || fp.depth == 0)
        {
            return Err(DwError::InvalidFootprint {
                name: self.name.clone(),
                width: fp.width,
                depth: fp.depth,
            });
        }
        Ok(())
    }

    /// The floor payload, if this is a floor.
    pub fn as_floor(&self) -> Option<&Floor> {
        match &self.body {
            Body::Floor(f) => Some(f),
            _ => None,
        }
    }

    /// The wall payload, if this is a wall.
    pub fn as_wall(&self) -> Option<&Wall> {
        match &self.body {
            Body::Wall(w) => Some(w),
            _ => None,
        }
    }

    /// The door payload, if this is a door.
    pub fn as_door(&self) -> Option<&Door> {
        match &self.body {
            Body::Door(d) => Some(d),
            _ => None,
        }
    }

    /// Mutable door payload, if this is a door.
    pub fn as_door_mut(&mut self) -> Option<&mut Door> {
        match &mut self.body {
            Body::Door(d) => Some(d),
            _ => None,
        }
    }

    /// The item payload, if this is an item.
    pub fn as_item(&self) -> Option<&Item> {
        match &self.body {
            Body::Item(i) => Some(i),
            _ => None,
        }
    }
}

impl From<Floor> for Entity {
    fn from(floor: Floor) -> Self {
        Self::new(Body::Floor(floor))
    }
}

impl From<Wall> for Entity {
    fn from(wall: Wall) -> Self {
        Self::new(Body::Wall(wall))
    }
}

impl From<Door> for Entity {
    fn from(door: Door) -> Self {
        Self::new(Body::Door(door))
    }
}
