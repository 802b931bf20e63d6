//! Core types for Dungeonwright: the spatial data model of a tile dungeon.
//!
//! A [`World`] owns every placed entity through its [`Registry`], indexes
//! floors by cell and walls/doors by edge, and groups keys into rooms. It
//! knows nothing about tools or undo; those live in `dw-edit`, which drives
//! the world through the placement primitives defined here.

/// RGB colors.
pub mod color;
/// Entity ids and the entity sum type.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Cell positions, edge keys and bounding boxes.
pub mod key;
/// Identity allocation and ownership of entities.
pub mod registry;
/// Named, numbered groups of keys.
pub mod room;
/// JSON export and import.
pub mod snapshot;
/// The spatial world store.
pub mod world;

/// Re-export of [`color::Color`].
pub use color::Color;
/// Re-export core entity types.
pub use entity::{
    Body, Character, Creature, Door, Entity, EntityId, EntityKind, Floor, Footprint, Item, Pivot,
    Swing, Wall,
};
/// Re-export error types.
pub use error::{DwError, DwResult};
/// Re-export key types.
pub use key::{Axis, Bounds, CellPos, Direction, EdgeKey};
/// Re-export of [`registry::Registry`].
pub use registry::Registry;
/// Re-export room types.
pub use room::{Member, Room, RoomCounts, RoomId, RoomIndex};
/// Re-export snapshot types.
pub use snapshot::{Record, WorldSnapshot};
/// Re-export world model types.
pub use world::{Placed, Placement, Slot, World, WorldMeta};
