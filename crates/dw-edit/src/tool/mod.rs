//! Drag tools: gestures, planned operations, and the tool state machine.
//!
//! A tool never touches the world. Given the current gesture and a read-only
//! [`ToolContext`] it plans a list of [`Op`]s; the preview is derived from
//! that plan, and the [`Editor`](crate::Editor) executes it on `finish`.

pub mod door;
pub mod engine;
pub mod eraser;
pub mod floor;
pub mod room;
pub mod wall;

use std::fmt;
use std::str::FromStr;

use dw_core::{
    Axis, Body, Bounds, CellPos, Color, Direction, EdgeKey, Entity, EntityId, EntityKind, Slot,
    World,
};

use crate::config::Palette;

pub use door::DoorTool;
pub use engine::ToolEngine;
pub use eraser::{DoorEraser, FloorEraser, WallEraser};
pub use floor::FloorTool;
pub use room::RoomTool;
pub use wall::WallTool;

/// Identifies a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    /// Draw a straight run of walls.
    #[default]
    Wall,
    /// Paint a rectangle of floor.
    Floor,
    /// Place a door, or cycle an existing one's hinge.
    Door,
    /// Floor a rectangle, wall its rim, and make it a room.
    Room,
    /// Remove a run of walls.
    EraseWall,
    /// Remove a rectangle of floor and the items on it.
    EraseFloor,
    /// Remove a door.
    EraseDoor,
}

impl ToolKind {
    /// All tools in menu order.
    pub const ALL: [ToolKind; 7] = [
        Self::Wall,
        Self::Floor,
        Self::Door,
        Self::Room,
        Self::EraseWall,
        Self::EraseFloor,
        Self::EraseDoor,
    ];

    /// Short command-line name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Door => "door",
            Self::Room => "room",
            Self::EraseWall => "erase-wall",
            Self::EraseFloor => "erase-floor",
            Self::EraseDoor => "erase-door",
        }
    }

    /// Label for the history entry a gesture of this tool records.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wall => "Draw walls",
            Self::Floor => "Paint floor",
            Self::Door => "Place door",
            Self::Room => "Create room",
            Self::EraseWall => "Erase walls",
            Self::EraseFloor => "Erase floor",
            Self::EraseDoor => "Erase door",
        }
    }

    /// Whether this tool only removes things.
    pub const fn is_eraser(self) -> bool {
        matches!(self, Self::EraseWall | Self::EraseFloor | Self::EraseDoor)
    }

    /// Cells a gesture of this tool would touch when committed.
    ///
    /// Line tools count the run on the locked axis, so drift across it is
    /// free; area tools count the whole rectangle.
    pub fn reach(self, gesture: &Gesture) -> u64 {
        match self {
            Self::Wall | Self::EraseWall => gesture.line_len(),
            Self::Door | Self::EraseDoor => 1,
            Self::Floor | Self::Room | Self::EraseFloor => gesture.rect().cell_count(),
        }
    }

    /// The implementation behind this kind.
    pub fn tool(self) -> &'static dyn Tool {
        match self {
            Self::Wall => &WallTool,
            Self::Floor => &FloorTool,
            Self::Door => &DoorTool,
            Self::Room => &RoomTool,
            Self::EraseWall => &WallEraser,
            Self::EraseFloor => &FloorEraser,
            Self::EraseDoor => &DoorEraser,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

/// Where a gesture began: a cell, and optionally the edge of it under the
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Start cell.
    pub pos: CellPos,
    /// Edge of the start cell that was picked, if any.
    pub edge: Option<Direction>,
}

impl Anchor {
    /// Anchor on a cell without an edge.
    pub const fn cell(pos: CellPos) -> Self {
        Self { pos, edge: None }
    }

    /// Anchor on one edge of a cell.
    pub const fn edge(pos: CellPos, direction: Direction) -> Self {
        Self {
            pos,
            edge: Some(direction),
        }
    }
}

/// An open drag: anchor, latest cursor cell, and the locked axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    /// Where the drag began.
    pub anchor: Anchor,
    /// The latest cursor cell.
    pub current: CellPos,
    /// Axis fixed by the first movement, kept for the rest of the drag.
    pub lock: Option<Axis>,
}

impl Gesture {
    /// A gesture that has not moved yet.
    pub const fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            current: anchor.pos,
            lock: None,
        }
    }

    /// Move the cursor. The first move off the anchor locks an axis:
    /// x when `|dx| > |dz|`, z otherwise.
    pub fn track(&mut self, pos: CellPos) {
        self.current = pos;
        if self.lock.is_none() {
            let (dx, dz) = self.delta();
            if dx != 0 || dz != 0 {
                self.lock = Some(if dx.abs() > dz.abs() { Axis::X } else { Axis::Z });
            }
        }
    }

    /// Cursor offset from the anchor on the horizontal plane.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.current.x - self.anchor.pos.x,
            self.current.z - self.anchor.pos.z,
        )
    }

    /// The rectangle spanned by the anchor and the cursor, on the anchor's
    /// level.
    pub fn rect(&self) -> Bounds {
        let corner = CellPos::new(self.current.x, self.anchor.pos.y, self.current.z);
        Bounds::spanning(self.anchor.pos, corner)
    }

    /// Direction of a line drawn along the locked axis.
    ///
    /// An anchor edge lying on the locked axis wins; otherwise the sign of
    /// the perpendicular offset decides. `None` before the first move.
    pub fn line_direction(&self) -> Option<Direction> {
        let axis = self.lock?;
        if let Some(edge) = self.anchor.edge
            && edge.run_axis() == axis
        {
            return Some(edge);
        }
        let (dx, dz) = self.delta();
        Some(match axis {
            Axis::X if dz > 0 => Direction::South,
            Axis::X => Direction::North,
            Axis::Z if dx > 0 => Direction::East,
            Axis::Z => Direction::West,
        })
    }

    /// Edges of a straight run: one per cell between anchor and cursor on
    /// the locked axis, at the anchor's other coordinate.
    ///
    /// Without movement this is the anchor edge alone, or nothing.
    pub fn line(&self) -> Vec<EdgeKey> {
        let Some(direction) = self.line_direction() else {
            return self
                .anchor
                .edge
                .map(|d| vec![self.anchor.pos.edge(d)])
                .unwrap_or_default();
        };
        let start = self.anchor.pos;
        match direction.run_axis() {
            Axis::X => {
                let (lo, hi) = ordered(start.x, self.current.x);
                (lo..=hi)
                    .map(|x| CellPos::new(x, start.y, start.z).edge(direction))
                    .collect()
            }
            Axis::Z => {
                let (lo, hi) = ordered(start.z, self.current.z);
                (lo..=hi)
                    .map(|z| CellPos::new(start.x, start.y, z).edge(direction))
                    .collect()
            }
        }
    }

    /// Number of edges [`Gesture::line`] yields, without building them.
    pub fn line_len(&self) -> u64 {
        let Some(direction) = self.line_direction() else {
            return u64::from(self.anchor.edge.is_some());
        };
        let (from, to) = match direction.run_axis() {
            Axis::X => (self.anchor.pos.x, self.current.x),
            Axis::Z => (self.anchor.pos.z, self.current.z),
        };
        u64::from(from.abs_diff(to)) + 1
    }

    /// The single edge a door gesture targets: anchor edge, else the line
    /// direction, else north.
    pub fn door_edge(&self) -> EdgeKey {
        let direction = self
            .anchor
            .edge
            .or_else(|| self.line_direction())
            .unwrap_or(Direction::North);
        self.anchor.pos.edge(direction)
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// One world mutation planned by a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Create an empty room. Later ops refer to it by `number`.
    CreateRoom {
        /// Display name.
        name: String,
        /// Number the room will receive.
        number: u32,
    },
    /// Place an entity on its slot, replacing the occupant.
    Place {
        /// The new entity.
        entity: Entity,
        /// Number of the room its slot joins.
        room: Option<u32>,
    },
    /// Remove the occupant of a slot.
    Remove(Slot),
    /// Replace an entity's data in place.
    Modify {
        /// Target entity.
        id: EntityId,
        /// New data.
        entity: Entity,
    },
}

/// One element of the live preview a renderer draws during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewItem {
    /// What would be placed or removed.
    pub kind: EntityKind,
    /// Cell it sits on.
    pub pos: CellPos,
    /// Edge side for walls and doors.
    pub direction: Option<Direction>,
    /// Color it would have, or has if being erased.
    pub color: Option<Color>,
    /// Whether this marks a removal.
    pub erase: bool,
}

impl PreviewItem {
    /// Preview entry for a planned op. Room creation has none.
    pub fn from_op(op: &Op, world: &World) -> Option<Self> {
        match op {
            Op::CreateRoom { .. } => None,
            Op::Place { entity, .. } | Op::Modify { entity, .. } => {
                Some(Self::of(entity, false))
            }
            Op::Remove(slot) => world.at(*slot).map(|(_, e)| Self::of(e, true)),
        }
    }

    fn of(entity: &Entity, erase: bool) -> Self {
        let (pos, direction, color) = match &entity.body {
            Body::Floor(f) => (f.pos, None, Some(f.color)),
            Body::Wall(w) => (w.edge.pos, Some(w.edge.direction), Some(w.color)),
            Body::Door(d) => (d.edge.pos, Some(d.edge.direction), Some(d.color)),
            _ => (entity.position().unwrap_or(CellPos::new(0, 0, 0)), None, None),
        };
        Self {
            kind: entity.kind(),
            pos,
            direction,
            color,
            erase,
        }
    }
}

/// Read-only view a tool plans against.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    /// The world as it is before the gesture commits.
    pub world: &'a World,
    /// Colors and materials for new geometry.
    pub palette: &'a Palette,
}

/// A drag tool.
///
/// Planning is pure: the same gesture against the same world yields the same
/// ops, so the preview and the committed edit always agree.
pub trait Tool: fmt::Debug + Sync {
    /// Which tool this is.
    fn kind(&self) -> ToolKind;

    /// Plan the mutations the gesture would make if it finished now.
    fn plan(&self, gesture: &Gesture, ctx: &ToolContext<'_>) -> Vec<Op>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(anchor: Anchor, to: (i32, i32)) -> Gesture {
        let mut g = Gesture::new(anchor);
        g.track(CellPos::new(to.0, 0, to.1));
        g
    }

    #[test]
    fn first_move_locks_axis() {
        let mut g = Gesture::new(Anchor::cell(CellPos::new(0, 0, 0)));
        g.track(CellPos::new(0, 0, 0));
        assert_eq!(g.lock, None);
        g.track(CellPos::new(3, 0, 1));
        assert_eq!(g.lock, Some(Axis::X));
        g.track(CellPos::new(0, 0, 9));
        assert_eq!(g.lock, Some(Axis::X));
    }

    #[test]
    fn diagonal_locks_z() {
        let g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (2, 2));
        assert_eq!(g.lock, Some(Axis::Z));
    }

    #[test]
    fn line_direction_from_perpendicular_sign() {
        let g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (5, 0));
        assert_eq!(g.line_direction(), Some(Direction::North));
        let mut g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (5, 0));
        g.track(CellPos::new(5, 0, 1));
        assert_eq!(g.line_direction(), Some(Direction::South));
        let g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (1, 4));
        assert_eq!(g.line_direction(), Some(Direction::East));
        let g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (0, -4));
        assert_eq!(g.line_direction(), Some(Direction::West));
    }

    #[test]
    fn anchor_edge_on_locked_axis_wins() {
        let anchor = Anchor::edge(CellPos::new(0, 0, 0), Direction::South);
        let g = gesture(anchor, (4, 0));
        assert_eq!(g.line_direction(), Some(Direction::South));
        // Off-axis anchor edges are ignored.
        let g = gesture(anchor, (0, 4));
        assert_eq!(g.line_direction(), Some(Direction::West));
    }

    #[test]
    fn line_spans_inclusive_range() {
        let g = gesture(Anchor::cell(CellPos::new(2, 0, 7)), (-1, 7));
        let line = g.line();
        assert_eq!(line.len(), 4);
        assert!(line.iter().all(|e| e.pos.z == 7 && e.direction == Direction::North));
        assert_eq!(line[0].pos.x, -1);
        assert_eq!(g.line_len(), 4);
    }

    #[test]
    fn reach_counts_line_not_rectangle() {
        let mut g = gesture(Anchor::cell(CellPos::new(0, 0, 0)), (150, 0));
        g.track(CellPos::new(150, 0, 70));
        assert_eq!(g.line().len(), 151);
        assert_eq!(ToolKind::Wall.reach(&g), 151);
        assert_eq!(ToolKind::EraseWall.reach(&g), 151);
        assert_eq!(ToolKind::Door.reach(&g), 1);
        assert_eq!(ToolKind::Floor.reach(&g), 151 * 71);

        let still = Gesture::new(Anchor::cell(CellPos::new(0, 0, 0)));
        assert_eq!(ToolKind::Wall.reach(&still), 0);
    }

    #[test]
    fn unmoved_line_is_anchor_edge_or_nothing() {
        let g = Gesture::new(Anchor::cell(CellPos::new(0, 0, 0)));
        assert!(g.line().is_empty());
        let g = Gesture::new(Anchor::edge(CellPos::new(0, 0, 0), Direction::East));
        assert_eq!(g.line(), vec![CellPos::new(0, 0, 0).edge(Direction::East)]);
    }

    #[test]
    fn door_edge_fallbacks() {
        let g = Gesture::new(Anchor::cell(CellPos::new(1, 0, 1)));
        assert_eq!(g.door_edge().direction, Direction::North);
        let g = gesture(Anchor::cell(CellPos::new(1, 0, 1)), (1, 3));
        assert_eq!(g.door_edge(), CellPos::new(1, 0, 1).edge(Direction::West));
    }

    #[test]
    fn rect_uses_anchor_level() {
        let mut g = Gesture::new(Anchor::cell(CellPos::new(0, 2, 0)));
        g.track(CellPos::new(1, 5, 1));
        let rect = g.rect();
        assert_eq!(rect.min.y, 2);
        assert_eq!(rect.max.y, 2);
        assert_eq!(rect.cell_count(), 4);
    }

    #[test]
    fn tool_names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.as_str().parse::<ToolKind>().unwrap(), kind);
            assert_eq!(kind.tool().kind(), kind);
        }
        assert!("brush".parse::<ToolKind>().is_err());
    }
}
