//! Configuration for an editing session.

use dw_core::Color;

/// Colors and materials applied by the placement tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Color of new floor tiles.
    pub floor_color: Color,
    /// Material of new floor tiles.
    pub floor_material: String,
    /// Color of new walls.
    pub wall_color: Color,
    /// Material of new walls.
    pub wall_material: String,
    /// Color of new doors.
    pub door_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            floor_color: Color::STONE,
            floor_material: "stone".to_string(),
            wall_color: Color::BRICK,
            wall_material: "stone".to_string(),
            door_color: Color::OAK,
        }
    }
}

/// Configuration for an [`Editor`](crate::Editor).
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Maximum undo depth. Oldest entries are dropped beyond it. 0 = unlimited.
    pub history_depth: usize,
    /// Most cells a single gesture may touch: the run for line tools, the
    /// rectangle for area tools. 0 = unlimited.
    pub max_gesture_cells: u64,
    /// Colors and materials for new geometry.
    pub palette: Palette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: 100,
            max_gesture_cells: 10_000,
            palette: Palette::default(),
        }
    }
}

impl EditorConfig {
    /// Set the maximum undo depth (0 = unlimited).
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Set the largest rectangle a gesture may cover.
    pub fn with_max_gesture_cells(mut self, cells: u64) -> Self {
        self.max_gesture_cells = cells;
        self
    }

    /// Replace the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
