use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DwError, DwResult};

/// Largest absolute coordinate accepted from external input.
pub const MAX_COORD: i32 = 1 << 20;

/// Position key: one cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    /// Column.
    pub x: i32,
    /// Level.
    pub y: i32,
    /// Row.
    pub z: i32,
}

impl CellPos {
    /// Create a position from integer coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a position from untyped numeric input.
    ///
    /// Fails on non-integral, non-finite or out-of-range values instead of
    /// rounding them.
    pub fn from_coords(x: f64, y: f64, z: f64) -> DwResult<Self> {
        Ok(Self {
            x: coord(x)?,
            y: coord(y)?,
            z: coord(z)?,
        })
    }

    /// Reject positions outside the addressable grid.
    ///
    /// Keys built in code or read from a snapshot bypass [`from_coords`],
    /// so stores call this before indexing them.
    ///
    /// [`from_coords`]: CellPos::from_coords
    pub fn check(self) -> DwResult<Self> {
        if [self.x, self.y, self.z]
            .iter()
            .any(|c| c.unsigned_abs() > MAX_COORD.unsigned_abs())
        {
            return Err(DwError::InvalidCoordinate(self.to_string()));
        }
        Ok(self)
    }

    /// The same position shifted by `dx`, `dz` on the horizontal plane.
    ///
    /// Saturates at the `i32` limits; such keys never pass [`CellPos::check`].
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y,
            z: self.z.saturating_add(dz),
        }
    }

    /// The edge on the given side of this cell.
    pub const fn edge(self, direction: Direction) -> EdgeKey {
        EdgeKey::new(self, direction)
    }
}

fn coord(value: f64) -> DwResult<i32> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > f64::from(MAX_COORD) {
        return Err(DwError::InvalidCoordinate(value.to_string()));
    }
    Ok(value as i32)
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`. Whitespace around components is ignored.
impl FromStr for CellPos {
    type Err = DwError;

    fn from_str(s: &str) -> DwResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DwError::InvalidCoordinate(s.to_string()));
        }
        let mut values = [0.0; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| DwError::InvalidCoordinate(s.to_string()))?;
        }
        Self::from_coords(values[0], values[1], values[2])
    }
}

/// Horizontal axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left/right on screen; the axis north/south edges run along.
    X,
    /// Forward/back; the axis west/east edges run along.
    Z,
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The edge at `z`.
    North,
    /// The edge at `z + 1`.
    South,
    /// The edge at `x + 1`.
    East,
    /// The edge at `x`.
    West,
}

impl Direction {
    /// All four directions in declaration order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The axis an edge on this side runs along.
    pub const fn run_axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::X,
            Self::East | Self::West => Axis::Z,
        }
    }

    /// The opposite side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Lower-case name as used in snapshots and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DwError;

    fn from_str(s: &str) -> DwResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            _ => Err(DwError::InvalidDirection(s.to_string())),
        }
    }
}

/// Edge key: one side of one cell, as seen from that cell.
///
/// South of `(x, y, z)` and north of `(x, y, z + 1)` are the same physical
/// edge. Stores compare edges through [`EdgeKey::canonical`], which folds
/// every edge onto its north/west spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    /// The cell the edge was addressed from.
    pub pos: CellPos,
    /// Which side of the cell.
    pub direction: Direction,
}

impl EdgeKey {
    /// Create an edge key.
    pub const fn new(pos: CellPos, direction: Direction) -> Self {
        Self { pos, direction }
    }

    /// The north/west spelling of this physical edge.
    pub const fn canonical(self) -> Self {
        match self.direction {
            Direction::North | Direction::West => self,
            Direction::South => Self::new(self.pos.offset(0, 1), Direction::North),
            Direction::East => Self::new(self.pos.offset(1, 0), Direction::West),
        }
    }

    /// Whether both keys name the same physical edge.
    pub fn same_edge(self, other: EdgeKey) -> bool {
        self.canonical() == other.canonical()
    }

    /// The parallel edge `step` cells further along the run axis.
    pub const fn along(self, step: i32) -> Self {
        let pos = match self.direction.run_axis() {
            Axis::X => self.pos.offset(step, 0),
            Axis::Z => self.pos.offset(0, step),
        };
        Self::new(pos, self.direction)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.direction)
    }
}

/// Inclusive axis-aligned box of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest corner.
    pub min: CellPos,
    /// Largest corner.
    pub max: CellPos,
}

impl Bounds {
    /// A box holding a single cell.
    pub const fn point(pos: CellPos) -> Self {
        Self { min: pos, max: pos }
    }

    /// The box spanned by two corners, in any order.
    pub fn spanning(a: CellPos, b: CellPos) -> Self {
        let mut bounds = Self::point(a);
        bounds.include(b);
        bounds
    }

    /// Grow the box to contain `pos`.
    pub fn include(&mut self, pos: CellPos) {
        self.min = CellPos::new(
            self.min.x.min(pos.x),
            self.min.y.min(pos.y),
            self.min.z.min(pos.z),
        );
        self.max = CellPos::new(
            self.max.x.max(pos.x),
            self.max.y.max(pos.y),
            self.max.z.max(pos.z),
        );
    }

    /// Whether `pos` lies inside the box.
    pub fn contains(&self, pos: CellPos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x)
            && (self.min.y..=self.max.y).contains(&pos.y)
            && (self.min.z..=self.max.z).contains(&pos.z)
    }

    /// Number of cells in the box.
    pub fn cell_count(&self) -> u64 {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u64;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }

    /// Every cell in the box, x-major within each row.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (self.min.y..=self.max.y).flat_map(move |y| {
            (self.min.z..=self.max.z)
                .flat_map(move |z| (self.min.x..=self.max.x).map(move |x| CellPos::new(x, y, z)))
        })
    }
}
