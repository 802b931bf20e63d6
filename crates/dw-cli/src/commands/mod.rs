pub mod door;
pub mod draw;
pub mod info;
pub mod init;
pub mod room;
pub mod rooms;

use std::fs;
use std::path::Path;

use dw_core::{World, WorldSnapshot};

/// Read a world file.
fn load(path: &Path) -> Result<World, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let snapshot =
        WorldSnapshot::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    World::from_snapshot(snapshot).map_err(|e| format!("{}: {e}", path.display()))
}

/// Write a world file, replacing any previous content.
fn save(path: &Path, world: &World) -> Result<(), String> {
    let json = world.export().to_json().map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Entity totals used to report what a command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Tally {
    floors: usize,
    walls: usize,
    doors: usize,
    items: usize,
}

impl Tally {
    fn of(world: &World) -> Self {
        Self {
            floors: world.floors().count(),
            walls: world.walls().count(),
            doors: world.doors().count(),
            items: world.items().count(),
        }
    }
}
