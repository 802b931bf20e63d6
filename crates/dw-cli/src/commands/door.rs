use std::path::Path;

use dw_core::EdgeKey;
use dw_edit::{Editor, EditorConfig};

/// What to do with a door.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Toggle,
    Lock,
    Unlock,
    Cycle,
}

pub fn run(file: &Path, edge: EdgeKey, action: Action) -> Result<(), String> {
    let world = super::load(file)?;
    if world.get_door(edge).is_none() {
        return Err(format!("no door at {edge}"));
    }
    let mut editor = Editor::new(world, EditorConfig::default());

    let changed = match action {
        Action::Toggle => editor.toggle_door(edge),
        Action::Lock => editor.set_door_locked(edge, true),
        Action::Unlock => editor.set_door_locked(edge, false),
        Action::Cycle => editor.cycle_door(edge),
    }
    .map_err(|e| e.to_string())?;

    if !changed {
        let reason = match action {
            Action::Toggle => "the door is locked",
            Action::Lock => "the door is already locked",
            Action::Unlock => "the door is not locked",
            Action::Cycle => "nothing to do",
        };
        println!("  Door unchanged: {reason}");
        return Ok(());
    }

    let world = editor.into_world();
    super::save(file, &world)?;
    if let Some(door) = world.get_door(edge) {
        println!(
            "  Door at {edge}: {}, {}, hinge {:?}/{:?}",
            if door.is_open { "open" } else { "closed" },
            if door.is_locked { "locked" } else { "unlocked" },
            door.pivot,
            door.swing,
        );
    }
    Ok(())
}
