use std::path::Path;

use colored::Colorize;
use dw_core::{CellPos, Color, Direction, RoomId};
use dw_edit::{Editor, EditorConfig, ToolKind};

use super::Tally;

/// One gesture given on the command line.
pub struct Stroke {
    pub from: CellPos,
    pub to: CellPos,
    pub edge: Option<Direction>,
}

pub fn run(
    file: &Path,
    tool: ToolKind,
    stroke: &Stroke,
    color: Option<Color>,
    room: Option<&str>,
) -> Result<(), String> {
    let world = super::load(file)?;
    let before = Tally::of(&world);
    let mut editor = Editor::new(world, EditorConfig::default());

    if let Some(color) = color {
        let palette = editor.palette_mut();
        match tool {
            ToolKind::Floor => palette.floor_color = color,
            ToolKind::Door => palette.door_color = color,
            _ => palette.wall_color = color,
        }
    }
    if let Some(id) = room
        && !editor.select_room(&RoomId::from(id))
    {
        return Err(format!("no room with id '{id}'"));
    }

    editor.select_tool(tool);
    editor
        .start(stroke.from, stroke.edge)
        .map_err(|e| e.to_string())?;
    editor.update(stroke.to).map_err(|e| e.to_string())?;
    let changed = editor.finish(stroke.to).map_err(|e| e.to_string())?;

    if !changed {
        println!("  {}: nothing to do", tool.label());
        return Ok(());
    }

    let world = editor.into_world();
    super::save(file, &world)?;

    let after = Tally::of(&world);
    println!("  {}", tool.label().bold());
    report("floors", before.floors, after.floors);
    report("walls", before.walls, after.walls);
    report("doors", before.doors, after.doors);
    report("items", before.items, after.items);

    Ok(())
}

fn report(what: &str, before: usize, after: usize) {
    if after > before {
        println!("  {} {what}", format!("+{}", after - before).green());
    } else if after < before {
        println!("  {} {what}", format!("-{}", before - after).red());
    }
}
