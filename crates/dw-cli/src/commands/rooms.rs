use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load(file)?;
    let rooms = world.rooms();
    let selected = rooms.selected().number;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "", "#", "Id", "Name", "Floors", "Walls", "Doors", "Items", "Total",
    ]);

    for room in rooms.rooms() {
        let counts = room.counts();
        let marker = if room.number == selected { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            room.number.to_string(),
            room.id.to_string(),
            room.name.clone(),
            counts.floors.to_string(),
            counts.walls.to_string(),
            counts.doors.to_string(),
            counts.items.to_string(),
            counts.total.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", rooms.len());

    Ok(())
}
