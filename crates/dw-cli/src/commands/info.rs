use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load(file)?;
    let tally = super::Tally::of(&world);

    println!("  {}", world.meta.name.bold());
    if !world.meta.description.is_empty() {
        println!("  {}", world.meta.description);
    }
    println!(
        "  created {}",
        world.meta.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    println!("  Floors:  {}", tally.floors);
    println!("  Walls:   {}", tally.walls);
    println!("  Doors:   {}", tally.doors);
    println!("  Items:   {}", tally.items);
    println!("  Actors:  {}", world.actors().count());
    println!(
        "  Rooms:   {} (selected: {})",
        world.rooms().len(),
        world.rooms().selected().name
    );
    match world.bounds() {
        Some(b) => println!("  Bounds:  {} .. {}", b.min, b.max),
        None => println!("  Bounds:  {}", "empty".dimmed()),
    }
    println!("  Next id: {}", world.registry().next_id());

    Ok(())
}
