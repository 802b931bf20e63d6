use std::path::Path;

use dw_core::{World, WorldMeta};

pub fn run(file: &Path, name: Option<&str>, force: bool) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let name = name
        .map(str::to_string)
        .or_else(|| file.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "Untitled Dungeon".to_string());
    let world = World::new(WorldMeta::new(&name));
    super::save(file, &world)?;

    println!("Created world '{}' in {}", name, file.display());
    println!();
    println!("Get started:");
    println!("  dw draw room {} --from 0,0,0 --to 4,0,3", file.display());
    println!("  dw draw door {} --from 2,0,0 --edge north", file.display());
    println!("  dw info {}", file.display());

    Ok(())
}
