use std::path::Path;

use dw_core::RoomId;

pub fn create(file: &Path, name: &str) -> Result<(), String> {
    let mut world = super::load(file)?;
    let room = world.rooms_mut().create_room(name).clone();
    super::save(file, &world)?;
    println!("Created room '{}' (#{}) with id {}", room.name, room.number, room.id);
    Ok(())
}

pub fn select(file: &Path, id: &str) -> Result<(), String> {
    let mut world = super::load(file)?;
    if !world.rooms_mut().select_room(&RoomId::from(id)) {
        return Err(format!("no room with id '{id}'"));
    }
    super::save(file, &world)?;
    println!("Selected room '{}'", world.rooms().selected().name);
    Ok(())
}

pub fn delete(file: &Path, id: &str) -> Result<(), String> {
    let id = RoomId::from(id);
    if id.is_default() {
        return Err("the default room cannot be deleted".into());
    }
    let mut world = super::load(file)?;
    let Some(room) = world.rooms_mut().take_room(&id) else {
        return Err(format!("no room with id '{id}'"));
    };
    super::save(file, &world)?;
    println!(
        "Deleted room '{}'; {} members returned to no room",
        room.name,
        room.counts().total
    );
    Ok(())
}

pub fn rename(file: &Path, id: &str, name: &str) -> Result<(), String> {
    let mut world = super::load(file)?;
    if !world.rooms_mut().rename_room(&RoomId::from(id), name) {
        return Err(format!("no room with id '{id}'"));
    }
    super::save(file, &world)?;
    println!("Renamed room {id} to '{name}'");
    Ok(())
}
