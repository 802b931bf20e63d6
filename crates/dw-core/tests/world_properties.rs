//! Property tests for the world store: edge exclusivity and snapshot identity.

use dw_core::{
    CellPos, Color, Direction, Door, EdgeKey, Floor, Member, Slot, Wall, World, WorldMeta,
    WorldSnapshot,
};
use proptest::prelude::*;

fn edge_strategy() -> impl Strategy<Value = EdgeKey> {
    (-3i32..3, -3i32..3, 0usize..4)
        .prop_map(|(x, z, d)| CellPos::new(x, 0, z).edge(Direction::ALL[d]))
}

#[derive(Debug, Clone)]
enum Op {
    Wall(EdgeKey),
    Door(EdgeKey),
    RemoveWall(EdgeKey),
    RemoveDoor(EdgeKey),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        edge_strategy().prop_map(Op::Wall),
        edge_strategy().prop_map(Op::Door),
        edge_strategy().prop_map(Op::RemoveWall),
        edge_strategy().prop_map(Op::RemoveDoor),
    ]
}

fn apply(world: &mut World, op: &Op) {
    match *op {
        Op::Wall(edge) => {
            world
                .set_wall(Wall {
                    edge,
                    color: Color::BRICK,
                    material: "stone".into(),
                })
                .unwrap();
        }
        Op::Door(edge) => {
            world.set_door(Door::new(edge, Color::OAK)).unwrap();
        }
        Op::RemoveWall(edge) => {
            world.remove_wall(edge);
        }
        Op::RemoveDoor(edge) => {
            world.remove_door(edge);
        }
    }
}

proptest! {
    #[test]
    fn at_most_one_of_wall_or_door_per_edge(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut world = World::new(WorldMeta::new("prop"));
        for op in &ops {
            apply(&mut world, op);
        }
        for x in -4..4 {
            for z in -4..4 {
                for d in Direction::ALL {
                    let edge = CellPos::new(x, 0, z).edge(d);
                    let both = world.get_wall(edge).is_some() && world.get_door(edge).is_some();
                    prop_assert!(!both, "wall and door share {edge}");
                }
            }
        }
        let placed = world.walls().count() + world.doors().count();
        prop_assert_eq!(placed, world.entity_count());
    }

    #[test]
    fn last_placement_wins(edge in edge_strategy(), door_last in any::<bool>()) {
        let mut world = World::new(WorldMeta::new("prop"));
        let ops = if door_last {
            [Op::Wall(edge), Op::Door(edge.canonical())]
        } else {
            [Op::Door(edge), Op::Wall(edge.canonical())]
        };
        for op in &ops {
            apply(&mut world, op);
        }
        prop_assert_eq!(world.get_door(edge).is_some(), door_last);
        prop_assert_eq!(world.get_wall(edge).is_some(), !door_last);
    }
}

fn furnished_world() -> World {
    let mut world = World::new(WorldMeta::new("Sunken Keep"));
    let hall = world.rooms_mut().create_room("Hall").clone();
    for x in 0..3 {
        for z in 0..2 {
            world
                .set_floor(Floor {
                    pos: CellPos::new(x, 0, z),
                    color: Color::STONE,
                    material: "flagstone".into(),
                    room: hall.number,
                })
                .unwrap();
        }
    }
    for x in 0..3 {
        world
            .set_wall(Wall {
                edge: CellPos::new(x, 0, 0).edge(Direction::North),
                color: Color::BRICK,
                material: "granite".into(),
            })
            .unwrap();
    }
    let door_edge = CellPos::new(1, 0, 1).edge(Direction::South);
    world.set_door(Door::new(door_edge, Color::OAK)).unwrap();
    world.update_door(door_edge, |d| d.lock());
    world
        .rooms_mut()
        .add_to_room(&hall.id, Member::Door(door_edge));
    // Leave a gap in the id sequence.
    world.remove_wall(CellPos::new(2, 0, 0).edge(Direction::North));
    world.rooms_mut().select_room(&hall.id);
    world
}

#[test]
fn export_import_preserves_ids_exactly() {
    let original = furnished_world();
    let json = original.export().to_json().unwrap();
    let restored = World::from_snapshot(WorldSnapshot::from_json(&json).unwrap()).unwrap();

    let floors = |w: &World| {
        w.floors()
            .map(|(id, f)| (id, f.clone()))
            .collect::<Vec<_>>()
    };
    let walls = |w: &World| w.walls().map(|(id, f)| (id, f.clone())).collect::<Vec<_>>();
    let doors = |w: &World| w.doors().map(|(id, f)| (id, f.clone())).collect::<Vec<_>>();
    assert_eq!(floors(&restored), floors(&original));
    assert_eq!(walls(&restored), walls(&original));
    assert_eq!(doors(&restored), doors(&original));
    assert_eq!(restored.registry().next_id(), original.registry().next_id());
}

#[test]
fn export_import_preserves_rooms_and_selection() {
    let original = furnished_world();
    let restored = World::from_snapshot(original.export()).unwrap();
    let rooms = |w: &World| w.rooms().rooms().cloned().collect::<Vec<_>>();
    assert_eq!(rooms(&restored), rooms(&original));
    assert_eq!(restored.rooms().selected().name, "Hall");
    assert_eq!(restored.rooms().next_number(), 2);
}

#[test]
fn restored_counter_prevents_collisions() {
    let original = furnished_world();
    let next = original.registry().next_id();
    let mut restored = World::from_snapshot(original.export()).unwrap();
    let id = restored
        .set_floor(Floor {
            pos: CellPos::new(9, 0, 9),
            color: Color::STONE,
            material: "stone".into(),
            room: 0,
        })
        .unwrap();
    assert_eq!(id.0, next);
}

#[test]
fn door_over_aliased_wall_is_one_slot() {
    let mut world = World::new(WorldMeta::new("alias"));
    let south = CellPos::new(3, 0, 5).edge(Direction::South);
    let north = CellPos::new(3, 0, 6).edge(Direction::North);
    world
        .set_wall(Wall {
            edge: south,
            color: Color::BRICK,
            material: "stone".into(),
        })
        .unwrap();
    assert_eq!(world.id_at(Slot::Wall(north)), world.id_at(Slot::Wall(south)));
    world.set_door(Door::new(north, Color::OAK)).unwrap();
    assert_eq!(world.walls().count(), 0);
    assert_eq!(world.doors().next().unwrap().1.edge, north);
}
