//! Undo/redo behaviour of editing sessions driven through whole gestures.

use dw_core::{CellPos, Direction, Entity, EntityId, Pivot, Room, Slot, World, WorldMeta};
use dw_edit::{Editor, EditorConfig, ToolKind};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct State {
    entities: Vec<(EntityId, Entity)>,
    rooms: Vec<Room>,
}

fn state(editor: &Editor) -> State {
    let world = editor.world();
    State {
        entities: world
            .registry()
            .iter()
            .map(|(id, e)| (id, e.clone()))
            .collect(),
        rooms: world.rooms().rooms().cloned().collect(),
    }
}

fn editor() -> Editor {
    Editor::new(World::new(WorldMeta::new("Undo Vaults")), EditorConfig::default())
}

fn drag(
    editor: &mut Editor,
    kind: ToolKind,
    from: CellPos,
    edge: Option<Direction>,
    to: CellPos,
) -> bool {
    editor.select_tool(kind);
    editor.start(from, edge).unwrap();
    editor.update(to).unwrap();
    editor.finish(to).unwrap()
}

#[test]
fn straight_wall_drag_is_one_batch_of_six() {
    let mut ed = editor();
    assert!(drag(
        &mut ed,
        ToolKind::Wall,
        CellPos::new(0, 0, 0),
        None,
        CellPos::new(5, 0, 0),
    ));
    let walls: Vec<_> = ed.world().walls().map(|(_, w)| w.edge).collect();
    assert_eq!(walls.len(), 6);
    for (x, edge) in walls.iter().enumerate() {
        assert_eq!(edge.pos, CellPos::new(x as i32, 0, 0));
        assert_eq!(edge.direction, walls[0].direction);
    }
    assert_eq!(ed.history().len(), 1);
}

#[test]
fn door_over_wall_undoes_as_one_batch() {
    let mut ed = editor();
    let at = CellPos::new(2, 0, 2);
    let edge = at.edge(Direction::North);
    drag(&mut ed, ToolKind::Wall, at, Some(Direction::North), at);
    let wall_id = ed.world().id_at(Slot::Wall(edge)).unwrap();

    drag(&mut ed, ToolKind::Door, at, Some(Direction::North), at);
    assert!(ed.world().get_wall(edge).is_none());
    assert!(ed.world().get_door(edge).is_some());
    assert_eq!(ed.history().len(), 2);

    assert!(ed.undo().unwrap());
    assert!(ed.world().get_door(edge).is_none());
    assert_eq!(ed.world().id_at(Slot::Wall(edge)), Some(wall_id));
}

#[test]
fn new_door_hinges_toward_its_only_neighbour() {
    let mut ed = editor();
    drag(
        &mut ed,
        ToolKind::Wall,
        CellPos::new(0, 0, 0),
        None,
        CellPos::new(4, 0, 0),
    );
    drag(
        &mut ed,
        ToolKind::EraseWall,
        CellPos::new(0, 0, 0),
        None,
        CellPos::new(2, 0, 0),
    );
    // Walls remain at x = 3, 4; a door at x = 2 has a wall only at +1.
    let at = CellPos::new(2, 0, 0);
    drag(&mut ed, ToolKind::Door, at, Some(Direction::North), at);
    assert_eq!(
        ed.world().get_door(at.edge(Direction::North)).unwrap().pivot,
        Pivot::Right
    );
}

#[test]
fn undo_then_redo_restores_ids() {
    let mut ed = editor();
    drag(
        &mut ed,
        ToolKind::Room,
        CellPos::new(0, 0, 0),
        None,
        CellPos::new(3, 0, 2),
    );
    let before = state(&ed);
    assert!(ed.undo().unwrap());
    assert_ne!(state(&ed), before);
    assert!(ed.redo().unwrap());
    assert_eq!(state(&ed), before);
}

#[test]
fn default_room_survives_delete() {
    let mut ed = editor();
    let default = dw_core::RoomId::default_room();
    assert!(!ed.delete_room(&default));
    assert!(ed.world().rooms().room(&default).is_some());
    assert!(ed.history().is_empty());
}

#[test]
fn history_depth_is_enforced() {
    let mut ed = Editor::new(
        World::new(WorldMeta::new("shallow")),
        EditorConfig::default().with_history_depth(2),
    );
    for x in 0..4 {
        let at = CellPos::new(x, 0, 0);
        drag(&mut ed, ToolKind::Floor, at, None, at);
    }
    assert_eq!(ed.history().len(), 2);
    while ed.undo().unwrap() {}
    assert_eq!(ed.world().floors().count(), 2);
}

#[derive(Debug, Clone)]
struct Stroke {
    kind: ToolKind,
    from: CellPos,
    edge: Option<Direction>,
    to: CellPos,
}

fn cell() -> impl Strategy<Value = CellPos> {
    (-3i32..3, -3i32..3).prop_map(|(x, z)| CellPos::new(x, 0, z))
}

fn stroke() -> impl Strategy<Value = Stroke> {
    (
        0usize..ToolKind::ALL.len(),
        cell(),
        prop::option::of(0usize..4),
        cell(),
    )
        .prop_map(|(k, from, edge, to)| Stroke {
            kind: ToolKind::ALL[k],
            from,
            edge: edge.map(|d| Direction::ALL[d]),
            to,
        })
}

proptest! {
    #[test]
    fn undo_redo_walks_back_and_forth_exactly(strokes in prop::collection::vec(stroke(), 1..12)) {
        let mut ed = editor();
        let mut states = vec![state(&ed)];
        for s in &strokes {
            if drag(&mut ed, s.kind, s.from, s.edge, s.to) {
                states.push(state(&ed));
            }
        }
        prop_assert_eq!(ed.history().len(), states.len() - 1);

        for expected in states.iter().rev().skip(1) {
            prop_assert!(ed.undo().unwrap());
            prop_assert_eq!(&state(&ed), expected);
        }
        prop_assert!(!ed.undo().unwrap());

        for expected in states.iter().skip(1) {
            prop_assert!(ed.redo().unwrap());
            prop_assert_eq!(&state(&ed), expected);
        }
        prop_assert!(!ed.redo().unwrap());
    }

    #[test]
    fn cancelled_gestures_change_nothing(s in stroke()) {
        let mut ed = editor();
        drag(&mut ed, ToolKind::Room, CellPos::new(-1, 0, -1), None, CellPos::new(1, 0, 1));
        let before = state(&ed);
        ed.select_tool(s.kind);
        ed.start(s.from, s.edge).unwrap();
        ed.update(s.to).unwrap();
        prop_assert!(ed.cancel());
        prop_assert_eq!(state(&ed), before);
        prop_assert_eq!(ed.history().len(), 1);
    }
}
