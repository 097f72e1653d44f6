//! Plays the bundled Grand Line map from start to finish.

use adventure_core::{GameConfig, GameEvent, GameLoop, ScriptedEditor, Session, Status};
use adventure_world::{LocationId, World};

const MAP: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../maps/grand_line.json");

const WINNING_ROUTE: &[&str] = &[
    "n",
    "get meat",
    "s",
    "e",
    "trade meat",
    "n",
    "ne",
    "n",
    "nw",
    "get one",
    "n",
    "i",
    "inventory",
];

fn new_session() -> Session {
    Session::new(World::load(MAP).unwrap(), GameConfig::default())
}

#[test]
fn test_bundled_map_loads() {
    let world = World::load(MAP).unwrap();
    assert_eq!(world.len(), 8);
    assert_eq!(world.final_location().name, "Laugh Tale");
    assert_eq!(
        world.location_at(LocationId(5)).unwrap().required_key(),
        Some("log pose")
    );
}

#[test]
fn test_winning_route() {
    let mut session = new_session();
    let mut events = Vec::new();
    let mut last = None;

    for line in WINNING_ROUTE {
        let response = session.handle_line(line);
        events.extend(response.events.iter().cloned());
        last = Some(response);
    }

    let last = last.unwrap();
    assert_eq!(last.status, Status::Won);
    assert_eq!(
        last.lines.last().unwrap(),
        "Congratulations! You have found the One Piece and won the game!"
    );
    assert_eq!(session.player().location, LocationId(7));
    assert!(events.contains(&GameEvent::Traded {
        given: "meat".into(),
        received: "log pose".into(),
    }));
    assert!(events.contains(&GameEvent::Unlocked {
        location: LocationId(5),
        key: "log pose".into(),
    }));
}

#[test]
fn test_winning_route_through_game_loop() {
    let editor = ScriptedEditor::new(WINNING_ROUTE.iter().copied());
    let mut game = GameLoop::new(new_session(), editor, Vec::new());

    assert_eq!(game.run().unwrap(), Status::Won);

    let (_, editor, out) = game.into_parts();
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("Welcome to the One Piece Adventure Game!\n"));
    assert!(output.contains("Using log pose to unlock the door."));
    assert!(output.contains("Did you mean one of these commands? inventory, items"));
    assert!(!output.contains("Thank you for playing!"));
    // The loop stops reading once the game is won.
    assert_eq!(editor.prompts().len(), WINNING_ROUTE.len());
}

#[test]
fn test_skypiea_stays_locked_without_log_pose() {
    let mut session = new_session();
    for line in ["n", "e", "ne"] {
        session.handle_line(line);
    }
    assert_eq!(session.player().location, LocationId(4));

    let response = session.handle_line("north");
    assert_eq!(
        response.text(),
        "The door is locked. You need something to unlock it."
    );
    assert_eq!(session.player().location, LocationId(4));
}
