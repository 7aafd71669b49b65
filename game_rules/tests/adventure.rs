use game_rules::{GameManager, Item, Narration, Room, WorldConfig, WorldError};
use quart_graph::Direction;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Four rooms in a loop:
///
/// ```text
/// Gate    Garden
/// Crypt   Chapel
/// ```
fn abbey(config: WorldConfig) -> GameManager {
    let mut game = GameManager::new(config);
    let gate = game.create_room("Gate");
    let garden = game.create_room("Garden");
    let crypt = game.create_room("Crypt");
    let chapel = game.create_room("Chapel");

    game.add_room(gate, None, Direction::North).unwrap();
    game.add_room(garden, Some("Gate"), Direction::East).unwrap();
    game.add_room(crypt, Some("Gate"), Direction::South).unwrap();
    game.add_room(chapel, Some("Crypt"), Direction::East).unwrap();
    game.connect_rooms("Garden", Direction::South, "Chapel").unwrap();
    game
}

#[test]
fn test_walk_the_loop() {
    init_logging();
    let mut game = abbey(WorldConfig::default());
    let pilgrim = game.create_player("Pilgrim");
    game.add_player(pilgrim);
    game.start_player("Gate").unwrap();

    let route = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];
    let visited: Vec<String> = route
        .into_iter()
        .map(|direction| match game.move_player(direction).unwrap() {
            Narration::PlayerMoved { to, .. } => to,
            other => panic!("unexpected narration: {}", other),
        })
        .collect();

    assert_eq!(visited, ["Garden", "Chapel", "Crypt", "Gate"]);
    assert_eq!(game.rooms().iter().count(), 4);
}

#[test]
fn test_locked_chapel_opens_with_key() {
    init_logging();
    let mut game = abbey(WorldConfig::default());
    let pilgrim = game.create_player("Pilgrim");
    game.add_player(pilgrim);
    game.add_item("Crypt", Item::key("Iron key", 7));
    game.activate_puzzle("Chapel").unwrap();
    game.start_player("Crypt").unwrap();

    game.pick_up_item(&Item::key("Iron key", 7)).unwrap();
    game.move_player(Direction::East).unwrap();
    assert!(matches!(
        game.move_player(Direction::North).unwrap(),
        Narration::MoveBlocked { .. }
    ));

    let used = game.use_item(&Item::key("?", 7)).unwrap();
    assert_eq!(used.to_string(), "Pilgrim used Iron key in Chapel.");
    assert!(game.player().unwrap().bag().is_empty());

    let moved = game.move_player(Direction::North).unwrap();
    assert_eq!(
        moved.to_string(),
        "Pilgrim moved from Chapel to Garden via the north exit."
    );
}

#[test]
fn test_configured_world() {
    init_logging();
    let config = WorldConfig::from_toml_str(
        r#"
        room_capacity = 1
        starting_bag_name = "Canvas sack"
        default_player_capacity = 1
        "#,
    )
    .unwrap();
    let mut game = abbey(config);
    let pilgrim = game.create_player("Pilgrim");
    assert_eq!(pilgrim.bag().name(), "Canvas sack");
    game.add_player(pilgrim);

    game.add_item("Gate", Item::relic("Candle", 1));
    let rejected = game.add_item("Gate", Item::relic("Bell", 2));
    assert_eq!(rejected.to_string(), "Could not add Bell to the game.");

    game.start_player("Gate").unwrap();
    game.pick_up_item(&Item::relic("Candle", 1)).unwrap();
    game.add_item("Gate", Item::relic("Bell", 2));
    let full = game.pick_up_item(&Item::relic("Bell", 2)).unwrap();
    assert_eq!(full.to_string(), "Pilgrim's inventory is full.");
}

#[test]
fn test_removing_rooms_reshapes_the_world() {
    init_logging();
    let mut game = abbey(WorldConfig::default());

    game.remove_room("Gate").unwrap();
    // The loop keeps everyone else connected; the south exit led on first.
    assert_eq!(game.rooms().len(), 3);
    let root = game.rooms().root().unwrap();
    assert_eq!(game.rooms().value(root).map(Room::name), Some("Crypt"));

    assert_eq!(
        game.add_room(Room::new("Tower"), Some("Gate"), Direction::North),
        Err(WorldError::RoomDoesNotExist("Gate".to_string()))
    );
}

#[test]
fn test_saved_game_is_a_snapshot() {
    init_logging();
    let mut game = abbey(WorldConfig::default());
    let pilgrim = game.create_player("Pilgrim");
    game.add_player(pilgrim);
    game.start_player("Gate").unwrap();
    game.move_player(Direction::East).unwrap();

    let saved = game.clone();
    game.move_player(Direction::South).unwrap();
    game.remove_room("Garden").unwrap();

    assert_eq!(saved.current_room().map(Room::name), Some("Garden"));
    assert_eq!(saved.rooms().len(), 4);
    assert_eq!(game.current_room().map(Room::name), Some("Chapel"));
    assert_eq!(game.rooms().len(), 3);
}
