use ae::style::GameStyle;
use ae::*;
use oca_engine as ae;

#[test]
fn test_command_parse() {
    use ae::command::*;
    assert!(matches!(parse_command("look here"), Command::Look(LookTarget::Here)));
    assert!(matches!(parse_command("go n"), Command::MoveTo(Direction::North)));
    assert!(parse_command("look").is_unknown());
}

#[test]
fn test_lib_version() {
    assert!(!ae::OCA_VERSION.is_empty());
}

#[test]
fn test_command_codes() {
    assert_eq!(CommandKind::try_from(2), Ok(CommandKind::Move));
    assert!(CommandKind::try_from(42).is_err());
}

#[test]
fn test_new_game_is_empty() {
    let game = Game::default();
    assert!(game.spaces.is_empty());
    assert!(game.objects.is_empty());
    assert_eq!(game.player.location, None);
    assert_eq!(game.last_command(), None);
    assert_eq!(game.description(), None);
    assert!(!game.is_over());
}

#[test]
fn test_find_object_by_name() {
    let mut game = Game::default();
    game.add_object(Object::new(Id(3), "Brass Lamp")).unwrap();
    assert_eq!(game.object_by_name("brass lamp").map(Entity::id), Some(Id(3)));
    assert!(game.object_by_name("lamp").is_none());
}

#[test]
fn test_registry_capacity() {
    let limits = ae::config::Limits {
        max_spaces: 1,
        ..ae::config::Limits::default()
    };
    let mut game = Game::new(&limits, Die::default());
    game.add_space(Space::new(Id(1), "A", 1)).unwrap();
    let err = game.add_space(Space::new(Id(2), "B", 1)).unwrap_err();
    assert_eq!(err.to_string(), "space registry is full (1 entries)");
}

#[test]
fn test_style_trait() {
    colored::control::set_override(false);
    assert_eq!("Hall".space_style().to_string(), "Hall");
    assert_eq!(String::from("scene").section_style().to_string(), "[scene]");
}

#[test]
fn test_shipped_world_loads() {
    let config = EngineConfig::load_default().unwrap();
    let game = load_game(&config.world_path(), &config).unwrap();
    assert!(!game.spaces.is_empty());
    let start = game.player.location.unwrap();
    assert!(game.space(start).is_some());
}
