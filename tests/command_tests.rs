use toy_robot::{parse, Board, Command, Direction, ParseCommandError};

#[test]
fn test_parse_place_robot() {
    assert_eq!(
        parse("PLACE_ROBOT 2,3,NORTH"),
        Some(Command::PlaceRobot {
            row: 2,
            col: 3,
            facing: Direction::North
        })
    );
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    assert_eq!(
        parse("  PLACE_ROBOT 2,3,NORTH  \t"),
        Some(Command::PlaceRobot {
            row: 2,
            col: 3,
            facing: Direction::North
        })
    );
    assert_eq!(parse("\tMOVE\r"), Some(Command::Move));
}

#[test]
fn test_parse_place_robot_integer_fields_allow_padding() {
    assert_eq!(
        parse("PLACE_ROBOT 2, 3,WEST"),
        Some(Command::PlaceRobot {
            row: 2,
            col: 3,
            facing: Direction::West
        })
    );
}

#[test]
fn test_parse_invalid_place_robot() {
    let bad = [
        "PLACE_ROBOT 2,3,CENTER",
        "PLACE_ROBOT 2,6,EAST",
        "PLACE_ROBOT 0,3,EAST",
        "PLACE_ROBOT 2,3",
        "PLACE_ROBOT 2,3,NORTH,1",
        "PLACE_ROBOT 2,abc,NORTH",
        "PLACE_ROBOT 2,3,north",
        "PLACE_ROBOT 2,3, NORTH",
        "PLACE_ROBOT",
        "PLACE_ROBOT ",
        "PLACE_ROBOT2,3,NORTH",
        "place_robot 2,3,NORTH",
    ];
    for line in bad {
        assert_eq!(parse(line), None, "{:?}", line);
    }
}

#[test]
fn test_parse_place_wall() {
    assert_eq!(parse("PLACE_WALL 2,3"), Some(Command::PlaceWall { row: 2, col: 3 }));
}

#[test]
fn test_parse_place_wall_has_no_range_check() {
    assert_eq!(parse("PLACE_WALL 9,-4"), Some(Command::PlaceWall { row: 9, col: -4 }));
    assert_eq!(parse("PLACE_WALL 0,0"), Some(Command::PlaceWall { row: 0, col: 0 }));
}

#[test]
fn test_parse_invalid_place_wall() {
    for line in ["PLACE_WALL 2", "PLACE_WALL abc,3", "PLACE_WALL", "PLACE_WALL 1,2,3", "PLACE_WALL 1,"] {
        assert_eq!(parse(line), None, "{:?}", line);
    }
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!(parse("MOVE"), Some(Command::Move));
    assert_eq!(parse("LEFT"), Some(Command::Left));
    assert_eq!(parse("RIGHT"), Some(Command::Right));
    assert_eq!(parse("REPORT"), Some(Command::Report));
}

#[test]
fn test_parse_rejects_unknown_and_case_variants() {
    for line in ["", "   ", "# comment", "move", "Report", "MOVE 1", "JUMP", "EXIT"] {
        assert_eq!(parse(line), None, "{:?}", line);
    }
}

#[test]
fn test_from_str_error() {
    assert_eq!("FLY".parse::<Command>(), Err(ParseCommandError));
    assert_eq!("LEFT".parse::<Command>(), Ok(Command::Left));
}

#[test]
fn test_display_is_canonical_line() {
    let cmds = [
        Command::PlaceRobot {
            row: 4,
            col: 1,
            facing: Direction::South,
        },
        Command::PlaceWall { row: -2, col: 7 },
        Command::Move,
        Command::Left,
        Command::Right,
        Command::Report,
    ];
    for cmd in cmds {
        assert_eq!(parse(&cmd.to_string()), Some(cmd));
    }
    assert_eq!(cmds[0].to_string(), "PLACE_ROBOT 4,1,SOUTH");
}

#[test]
fn test_apply_only_report_yields_output() {
    let mut board = Board::new();
    assert_eq!(Command::Report.apply(&mut board), None);
    let place = Command::PlaceRobot {
        row: 1,
        col: 1,
        facing: Direction::North,
    };
    assert_eq!(place.apply(&mut board), None);
    assert_eq!(Command::Move.apply(&mut board), None);
    assert_eq!(Command::Report.apply(&mut board).as_deref(), Some("1,2,NORTH"));
}

#[test]
fn test_try_apply_keeps_reason() {
    let mut board = Board::new();
    assert_eq!(
        Command::Move.try_apply(&mut board),
        Err(toy_robot::BoardError::NoRobot)
    );
    assert_eq!(Command::Report.try_apply(&mut board), Ok(None));
}
