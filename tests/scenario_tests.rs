use toy_robot::prelude::*;

fn run(lines: &[&str]) -> Board {
    let mut board = Board::new();
    for line in lines {
        if let Some(cmd) = parse(line) {
            cmd.apply(&mut board);
        }
    }
    board
}

fn report(lines: &[&str]) -> Option<String> {
    run(lines).report()
}

#[test]
fn test_north_increments_column() {
    assert_eq!(report(&["PLACE_ROBOT 1,1,NORTH", "MOVE"]).as_deref(), Some("1,2,NORTH"));
}

#[test]
fn test_south_wraps_column() {
    assert_eq!(report(&["PLACE_ROBOT 1,1,SOUTH", "MOVE"]).as_deref(), Some("1,5,SOUTH"));
}

#[test]
fn test_wall_blocks_move() {
    assert_eq!(
        report(&["PLACE_ROBOT 1,1,NORTH", "PLACE_WALL 1,2", "MOVE"]).as_deref(),
        Some("1,1,NORTH")
    );
}

#[test]
fn test_robot_cannot_land_on_wall() {
    let mut board = Board::new();
    parse("PLACE_WALL 2,3").unwrap().apply(&mut board);
    assert!(!board.place_robot(2, 3, Direction::North));
    assert_eq!(board.report(), None);
}

#[test]
fn test_invalid_commands_ignored() {
    assert_eq!(
        report(&[
            "PLACE_ROBOT 2,3,NORTH",
            "PLACE_ROBOT 2,3,CENTER",
            "PLACE_ROBOT 2,6,EAST",
            "REPORT",
        ])
        .as_deref(),
        Some("2,3,NORTH")
    );
}

#[test]
fn test_blank_and_comment_lines_parse_to_nothing() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("# comment"), None);
    assert_eq!(run(&["", "# PLACE_ROBOT 1,1,NORTH"]), Board::new());
}

#[test]
fn test_complex_movement_with_wall() {
    assert_eq!(
        report(&[
            "PLACE_ROBOT 3,3,NORTH",
            "PLACE_WALL 3,5",
            "MOVE",
            "MOVE",
            "RIGHT",
            "MOVE",
            "MOVE",
            "MOVE",
            "REPORT",
        ])
        .as_deref(),
        Some("1,4,EAST")
    );
}

#[test]
fn test_multiple_walls_and_turns() {
    assert_eq!(
        report(&[
            "PLACE_ROBOT 2,2,WEST",
            "PLACE_WALL 1,1",
            "PLACE_WALL 2,2",
            "PLACE_WALL 1,3",
            "LEFT",
            "LEFT",
            "MOVE",
            "REPORT",
        ])
        .as_deref(),
        Some("3,2,EAST")
    );
}

#[test]
fn test_commands_before_placement() {
    assert_eq!(
        report(&["MOVE", "LEFT", "RIGHT", "REPORT", "PLACE_ROBOT 3,3,EAST", "REPORT"]).as_deref(),
        Some("3,3,EAST")
    );
}

#[test]
fn test_complete_rotation() {
    assert_eq!(
        report(&["PLACE_ROBOT 3,3,NORTH", "RIGHT", "RIGHT", "RIGHT", "RIGHT"]).as_deref(),
        Some("3,3,NORTH")
    );
}

#[test]
fn test_replacing_robot() {
    assert_eq!(
        report(&["PLACE_ROBOT 1,1,NORTH", "PLACE_ROBOT 5,5,SOUTH"]).as_deref(),
        Some("5,5,SOUTH")
    );
}
