use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use toy_robot::{BoardState, Direction, Session, DIRECTIONS, GRID_SIZE};

/// Coordinate in `0..=GRID_SIZE + 1`, one past the grid on either side.
fn random_coord(rng: &mut SmallRng) -> i32 {
    rng.random_range(0..=GRID_SIZE as i32 + 1)
}

/// A random command line. Coordinates stray one cell past the grid and a few
/// lines are garbage, so rejections get exercised too.
fn random_line(rng: &mut SmallRng) -> String {
    match rng.random_range(0..100) {
        0..=9 => {
            let facing: Direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            let (r, c) = (random_coord(rng), random_coord(rng));
            format!("PLACE_ROBOT {},{},{}", r, c, facing)
        }
        10..=19 => {
            let (r, c) = (random_coord(rng), random_coord(rng));
            format!("PLACE_WALL {},{}", r, c)
        }
        20..=59 => "MOVE".to_string(),
        60..=69 => "LEFT".to_string(),
        70..=79 => "RIGHT".to_string(),
        80..=94 => "REPORT".to_string(),
        _ => "JUMP".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <steps>", args.first().map_or("sim", String::as_str));
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let steps: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let script: String = (0..steps)
        .map(|_| random_line(&mut rng) + "\n")
        .collect();

    let mut session = Session::new();
    let mut output = Vec::new();
    let summary = session.run(script.as_bytes(), &mut output)?;
    let reports: Vec<&str> = std::str::from_utf8(&output)?.lines().collect();

    let board = session.board();
    let result = json!({
        "seed": seed,
        "steps": steps,
        "report": board.report(),
        "state": BoardState::from(board),
        "summary": summary,
        "reports": reports,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
