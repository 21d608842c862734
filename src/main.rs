//! MAZEHUNT - small real-time 2D maze demos on SDL2 :)
//! Main starting point.

use mazehunt::*;

const SLEEP_KIND: SleepKind = SleepKind::SLEEP(1);

fn main() {
    env_logger::init();

    match run() {
        Ok(_) => println!("MAZEHUNT finished OK :)"),
        Err(msg) => println!("ERROR in MAZEHUNT: {msg}"),
    }
}

fn run() -> Result<(), String> {
    // `mazehunt demo` starts the free-roaming point demo instead
    let demo_mode = std::env::args().skip(1).any(|arg| arg == "demo");
    if demo_mode {
        let cfg = SdlConfiguration::new("Point Demo", SCR_WIDTH, SCR_HEIGHT, PIXEL_SIZE, SLEEP_KIND);
        let mut demo = PointDemo::new(SCR_WIDTH, SCR_HEIGHT, PIXEL_SIZE);
        return run_game_loop(&cfg, &mut demo);
    }

    // load assets and generate the maze once, before the loop starts
    let assets = GameAssets::load();
    let maze = Maze::generate(MAZE_WIDTH, MAZE_HEIGHT, MAZE_SEED)?;

    let cfg = SdlConfiguration::new("Maze Hunt - find the exit!", SCR_WIDTH, SCR_HEIGHT, PIXEL_SIZE, SLEEP_KIND);
    let mut gameloop = GameLoop::new(SCR_WIDTH, SCR_HEIGHT, PIXEL_SIZE, assets, maze);
    run_game_loop(&cfg, &mut gameloop)
}
