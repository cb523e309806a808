//! Catch Zone entry point
//!
//! The browser build is driven from JS through `platform::web::WebGame`.
//! Natively this runs a headless autopilot session and prints a summary.
//!
//! Usage: `catch-zone [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catch_zone::sim::{GameEvent, suggest_label};
    use catch_zone::{CatchGame, Tuning};

    env_logger::init();
    log::info!("Catch Zone (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Bad tuning file {}: {} (using defaults)", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    const FRAME_DT: f32 = 1.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 180;

    let mut game = match CatchGame::with_seed(seed, tuning) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    game.start();

    let mut caught = 0u32;
    let mut frames = 0u32;
    while game.session().is_playing() && frames < MAX_FRAMES {
        if let Some(label) = suggest_label(game.session()) {
            game.on_pose_detected(label);
        }
        for event in game.update_with_dt(FRAME_DT) {
            match event {
                GameEvent::Caught { kind, .. } if !kind.is_bomb() => caught += 1,
                GameEvent::LevelUp { level } => println!("Level {}", level),
                _ => {}
            }
        }
        frames += 1;
    }

    let view = game.view();
    println!(
        "Seed {}: {:.1}s played, score {}, level {}, {} caught, {} missed",
        seed,
        frames as f32 * FRAME_DT,
        view.score,
        view.level,
        caught,
        view.miss_count
    );
    match view.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize final view: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
