//! Torus Snake entry point
//!
//! Headless composition root: loads settings, wires a session and runs it in
//! demo mode with a simple autopilot steering toward food. Windowed front
//! ends drive the same [`Session`] with real input and a renderer.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use torus_snake::consts::FRAME_RATE;
use torus_snake::sim::{Arena, Direction, GameEvent, Position};
use torus_snake::view::Snapshot;
use torus_snake::{HighScores, Intent, Session, Settings};

/// Demo length: two minutes of frames
const DEMO_FRAMES: u32 = FRAME_RATE * 120;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Torus Snake (headless demo) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(&PathBuf::from(path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let (window_w, window_h) = settings.window_size();
    log::info!(
        "Window {}x{} px ({} px cells), assets from {}",
        window_w,
        window_h,
        settings.cell_pixels(),
        settings.asset_root.display()
    );

    let high_scores = HighScores::load_or_default(&settings.highscores_path);
    let mut session = Session::new(&settings, seed, high_scores);
    let arena = session.state.arena;

    for frame in 0..DEMO_FRAMES {
        let intents: Vec<Intent> = autopilot(&session.snapshot(), &arena).into_iter().collect();
        let events = session.frame(&intents);
        if events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })) {
            log::info!("Demo ended at frame {}", frame);
            break;
        }
    }

    let snap = session.snapshot();
    println!(
        "Final score: {} (length {}, {})",
        snap.score,
        snap.body.len(),
        if snap.game_over { "game over" } else { "survived" }
    );

    if let Err(e) = session.high_scores.save(&settings.highscores_path) {
        log::warn!("Could not save high scores: {}", e);
    }
}

/// Idle/demo mode: head for the food along the shorter way around the torus,
/// avoiding any move that lands on the body
fn autopilot(snap: &Snapshot, arena: &Arena) -> Option<Intent> {
    let head = *snap.body.first()?;
    let wanted = toward(head, snap.food, arena);

    let safe = |dir: Direction| {
        dir != snap.heading.opposite() && !snap.body[1..].contains(&arena.wrap(head + dir.delta()))
    };

    wanted
        .into_iter()
        .chain([snap.heading])
        .chain(Direction::ALL)
        .find(|&dir| safe(dir))
        .map(Intent::Direction)
}

/// Preferred headings from `from` to `to`, shortest wrap-around axis first
fn toward(from: Position, to: Position, arena: &Arena) -> Vec<Direction> {
    let shortest = |d: i32, span: i32| {
        let d = d.rem_euclid(span);
        if d > span / 2 { d - span } else { d }
    };
    let dx = shortest(to.x - from.x, arena.width);
    let dy = shortest(to.y - from.y, arena.height);

    let horizontal = match dx.signum() {
        1 => Some(Direction::Right),
        -1 => Some(Direction::Left),
        _ => None,
    };
    let vertical = match dy.signum() {
        1 => Some(Direction::Down),
        -1 => Some(Direction::Up),
        _ => None,
    };

    if dx.abs() >= dy.abs() {
        horizontal.into_iter().chain(vertical).collect()
    } else {
        vertical.into_iter().chain(horizontal).collect()
    }
}
