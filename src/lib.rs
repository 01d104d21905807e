//! Torus Snake - a wrap-around snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, pickups, collisions, game state)
//! - `input`: Device-neutral input intents
//! - `session`: Frame loop driver (tick cadence, pause, feedback routing)
//! - `view`: Read-only per-frame snapshot for renderers
//! - `settings`: Configuration
//! - `highscores`: Leaderboard

pub mod highscores;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use highscores::HighScores;
pub use input::{Intent, Key};
pub use session::{Haptics, Session};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions in cells (1920x1080 at 40 px per cell)
    pub const ARENA_WIDTH: i32 = 48;
    pub const ARENA_HEIGHT: i32 = 27;

    /// Base cell span in pixels
    pub const CELL_SPAN: u32 = 20;
    /// Rendered cells are scaled up by this factor
    pub const CELL_PIXEL_SCALE: u32 = 2;

    /// Lifetime of bonus/debuff items, in ticks
    pub const ITEM_LIFETIME_TICKS: u32 = 300;

    /// Speed modifier written on pickup (negative = boost, positive = slowdown)
    pub const SPEED_MODIFIER_MAGNITUDE: i32 = 150;

    /// Score effects
    pub const BONUS_SCORE: u32 = 3;
    pub const DEBUFF_PENALTY: u32 = 1;
    pub const FOOD_POINTS_MIN: u32 = 1;
    pub const FOOD_POINTS_MAX: u32 = 5;

    /// Frames per simulation tick
    pub const DEFAULT_MOVE_INTERVAL: u32 = 10;
    pub const MIN_MOVE_INTERVAL: u32 = 2;
    /// Analog speed values at or below this are treated as released
    pub const SPEED_DEAD_ZONE: f32 = 0.1;

    /// Render frame rate the cadence is tuned for
    pub const FRAME_RATE: u32 = 60;

    /// Rejection-sampling attempts before the spawner enumerates free cells
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;
}
