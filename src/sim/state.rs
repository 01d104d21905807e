//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Arena, Position};
use super::items::{Food, ItemKind, TimedItem};
use super::snake::Snake;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Snake is moving
    Playing,
    /// Snake ran into itself; only a reset leaves this phase
    GameOver,
}

/// Haptic feedback request: motor intensities (0..=1) and duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rumble {
    pub low: f32,
    pub high: f32,
    pub duration_ms: u32,
}

impl Rumble {
    pub const FOOD: Rumble = Rumble {
        low: 0.7,
        high: 0.7,
        duration_ms: 200,
    };
    pub const BONUS: Rumble = Rumble {
        low: 1.0,
        high: 0.5,
        duration_ms: 300,
    };
    pub const DEBUFF: Rumble = Rumble {
        low: 0.3,
        high: 0.8,
        duration_ms: 200,
    };
}

/// Things that happened during a step, drained by the session each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { points: u32 },
    BonusCollected,
    DebuffCollected,
    ItemExpired(ItemKind),
    GameOver { score: u32 },
    Reset,
}

impl GameEvent {
    /// Feedback for pickups; other events are silent
    pub fn rumble(&self) -> Option<Rumble> {
        match self {
            GameEvent::FoodEaten { .. } => Some(Rumble::FOOD),
            GameEvent::BonusCollected => Some(Rumble::BONUS),
            GameEvent::DebuffCollected => Some(Rumble::DEBUFF),
            _ => None,
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield size in cells
    pub arena: Arena,
    /// RNG driving every spawn
    pub rng: Pcg32,
    pub snake: Snake,
    pub food: Food,
    pub bonus: TimedItem,
    pub debuff: TimedItem,
    pub score: u32,
    /// Negative = boosted, positive = slowed, zero = normal.
    /// Sticky: only overwritten by the next bonus/debuff pickup.
    pub speed_modifier: i32,
    pub phase: GamePhase,
    /// Steps taken since the last reset
    pub time_ticks: u64,
    /// Events queued since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on `arena` with the given seed
    pub fn new(seed: u64, arena: Arena) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(&arena);
        let body: Vec<Position> = snake.segments().collect();
        let food = Food::spawn(&mut rng, &arena, &body);
        let bonus = TimedItem::spawn(ItemKind::Bonus, &mut rng, &arena, &body);
        let debuff = TimedItem::spawn(ItemKind::Debuff, &mut rng, &arena, &body);

        Self {
            seed,
            arena,
            rng,
            snake,
            food,
            bonus,
            debuff,
            score: 0,
            speed_modifier: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Cells the spawner must avoid
    pub fn snake_cells(&self) -> Vec<Position> {
        self.snake.segments().collect()
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
