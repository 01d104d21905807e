//! Frame loop driver
//!
//! The render loop calls [`Session::frame`] once per frame. The session
//! counts frames and advances the simulation by one step every
//! `move_interval` frames, so game speed is decoupled from frame rate.

use crate::consts::*;
use crate::highscores::HighScores;
use crate::input::{Intent, move_interval};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, Rumble};
use crate::view::Snapshot;

/// Optional rumble device
pub trait Haptics {
    fn rumble(&mut self, rumble: Rumble);
}

/// One running game plus its loop bookkeeping
pub struct Session {
    pub state: GameState,
    pub high_scores: HighScores,
    paused: bool,
    frame_counter: u32,
    move_interval: u32,
    /// Frames per step with no speed input
    resting_interval: u32,
    /// Last analog speed value seen (held like an axis)
    speed_input: Option<f32>,
    haptics: Option<Box<dyn Haptics>>,
    haptics_enabled: bool,
}

impl Session {
    pub fn new(settings: &Settings, seed: u64, high_scores: HighScores) -> Self {
        log::info!(
            "Starting {}x{} game with seed: {}",
            settings.arena_width,
            settings.arena_height,
            seed
        );
        Self {
            state: GameState::new(seed, settings.arena()),
            high_scores,
            paused: false,
            frame_counter: 0,
            move_interval: settings.resting_move_interval(),
            resting_interval: settings.resting_move_interval(),
            speed_input: None,
            haptics: None,
            haptics_enabled: settings.haptics,
        }
    }

    /// Attach a rumble device (ignored when haptics are disabled in settings)
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        if self.haptics_enabled {
            self.haptics = Some(haptics);
        }
        self
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Frames per step currently in effect
    pub fn move_interval(&self) -> u32 {
        self.move_interval
    }

    /// Process one render frame.
    ///
    /// Intents are applied in order, then the simulation steps if the frame
    /// counter reached the move interval. Returns the events produced.
    pub fn frame(&mut self, intents: &[Intent]) -> Vec<GameEvent> {
        for intent in intents {
            self.apply(*intent);
        }

        if !self.paused {
            self.move_interval = move_interval(self.speed_input, self.resting_interval);
            self.frame_counter += 1;
            if self.frame_counter >= self.move_interval {
                self.frame_counter = 0;
                sim::step(&mut self.state);
            }
        }

        let events = self.state.drain_events();
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    /// Current frame for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.paused)
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Direction(dir) => {
                if !self.paused {
                    self.state.snake.set_direction(dir);
                }
            }
            Intent::Restart => {
                sim::reset(&mut self.state);
                self.frame_counter = 0;
            }
            Intent::Pause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            Intent::SpeedControl(value) => self.speed_input = Some(value),
        }
    }

    fn dispatch(&mut self, event: &GameEvent) {
        if let (Some(rumble), Some(haptics)) = (event.rumble(), self.haptics.as_mut()) {
            haptics.rumble(rumble);
        }

        if let GameEvent::GameOver { score } = *event {
            let length = self.state.snake.len();
            let ticks = self.state.time_ticks;
            if let Some(rank) = self.high_scores.add_score(score, length, ticks) {
                log::info!("New high score #{}: {}", rank, score);
            }
        }
    }
}
