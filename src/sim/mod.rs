//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per call, cadence is decided by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod items;
pub mod snake;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Arena, Direction, Position};
pub use items::{Food, ItemKind, TimedItem, TimedState};
pub use snake::{Orientation, SegmentSprite, Snake};
pub use spawn::{free_cells, spawn_cell};
pub use state::{GameEvent, GamePhase, GameState, Rumble};
pub use tick::{reset, step, update};
