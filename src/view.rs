//! Read-only frame snapshot for renderers
//!
//! A renderer draws from a [`Snapshot`] and never touches [`GameState`].

use glam::UVec2;
use serde::Serialize;

use crate::sim::{Direction, GameState, Position, SegmentSprite, TimedItem};

/// HUD indicator derived from the sign of the speed modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedIndicator {
    Normal,
    Boosted,
    Slowed,
}

impl SpeedIndicator {
    pub fn from_modifier(modifier: i32) -> Self {
        match modifier.signum() {
            -1 => SpeedIndicator::Boosted,
            1 => SpeedIndicator::Slowed,
            _ => SpeedIndicator::Normal,
        }
    }
}

/// A bonus or debuff as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemView {
    pub position: Option<Position>,
    pub active: bool,
    pub remaining_ticks: u32,
}

impl From<&TimedItem> for ItemView {
    fn from(item: &TimedItem) -> Self {
        Self {
            position: item.position(),
            active: item.is_active(),
            remaining_ticks: item.remaining_ticks(),
        }
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Segments, head first
    pub body: Vec<Position>,
    pub heading: Direction,
    /// Sprite per segment, aligned with `body`
    pub sprites: Vec<SegmentSprite>,
    pub food: Position,
    pub food_points: u32,
    pub bonus: ItemView,
    pub debuff: ItemView,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub speed: SpeedIndicator,
}

impl Snapshot {
    pub fn capture(state: &GameState, paused: bool) -> Self {
        Self {
            body: state.snake.segments().collect(),
            heading: state.snake.direction(),
            sprites: state.snake.segment_sprites(&state.arena),
            food: state.food.position,
            food_points: state.food.points,
            bonus: ItemView::from(&state.bonus),
            debuff: ItemView::from(&state.debuff),
            score: state.score,
            game_over: state.is_game_over(),
            paused,
            speed: SpeedIndicator::from_modifier(state.speed_modifier),
        }
    }
}

/// Top-left pixel of a cell
pub fn cell_to_pixel(cell: Position, cell_pixels: u32) -> UVec2 {
    UVec2::new(cell.x.max(0) as u32, cell.y.max(0) as u32) * cell_pixels
}
