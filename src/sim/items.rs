//! Pickups: food and the timed bonus/debuff items

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Arena, Position};
use super::spawn::{random_cell, spawn_cell};
use crate::consts::*;

/// Regular food. Always present; its point value is re-rolled on every spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub points: u32,
}

impl Food {
    pub fn spawn<R: Rng>(rng: &mut R, arena: &Arena, forbidden: &[Position]) -> Self {
        let mut food = Self {
            position: Position::ZERO,
            points: FOOD_POINTS_MIN,
        };
        food.respawn(rng, arena, forbidden);
        food
    }

    /// Move to a new free cell and re-roll points.
    ///
    /// On a saturated arena the food lands on any cell rather than vanishing.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, arena: &Arena, forbidden: &[Position]) {
        self.position = match spawn_cell(rng, arena, forbidden) {
            Some(cell) => cell,
            None => {
                log::warn!("No free cell for food, placing it on an occupied cell");
                random_cell(rng, arena)
            }
        };
        self.points = rng.random_range(FOOD_POINTS_MIN..=FOOD_POINTS_MAX);
    }
}

/// Timed item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Apple: +3 score, speed boost
    Bonus,
    /// Spider: -1 score (floored at zero), slowdown
    Debuff,
}

impl ItemKind {
    /// Speed modifier written when this item is collected
    pub fn speed_modifier(self) -> i32 {
        match self {
            ItemKind::Bonus => -SPEED_MODIFIER_MAGNITUDE,
            ItemKind::Debuff => SPEED_MODIFIER_MAGNITUDE,
        }
    }
}

/// Lifecycle of a timed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimedState {
    /// Not on the board (no free cell was available)
    Inactive,
    /// On the board until the countdown runs out
    Active {
        position: Position,
        remaining_ticks: u32,
    },
}

/// A bonus or debuff that relocates itself when its countdown expires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedItem {
    pub kind: ItemKind,
    pub state: TimedState,
}

impl TimedItem {
    pub fn spawn<R: Rng>(kind: ItemKind, rng: &mut R, arena: &Arena, forbidden: &[Position]) -> Self {
        let mut item = Self {
            kind,
            state: TimedState::Inactive,
        };
        item.respawn(rng, arena, forbidden);
        item
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TimedState::Active { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            TimedState::Active { position, .. } => Some(position),
            TimedState::Inactive => None,
        }
    }

    pub fn remaining_ticks(&self) -> u32 {
        match self.state {
            TimedState::Active { remaining_ticks, .. } => remaining_ticks,
            TimedState::Inactive => 0,
        }
    }

    /// Place on a fresh free cell with a full lifetime, or go inactive if none exists
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, arena: &Arena, forbidden: &[Position]) {
        self.state = match spawn_cell(rng, arena, forbidden) {
            Some(position) => TimedState::Active {
                position,
                remaining_ticks: ITEM_LIFETIME_TICKS,
            },
            None => {
                log::warn!("No free cell for {:?}, item inactive", self.kind);
                TimedState::Inactive
            }
        };
    }

    /// Advance the countdown by one tick.
    ///
    /// Returns true when the item expired and was respawned. An inactive item
    /// retries spawning instead of counting down.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, arena: &Arena, forbidden: &[Position]) -> bool {
        if !self.is_active() {
            self.respawn(rng, arena, forbidden);
            return false;
        }
        let expired = match &mut self.state {
            TimedState::Active { remaining_ticks, .. } => {
                *remaining_ticks = remaining_ticks.saturating_sub(1);
                *remaining_ticks == 0
            }
            TimedState::Inactive => false,
        };
        if expired {
            self.respawn(rng, arena, forbidden);
        }
        expired
    }

    /// True when active and sitting on `pos`
    pub fn is_at(&self, pos: Position) -> bool {
        self.position() == Some(pos)
    }
}
