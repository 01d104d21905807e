//! Toroidal grid geometry
//!
//! Cells are addressed by integer (x, y). Every coordinate that leaves the
//! arena re-enters from the opposite edge.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A cell coordinate
pub type Position = IVec2;

/// Heading of the snake (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step vector
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Component-wise negation
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Inverse of [`Direction::delta`]. Anything that is not a unit axis step is rejected.
    pub fn from_delta(delta: IVec2) -> Option<Self> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Arena dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawArena")]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

/// Wire form of [`Arena`]; loading goes through [`Arena::new`] so saved
/// dimensions get the same clamp as constructed ones
#[derive(Deserialize)]
struct RawArena {
    width: i32,
    height: i32,
}

impl From<RawArena> for Arena {
    fn from(raw: RawArena) -> Self {
        Arena::new(raw.width, raw.height)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Arena {
    /// Create an arena. Dimensions below one cell are clamped to one.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Derive the cell grid from a window size and the rendered cell size
    pub fn from_window(width_px: u32, height_px: u32, cell_px: u32) -> Self {
        let cell_px = cell_px.max(1);
        Self::new((width_px / cell_px) as i32, (height_px / cell_px) as i32)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Toroidal wrap: x mod width, y mod height (always non-negative)
    #[inline]
    pub fn wrap(&self, pos: Position) -> Position {
        IVec2::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Cell at a linear row-major index
    pub fn cell_at(&self, index: usize) -> Position {
        let w = self.width as usize;
        IVec2::new((index % w) as i32, (index / w) as i32)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at(i))
    }
}
