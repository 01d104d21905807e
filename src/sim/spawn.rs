//! Spawner policy: pick a uniformly random free cell

use rand::Rng;

use super::grid::{Arena, Position};
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Every cell of the arena not contained in `forbidden`, row-major
pub fn free_cells(arena: &Arena, forbidden: &[Position]) -> Vec<Position> {
    arena.cells().filter(|cell| !forbidden.contains(cell)).collect()
}

/// Pick a random cell not in `forbidden`.
///
/// Rejection sampling is tried first since the snake usually covers a small
/// share of the arena. After `MAX_SPAWN_ATTEMPTS` misses the free cells are
/// enumerated and one is drawn by index, so the search always terminates.
/// Returns `None` when the arena is saturated.
pub fn spawn_cell<R: Rng>(
    rng: &mut R,
    arena: &Arena,
    forbidden: &[Position],
) -> Option<Position> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = random_cell(rng, arena);
        if !forbidden.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free = free_cells(arena, forbidden);
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

/// Any cell, ignoring occupancy
pub fn random_cell<R: Rng>(rng: &mut R, arena: &Arena) -> Position {
    Position::new(
        rng.random_range(0..arena.width),
        rng.random_range(0..arena.height),
    )
}
