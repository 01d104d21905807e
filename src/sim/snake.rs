//! The snake: ordered body segments, heading, growth, movement

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Arena, Direction, Position};

/// Starting segments, head first
const START_BODY: [(i32, i32); 3] = [(10, 10), (9, 10), (8, 10)];

/// Axis a body segment is drawn along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Which sprite to draw for a segment, and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentSprite {
    Head(Direction),
    Body(Orientation),
    Tail(Direction),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Segments, head first. Never empty.
    body: VecDeque<Position>,
    /// Heading used for the last move (rendering and reversal guard)
    direction: Direction,
    /// Heading the next move will take
    pending_direction: Direction,
}

impl Snake {
    /// Three segments heading right, wrapped into the arena
    pub fn new(arena: &Arena) -> Self {
        let body = START_BODY
            .iter()
            .map(|&(x, y)| arena.wrap(IVec2::new(x, y)))
            .collect();
        Self {
            body,
            direction: Direction::Right,
            pending_direction: Direction::Right,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// An empty list yields a single segment at the origin.
    pub fn from_body(body: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let mut body: VecDeque<Position> = body.into_iter().collect();
        if body.is_empty() {
            body.push_back(IVec2::ZERO);
        }
        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True when the body has no segments (never, by construction)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Segments, head first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Request a new heading for the next move.
    ///
    /// The exact reverse of the current heading is silently dropped.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.pending_direction = dir;
        }
    }

    /// Advance one cell along the pending heading.
    ///
    /// No wrapping happens here; the caller wraps the head against its arena.
    pub fn step(&mut self) {
        let new_head = self.head() + self.pending_direction.delta();
        self.body.push_front(new_head);
        self.body.pop_back();
        self.direction = self.pending_direction;
    }

    /// Duplicate the tail segment so the snake keeps one more cell from now on
    pub fn grow(&mut self) {
        self.body.push_back(self.tail());
    }

    /// Replace the head with its wrapped position
    pub fn wrap_head(&mut self, arena: &Arena) {
        self.body[0] = arena.wrap(self.body[0]);
    }

    /// Head overlaps any other segment
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// Sprite choice for every segment, head first.
    ///
    /// Head faces `direction`. Interior segments are horizontal when the step
    /// from their predecessor has an x component, vertical otherwise. The tail
    /// faces away from the nearest distinct segment before it; a tail with no
    /// distinct predecessor (length one, or a fresh growth duplicate on a
    /// two-cell snake) falls back to the heading. A growth duplicate is skipped
    /// on purpose, so the tail keeps its facing the tick after a pickup.
    pub fn segment_sprites(&self, arena: &Arena) -> Vec<SegmentSprite> {
        let n = self.body.len();
        let mut sprites = Vec::with_capacity(n);
        sprites.push(SegmentSprite::Head(self.direction));
        for i in 1..n.saturating_sub(1) {
            let step = torus_delta(arena, self.body[i - 1], self.body[i]);
            let orientation = if step.x != 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            sprites.push(SegmentSprite::Body(orientation));
        }
        if n > 1 {
            sprites.push(SegmentSprite::Tail(self.tail_direction(arena)));
        }
        sprites
    }

    fn tail_direction(&self, arena: &Arena) -> Direction {
        let tail = self.tail();
        self.body
            .iter()
            .rev()
            .skip(1)
            .find(|&&seg| seg != tail)
            .and_then(|&prev| Direction::from_delta(torus_delta(arena, prev, tail)))
            .unwrap_or(self.direction)
    }
}

/// Shortest step from `from` to `to` on the torus, so a segment pair that
/// straddles an edge still reads as a unit step
fn torus_delta(arena: &Arena, from: Position, to: Position) -> IVec2 {
    let fold = |d: i32, span: i32| {
        let d = d.rem_euclid(span);
        if d > span / 2 { d - span } else { d }
    };
    let d = to - from;
    IVec2::new(fold(d.x, arena.width), fold(d.y, arena.height))
}
