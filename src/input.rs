//! Device-neutral input intents
//!
//! Platform layers translate raw devices into [`Intent`]s; nothing below this
//! module knows about keyboards or gamepads.

use crate::consts::*;
use crate::sim::Direction;

/// Everything the game loop reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Steer the snake (reversals are dropped by the snake itself)
    Direction(Direction),
    /// Start a fresh run, whatever the current phase
    Restart,
    /// Toggle the pause menu
    Pause,
    /// Analog speed control in 0..=1 (e.g. a trigger)
    SpeedControl(f32),
}

/// Keys the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    R,
    Escape,
    Other,
}

impl Key {
    /// Keyboard binding: arrows steer, R restarts, Escape pauses
    pub fn intent(self) -> Option<Intent> {
        match self {
            Key::Up => Some(Intent::Direction(Direction::Up)),
            Key::Down => Some(Intent::Direction(Direction::Down)),
            Key::Left => Some(Intent::Direction(Direction::Left)),
            Key::Right => Some(Intent::Direction(Direction::Right)),
            Key::R => Some(Intent::Restart),
            Key::Escape => Some(Intent::Pause),
            Key::Other => None,
        }
    }
}

/// Frames per simulation tick for an analog speed value.
///
/// Values inside the dead zone (or no speed input at all) give `default`;
/// otherwise `max(2, trunc(10 - v * 8))`, never slower than `default`.
pub fn move_interval(speed: Option<f32>, default: u32) -> u32 {
    match speed {
        Some(v) if v > SPEED_DEAD_ZONE => {
            let v = v.min(1.0);
            let frames = (DEFAULT_MOVE_INTERVAL as f32 - v * 8.0) as u32;
            frames.clamp(MIN_MOVE_INTERVAL, default.max(MIN_MOVE_INTERVAL))
        }
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Key::Up.intent(), Some(Intent::Direction(Direction::Up)));
        assert_eq!(Key::Left.intent(), Some(Intent::Direction(Direction::Left)));
        assert_eq!(Key::R.intent(), Some(Intent::Restart));
        assert_eq!(Key::Escape.intent(), Some(Intent::Pause));
        assert_eq!(Key::Other.intent(), None);
    }

    #[test]
    fn test_move_interval_range() {
        let d = DEFAULT_MOVE_INTERVAL;
        assert_eq!(move_interval(None, d), 10);
        assert_eq!(move_interval(Some(0.0), d), 10);
        assert_eq!(move_interval(Some(0.1), d), 10);
        assert_eq!(move_interval(Some(0.5), d), 6);
        assert_eq!(move_interval(Some(1.0), d), 2);
        assert_eq!(move_interval(Some(3.0), d), 2);
        assert_eq!(move_interval(Some(f32::NAN), d), 10);
    }

    #[test]
    fn test_move_interval_custom_default() {
        assert_eq!(move_interval(None, 4), 4);
        assert_eq!(move_interval(Some(0.05), 4), 4);
        // A light press never slows below the resting cadence
        assert_eq!(move_interval(Some(0.2), 4), 4);
        assert_eq!(move_interval(Some(1.0), 4), 2);
    }

    #[test]
    fn test_move_interval_monotonic() {
        let mut last = move_interval(Some(0.11), DEFAULT_MOVE_INTERVAL);
        for i in 12..=100 {
            let next = move_interval(Some(i as f32 / 100.0), DEFAULT_MOVE_INTERVAL);
            assert!(next <= last);
            assert!((MIN_MOVE_INTERVAL..=DEFAULT_MOVE_INTERVAL).contains(&next));
            last = next;
        }
    }
}
