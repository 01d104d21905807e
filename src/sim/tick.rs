//! Discrete simulation step
//!
//! One step = the snake moves one cell, then `update` resolves timers,
//! wrapping and collisions in a fixed order.

use rand::Rng;

use super::items::ItemKind;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Move the snake one cell and resolve the resulting tick.
///
/// The head is wrapped right after the move so no collision check ever sees
/// an out-of-bounds head.
pub fn step(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.snake.step();
    state.snake.wrap_head(&state.arena);
    update(state);
}

/// Resolve one tick against the current snake position.
///
/// Order matters: item timers, head wrap, self-collision (ends the tick),
/// then food, bonus and debuff are each checked against the same head. Any
/// combination of the three may fire in one tick.
pub fn update(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.time_ticks += 1;

    // Timed items count down and relocate on expiry
    let body = state.snake_cells();
    for item in [&mut state.bonus, &mut state.debuff] {
        if item.tick(&mut state.rng, &state.arena, &body) {
            log::debug!("{:?} expired, moved to {:?}", item.kind, item.position());
            state.events.push(GameEvent::ItemExpired(item.kind));
        }
    }

    state.snake.wrap_head(&state.arena);

    if state.snake.hits_itself() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score {} length {} after {} ticks",
            state.score,
            state.snake.len(),
            state.time_ticks
        );
        return;
    }

    let head = state.snake.head();

    if head == state.food.position {
        state.snake.grow();
        let points = state.food.points;
        state.score += points;
        let body = state.snake_cells();
        state.food.respawn(&mut state.rng, &state.arena, &body);
        state.events.push(GameEvent::FoodEaten { points });
        log::debug!("Food +{} (score {})", points, state.score);
    }

    if state.bonus.is_at(head) {
        state.snake.grow();
        state.score += BONUS_SCORE;
        state.speed_modifier = ItemKind::Bonus.speed_modifier();
        let body = state.snake_cells();
        state.bonus.respawn(&mut state.rng, &state.arena, &body);
        state.events.push(GameEvent::BonusCollected);
        log::debug!("Bonus collected (score {})", state.score);
    }

    if state.debuff.is_at(head) {
        state.snake.grow();
        state.score = state.score.saturating_sub(DEBUFF_PENALTY);
        state.speed_modifier = ItemKind::Debuff.speed_modifier();
        let body = state.snake_cells();
        state.debuff.respawn(&mut state.rng, &state.arena, &body);
        state.events.push(GameEvent::DebuffCollected);
        log::debug!("Debuff collected (score {})", state.score);
    }
}

/// Start a fresh run on the same arena: new snake and items, zeroed score
/// and speed modifier. Works from any phase.
pub fn reset(state: &mut GameState) {
    let seed = state.rng.random::<u64>();
    let arena = state.arena;
    *state = GameState::new(seed, arena);
    state.events.push(GameEvent::Reset);
    log::info!("Game reset with seed: {}", seed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{Arena, Direction, Position};
    use crate::sim::items::TimedState;
    use crate::sim::snake::Snake;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn parked(position: Position) -> TimedState {
        TimedState::Active {
            position,
            remaining_ticks: ITEM_LIFETIME_TICKS,
        }
    }

    /// 10x10 arena, snake at (5,5) heading right, items parked out of the way
    fn scenario(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Arena::new(10, 10));
        state.snake = Snake::from_body([p(5, 5), p(4, 5), p(3, 5)], Direction::Right);
        state.food.position = p(0, 0);
        state.bonus.state = parked(p(0, 9));
        state.debuff.state = parked(p(9, 9));
        state
    }

    #[test]
    fn test_eat_food_end_to_end() {
        let mut state = scenario(1);
        state.food.position = p(6, 5);
        let points = state.food.points;

        step(&mut state);

        assert_eq!(state.snake.head(), p(6, 5));
        assert_eq!(state.snake.len(), 4);
        assert!((FOOD_POINTS_MIN..=FOOD_POINTS_MAX).contains(&points));
        assert_eq!(state.score, points);
        assert!(!state.snake.occupies(state.food.position));
        assert_eq!(state.drain_events(), vec![GameEvent::FoodEaten { points }]);
    }

    #[test]
    fn test_growth_shows_on_next_move() {
        let mut state = scenario(2);
        state.food.position = p(6, 5);
        step(&mut state);
        let grown = state.snake.len();
        assert_eq!(grown, 4);
        assert_eq!(state.snake.tail(), p(4, 5));

        state.food.position = p(0, 0);
        step(&mut state);
        assert_eq!(state.snake.len(), grown);
        assert_eq!(state.snake.tail(), p(4, 5));
        assert_eq!(state.snake.head(), p(7, 5));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = scenario(3);
        state.snake = Snake::from_body([p(5, 5), p(4, 5), p(3, 5), p(5, 5)], Direction::Right);
        update(&mut state);
        assert!(state.is_game_over());
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_self_collision_skips_pickups() {
        let mut state = scenario(3);
        state.snake = Snake::from_body([p(5, 5), p(4, 5), p(5, 5)], Direction::Right);
        state.food.position = p(5, 5);
        update(&mut state);
        assert!(state.is_game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_game_over_is_inert() {
        let mut state = scenario(4);
        state.phase = GamePhase::GameOver;
        let before = state.snake.clone();
        step(&mut state);
        update(&mut state);
        assert_eq!(state.snake, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_debuff_floors_score() {
        let mut state = scenario(5);
        state.debuff.state = parked(p(6, 5));
        step(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_modifier, SPEED_MODIFIER_MAGNITUDE);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.debuff.remaining_ticks(), ITEM_LIFETIME_TICKS);
    }

    #[test]
    fn test_debuff_subtracts_one() {
        let mut state = scenario(5);
        state.score = 7;
        state.debuff.state = parked(p(6, 5));
        step(&mut state);
        assert_eq!(state.score, 6);
    }

    #[test]
    fn test_bonus_boosts_and_scores() {
        let mut state = scenario(6);
        state.speed_modifier = SPEED_MODIFIER_MAGNITUDE;
        state.bonus.state = parked(p(6, 5));
        step(&mut state);
        assert_eq!(state.score, BONUS_SCORE);
        assert_eq!(state.speed_modifier, -SPEED_MODIFIER_MAGNITUDE);
        assert_eq!(state.drain_events(), vec![GameEvent::BonusCollected]);
    }

    #[test]
    fn test_speed_modifier_is_sticky() {
        let mut state = scenario(6);
        state.bonus.state = parked(p(6, 5));
        step(&mut state);
        for _ in 0..20 {
            step(&mut state);
        }
        assert_eq!(state.speed_modifier, -SPEED_MODIFIER_MAGNITUDE);
    }

    #[test]
    fn test_stacked_pickups_all_fire() {
        let mut state = scenario(7);
        state.food.position = p(6, 5);
        state.bonus.state = parked(p(6, 5));
        state.debuff.state = parked(p(6, 5));
        let points = state.food.points;
        step(&mut state);

        assert_eq!(state.snake.len(), 6);
        assert_eq!(state.score, points + BONUS_SCORE - DEBUFF_PENALTY);
        // Debuff is checked last and wins the modifier
        assert_eq!(state.speed_modifier, SPEED_MODIFIER_MAGNITUDE);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::FoodEaten { points },
                GameEvent::BonusCollected,
                GameEvent::DebuffCollected,
            ]
        );
    }

    #[test]
    fn test_bonus_timer_expiry() {
        let mut state = scenario(8);
        let old = p(2, 2);
        state.bonus.state = TimedState::Active {
            position: old,
            remaining_ticks: 1,
        };
        update(&mut state);
        assert!(state.bonus.is_active());
        assert_eq!(state.bonus.remaining_ticks(), ITEM_LIFETIME_TICKS);
        assert!(!state.snake.occupies(state.bonus.position().unwrap()));
        assert!(state.events.contains(&GameEvent::ItemExpired(ItemKind::Bonus)));
    }

    #[test]
    fn test_expiry_relocates_with_high_probability() {
        let old = p(2, 2);
        let moved = (0..100)
            .filter(|&seed| {
                let mut state = scenario(seed);
                state.bonus.state = TimedState::Active {
                    position: old,
                    remaining_ticks: 1,
                };
                update(&mut state);
                state.bonus.position() != Some(old)
            })
            .count();
        assert!(moved >= 90, "only {moved} of 100 respawns moved");
    }

    #[test]
    fn test_timers_tick_each_update() {
        let mut state = scenario(9);
        update(&mut state);
        assert_eq!(state.bonus.remaining_ticks(), ITEM_LIFETIME_TICKS - 1);
        assert_eq!(state.debuff.remaining_ticks(), ITEM_LIFETIME_TICKS - 1);
    }

    #[test]
    fn test_wrap_through_edge() {
        let mut state = scenario(10);
        state.snake = Snake::from_body([p(9, 5), p(8, 5), p(7, 5)], Direction::Right);
        step(&mut state);
        assert_eq!(state.snake.head(), p(0, 5));

        state.snake = Snake::from_body([p(4, 0), p(4, 1), p(4, 2)], Direction::Up);
        step(&mut state);
        assert_eq!(state.snake.head(), p(4, 9));
    }

    #[test]
    fn test_update_wraps_unwrapped_head() {
        let mut state = scenario(10);
        state.snake = Snake::from_body([p(-1, 12), p(0, 1)], Direction::Left);
        update(&mut state);
        assert_eq!(state.snake.head(), p(9, 2));
    }

    #[test]
    fn test_reset_restores_fresh_run() {
        let mut state = scenario(11);
        state.score = 12;
        state.speed_modifier = -SPEED_MODIFIER_MAGNITUDE;
        state.phase = GamePhase::GameOver;
        state.snake.grow();

        reset(&mut state);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_modifier, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.arena, Arena::new(10, 10));
        assert_eq!(state.bonus.remaining_ticks(), ITEM_LIFETIME_TICKS);
        assert_eq!(state.debuff.remaining_ticks(), ITEM_LIFETIME_TICKS);
        assert_eq!(state.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_determinism() {
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        let mut a = GameState::new(99999, Arena::default());
        let mut b = GameState::new(99999, Arena::default());
        for i in 0..500 {
            let dir = turns[(i / 7) % turns.len()];
            a.snake.set_direction(dir);
            b.snake.set_direction(dir);
            step(&mut a);
            step(&mut b);
        }
        assert_eq!(a.snake, b.snake);
        assert_eq!(a.score, b.score);
        assert_eq!(a.food, b.food);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn test_serialized_state_resumes_identically() {
        let mut live = GameState::new(2024, Arena::default());
        for _ in 0..40 {
            step(&mut live);
        }
        let json = serde_json::to_string(&live).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();
        for _ in 0..400 {
            step(&mut live);
            step(&mut restored);
        }
        assert_eq!(live.snake, restored.snake);
        assert_eq!(live.food, restored.food);
        assert_eq!(live.bonus, restored.bonus);
        assert_eq!(live.score, restored.score);
    }

    #[test]
    fn test_restored_zero_width_arena_steps() {
        let live = GameState::new(7, Arena::default());
        let mut json = serde_json::to_value(&live).unwrap();
        json["arena"]["width"] = serde_json::json!(0);
        let mut restored: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(restored.arena, Arena::new(1, ARENA_HEIGHT));
        for _ in 0..20 {
            step(&mut restored);
            assert!(restored.arena.contains(restored.snake.head()));
        }
    }

    proptest! {
        #[test]
        fn head_always_in_bounds(
            seed in any::<u64>(),
            w in 3i32..20,
            h in 3i32..20,
            turns in proptest::collection::vec(0usize..4, 1..200),
        ) {
            let mut state = GameState::new(seed, Arena::new(w, h));
            for t in turns {
                state.snake.set_direction(Direction::ALL[t]);
                step(&mut state);
                prop_assert!(state.arena.contains(state.snake.head()));
                if state.is_game_over() {
                    break;
                }
            }
        }
    }
}
