use std::cmp::max;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{
    BASE_TICK_MS, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_SNAKE_LENGTH, MIN_TICK_MS,
    TICK_DECAY_MS_PER_POINT, UNIT_SIZE,
};
use crate::snake::{Direction, Snake};
use crate::{Coords, Px};

/// What a single simulation step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickResult {
    Moved,
    Ate,
    GameOver,
}

/// All mutable game state for one play session. Generic over the RNG so
/// tests can drive it with a seeded `StdRng`.
pub struct GameState<R = ThreadRng> {
    snake: Snake,
    food: Coords,
    score: u32,
    running: bool,
    rng: R,
}

impl GameState<ThreadRng> {
    pub fn new() -> Self {
        Self::new_with_rng(rand::thread_rng())
    }
}

impl Default for GameState<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameState<R> {
    pub fn new_with_rng(rng: R) -> Self {
        let head = ((INITIAL_SNAKE_LENGTH as Px - 1) * UNIT_SIZE, 0);
        let snake = Snake::new(head, INITIAL_SNAKE_LENGTH, Direction::Right);
        let mut state = GameState {
            snake,
            food: (0, 0),
            score: 0,
            running: false,
            rng,
        };
        state.spawn_food();
        state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin (or resume) the tick loop: raises the running flag and rolls a
    /// fresh food cell, leaving score and snake as they are.
    pub fn start(&mut self) {
        self.running = true;
        self.spawn_food();
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// One simulation step: move, then collision-check. Pure with respect
    /// to time; the loop owns the pacing.
    pub fn tick(&mut self) -> TickResult {
        let ate = self.advance();
        self.check_terminal();

        if !self.running {
            TickResult::GameOver
        } else if ate {
            TickResult::Ate
        } else {
            TickResult::Moved
        }
    }

    /// Move the snake one cell. Landing on the food scores a point, rolls a
    /// new food cell and keeps the tail (growth); otherwise the tail is
    /// dropped. No bounds handling here.
    pub fn advance(&mut self) -> bool {
        let new_head = self.snake.advance();

        if new_head == self.food {
            self.score += 1;
            self.spawn_food();
            true
        } else {
            self.snake.drop_tail();
            false
        }
    }

    /// Lower the running flag when the head is off the board or on another
    /// segment. The upper bound is a strict comparison against the board
    /// size itself, so a head at exactly `BOARD_WIDTH` survives one more
    /// tick (clipped out of view by the renderer).
    pub fn check_terminal(&mut self) {
        let (hx, hy) = self.snake.head();
        if hx < 0 || hx > BOARD_WIDTH || hy < 0 || hy > BOARD_HEIGHT {
            self.running = false;
        }
        if self.snake.hits_self() {
            self.running = false;
        }
    }

    /// Roll a uniform random grid cell for the food. Deliberately blind to
    /// snake occupancy: the food may land under the body.
    pub fn spawn_food(&mut self) {
        let food = (
            self.rng.gen_range(0..BOARD_WIDTH / UNIT_SIZE) * UNIT_SIZE,
            self.rng.gen_range(0..BOARD_HEIGHT / UNIT_SIZE) * UNIT_SIZE,
        );
        self.place_food(food);
    }

    pub fn place_food(&mut self, at: Coords) {
        self.food = at;
    }

    pub fn tick_interval(&self) -> Duration {
        tick_interval_for(self.score)
    }
}

/// Tick pacing: `max(50, 100 - 2 * score)` milliseconds, monotonically
/// non-increasing and floored at 50.
pub fn tick_interval_for(score: u32) -> Duration {
    let ms = BASE_TICK_MS.saturating_sub(score as u64 * TICK_DECAY_MS_PER_POINT);
    Duration::from_millis(max(MIN_TICK_MS, ms))
}
