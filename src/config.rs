use crate::Px;

use crossterm::style::Color;

/// Side length of one grid cell; every position and velocity is a multiple of it.
pub const UNIT_SIZE: Px = 25;
pub const BOARD_WIDTH: Px = 500;
pub const BOARD_HEIGHT: Px = 500;

pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Tick timing: each pass waits `max(MIN, BASE - score * DECAY)` milliseconds.
pub const BASE_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 50;
pub const TICK_DECAY_MS_PER_POINT: u64 = 2;

pub const BOARD_BACKGROUND: Color = Color::DarkGreen;
pub const SNAKE_FILL: Color = Color::Cyan;
pub const SNAKE_OUTLINE: Color = Color::Black;
pub const FOOD_COLOR: Color = Color::Red;
pub const TEXT_COLOR: Color = Color::Yellow;

pub const HIGH_SCORE_FILE: &str = ".gridsnake_high_score.txt";
pub const LOG_FILE: &str = "gridsnake.log";
