//! Grid snake for the terminal: fixed board, score-scaled tick rate,
//! file-persisted high score.

pub mod config;
pub mod game;
pub mod input;
pub mod score;
pub mod snake;
pub mod state;
pub mod term;

/// Board-space coordinate unit; positions are multiples of `config::UNIT_SIZE`.
pub type Px = i32;
pub type Coords = (Px, Px);
