use std::process::exit;
use std::thread::sleep;

use log::{debug, error, info};

use crate::config::{FOOD_COLOR, HIGH_SCORE_FILE, SNAKE_FILL, SNAKE_OUTLINE};
use crate::input::Command;
use crate::score::HighScoreStore;
use crate::state::{GameState, TickResult};
use crate::term::TermCanvas;

pub struct SnakeGame {
    term: TermCanvas,
    scores: HighScoreStore,
}

impl SnakeGame {
    pub fn new() -> crossterm::Result<Self> {
        Ok(SnakeGame {
            term: TermCanvas::new()?,
            scores: HighScoreStore::open(HIGH_SCORE_FILE),
        })
    }

    pub fn run(&mut self) -> crossterm::Result<()> {
        self.term.setup()?;
        self.term.draw_border()?;
        self.term.fill_board()?;
        self.term.draw_status(0, self.scores.best())?;
        self.term.show_banner(&["Press Enter to start!"])?;

        let mut state = GameState::new();

        loop {
            let key = self.term.read_key_blocking()?;
            match Command::from_key_event(&key) {
                Some(Command::Quit) => self.clean_exit(),
                Some(Command::Start) if !state.is_running() => {
                    self.play(&mut state)?;
                }
                Some(Command::Reset) if !state.is_running() => {
                    state = GameState::new();
                    self.play(&mut state)?;
                }
                _ => {}
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self, state: &mut GameState) -> crossterm::Result<()> {
        state.start();
        info!("game started, high score to beat: {}", self.scores.best());

        while state.is_running() {
            sleep(state.tick_interval());

            for key in self.term.drain_key_events()? {
                match Command::from_key_event(&key) {
                    Some(Command::Quit) => self.clean_exit(),
                    Some(Command::Turn(dir)) => state.steer(dir),
                    // Start and reset do nothing while running.
                    _ => {}
                }
            }

            let result = state.tick();
            self.draw_frame(state)?;

            if result == TickResult::Ate {
                debug!("food eaten, score {}", state.score());
            }
        }

        self.finish_game(state)
    }

    fn draw_frame(&mut self, state: &GameState) -> crossterm::Result<()> {
        self.term.fill_board()?;
        self.term.fill_cell(state.food(), FOOD_COLOR)?;
        for &segment in state.snake().body() {
            self.term.fill_cell_outlined(segment, SNAKE_FILL, SNAKE_OUTLINE)?;
        }
        self.term.draw_status(state.score(), self.scores.best())?;
        self.term.flush()
    }

    fn finish_game(&mut self, state: &GameState) -> crossterm::Result<()> {
        let score = state.score();
        info!("game over, score {}", score);

        self.term.show_banner(&[
            "GAME OVER!",
            &*format!("Score: {}", score),
            "",
            "Press R to play again,",
            "or Ctrl+C to quit.",
        ])?;

        if self.scores.maybe_update(score) {
            info!("new high score: {}", score);
        }
        self.term.draw_status(score, self.scores.best())
    }

    fn clean_exit(&mut self) -> ! {
        if let Err(err) = self.term.restore() {
            error!("failed to restore terminal: {}", err);
        }
        exit(0);
    }
}
