use std::fs::File;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use gridsnake::config::LOG_FILE;
use gridsnake::game::SnakeGame;

fn main() -> crossterm::Result<()> {
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)
        .expect("failed to initialize logger");
    info!("starting gridsnake");

    let mut game = SnakeGame::new()?;
    game.run()
}
