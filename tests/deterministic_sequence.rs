use rand::rngs::StdRng;
use rand::SeedableRng;

use gridsnake::config::{BOARD_HEIGHT, BOARD_WIDTH, UNIT_SIZE};
use gridsnake::score::HighScoreStore;
use gridsnake::snake::Direction;
use gridsnake::state::{GameState, TickResult};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_rng(StdRng::seed_from_u64(42));
    state.start();

    // Initial layout: 5 segments on the top row, moving right.
    assert_eq!(state.snake().head(), (4 * UNIT_SIZE, 0));
    assert_eq!(state.snake().body().len(), 5);
    assert_eq!(state.score(), 0);

    // Feed one food item directly in the snake's path.
    state.place_food((5 * UNIT_SIZE, 0));
    assert_eq!(state.tick(), TickResult::Ate);
    assert_eq!(state.snake().body().len(), 6);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().head(), (5 * UNIT_SIZE, 0));

    // The replacement food is grid-aligned and within the board.
    let (fx, fy) = state.food();
    assert_eq!(fx % UNIT_SIZE, 0);
    assert_eq!(fy % UNIT_SIZE, 0);
    assert!(fx >= 0 && fx <= BOARD_WIDTH - UNIT_SIZE);
    assert!(fy >= 0 && fy <= BOARD_HEIGHT - UNIT_SIZE);

    // Park the food away from the top row and ride into the right wall.
    state.place_food((0, BOARD_HEIGHT - UNIT_SIZE));
    for _ in 0..14 {
        assert_eq!(state.tick(), TickResult::Moved);
    }
    assert_eq!(state.snake().head(), (BOARD_WIDTH - UNIT_SIZE, 0));

    // A head at exactly BOARD_WIDTH is clipped off-screen but still alive.
    assert_eq!(state.tick(), TickResult::Moved);
    assert_eq!(state.snake().head(), (BOARD_WIDTH, 0));
    assert!(state.is_running());

    assert_eq!(state.tick(), TickResult::GameOver);
    assert!(!state.is_running());
    assert_eq!(state.score(), 1);
}

#[test]
fn steered_run_sums_velocities() {
    let mut state = GameState::new_with_rng(StdRng::seed_from_u64(9));
    state.start();
    state.place_food((0, BOARD_HEIGHT - UNIT_SIZE));

    state.steer(Direction::Down);
    state.tick();
    state.tick();
    state.steer(Direction::Right);
    state.tick();

    // (100, 0) + 2 * (0, 25) + (25, 0)
    assert_eq!(state.snake().head(), (125, 50));
    assert_eq!(state.snake().body().len(), 5);
}

#[test]
fn high_score_survives_a_sequence_of_games() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("highscore");

    let mut store = HighScoreStore::open(&path);
    assert_eq!(store.best(), 0);

    // Three games: scores 2, 1, then 4.
    for (score, expected_best) in [(2, 2), (1, 2), (4, 4)].iter() {
        store.maybe_update(*score);
        assert_eq!(store.best(), *expected_best);
    }

    // Restarting the process sees the best of the session.
    drop(store);
    let store = HighScoreStore::open(&path);
    assert_eq!(store.best(), 4);
}
