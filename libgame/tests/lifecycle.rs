use std::{env, fs, path::PathBuf, process};

use libgame::{
    Game,
    board::{GameBoard, TileState},
    error::GameError,
};

fn board(source: &str) -> GameBoard {
    source.parse().unwrap()
}

fn game(source: &str) -> Game {
    Game::from_board(board(source), None).unwrap()
}

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir()
        .join(format!("libgame-lifecycle-{}", process::id()))
        .join(name)
}

#[test]
fn block_is_a_still_life() {
    let source = "000000\n000000\n001100\n001100\n000000\n000000\n";
    let game = game(source);

    assert_eq!(game.next_generation(), board(source));
}

#[test]
fn blinker_returns_after_two_steps() {
    let vertical = board("00000\n00100\n00100\n00100\n00000\n");
    let horizontal = board("00000\n00000\n01110\n00000\n00000\n");
    let mut game = Game::from_board(vertical.clone(), None).unwrap();

    game.step();
    assert_eq!(game.current(), &horizontal);

    game.step();
    assert_eq!(game.current(), &vertical);
}

#[test]
fn blinker_on_a_three_by_three_grid_oscillates() {
    let mut game = game("010\n010\n010\n");

    game.step();
    assert_eq!(game.current(), &board("000\n111\n000\n"));

    game.step();
    assert_eq!(game.current(), &board("010\n010\n010\n"));
}

#[test]
fn generation_limit_is_reached_exactly_once() {
    let mut game = Game::new(6, 6, true, Some(5)).unwrap();
    assert_eq!(game.generation_count(), 1);

    let mut reached_at = Vec::new();
    for _ in 0..8 {
        if game.has_reached_generation_limit() {
            reached_at.push(game.generation_count());
        }
        game.step();
    }

    assert_eq!(reached_at, vec![5]);
    assert_eq!(game.generation_count(), 9);
}

#[test]
fn unbounded_game_never_reaches_a_limit() {
    let mut game = Game::new(3, 3, false, None).unwrap();

    for _ in 0..10 {
        assert!(!game.has_reached_generation_limit());
        game.step();
    }
}

#[test]
fn dead_grid_stops_changing() {
    let mut game = Game::new(4, 4, false, None).unwrap();

    game.step();

    assert!(!game.is_population_changing());
    assert_eq!(game.population(), 0);
}

#[test]
fn blinker_keeps_changing() {
    let mut game = game("010\n010\n010\n");

    for _ in 0..6 {
        game.step();
        assert!(game.is_population_changing());
    }
}

#[test]
fn lone_cell_dies() {
    let mut game = game("000\n010\n000\n");

    game.step();

    assert_eq!(game.population(), 0);
    assert_eq!(game.cell_state(1, 1), Some(TileState::Dead));
}

#[test]
fn save_then_load_reproduces_grid() {
    let path = scratch_path("glider.txt");
    let saved = game("01000\n00100\n11100\n00000\n");

    saved.save(&path).unwrap();
    let loaded = Game::load(&path).unwrap();

    assert_eq!(loaded.dimensions(), (4, 5));
    assert_eq!(loaded.current(), saved.current());
    assert_eq!(loaded.generation_count(), 1);
    assert_eq!(loaded.previous(), &GameBoard::new(4, 5));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "01000\n00100\n11100\n00000\n"
    );

    let _ = fs::remove_file(path);
}

#[test]
fn load_with_limit_keeps_the_cap() {
    let path = scratch_path("limited.txt");
    game("1\n").save(&path).unwrap();

    let loaded = Game::load_with_limit(&path, Some(3)).unwrap();

    assert_eq!(loaded.max_generations(), Some(3));

    let _ = fs::remove_file(path);
}

#[test]
fn load_reports_malformed_files() {
    let path = scratch_path("ragged.txt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "010\n01\n").unwrap();

    assert!(matches!(
        Game::load(&path),
        Err(GameError::MalformedGridData { line: 2, .. })
    ));

    let _ = fs::remove_file(path);
}
