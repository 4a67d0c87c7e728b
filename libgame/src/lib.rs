use std::mem;

use board::{GameBoard, TileState};
use error::GameError;
use itertools::Itertools;
use pos::Position;
use rand::Rng;
use rule::Rule;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod save;

/// A fixed-size, non-wrapping life grid together with the generation before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    current: GameBoard,
    previous: GameBoard,
    rule: Rule,
    generation_count: usize,
    max_generations: Option<usize>,
}

/// Why [`Game::run`] stopped stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Settled,
    StepBudget,
}

impl Game {
    pub fn new(
        rows: usize,
        cols: usize,
        randomize: bool,
        max_generations: Option<usize>,
    ) -> Result<Self, GameError> {
        Self::new_with_rng(rows, cols, randomize, max_generations, &mut rand::rng())
    }

    pub fn new_with_rng<R>(
        rows: usize,
        cols: usize,
        randomize: bool,
        max_generations: Option<usize>,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        check_dimensions(rows, cols)?;

        let board = if randomize {
            GameBoard::new_random(rows, cols, rng)
        } else {
            GameBoard::new(rows, cols)
        };

        Self::from_board(board, max_generations)
    }

    /// Starts a game with `board` as the first generation.
    pub fn from_board(board: GameBoard, max_generations: Option<usize>) -> Result<Self, GameError> {
        check_board(&board)?;

        Ok(Self {
            previous: GameBoard::new(board.rows, board.cols),
            current: board,
            rule: Rule::default(),
            generation_count: 1,
            max_generations,
        })
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.current.rows, self.current.cols)
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Option<TileState> {
        self.current.tile((row, col)).copied()
    }

    /// Returns false if the position is outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, state: TileState) -> bool {
        match self.current.tile_mut((row, col)) {
            Some(tile) => {
                *tile = state;
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> &GameBoard {
        &self.current
    }

    /// Swaps in a new current generation of the same size. The previous
    /// generation and the generation count are untouched.
    pub fn replace_current(&mut self, board: GameBoard) -> Result<(), GameError> {
        if (board.rows, board.cols) != self.dimensions() {
            return Err(GameError::DimensionMismatch {
                expected: self.dimensions(),
                found: (board.rows, board.cols),
            });
        }
        check_board(&board)?;

        self.current = board;
        Ok(())
    }

    pub fn previous(&self) -> &GameBoard {
        &self.previous
    }

    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    pub fn max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn population(&self) -> usize {
        self.current.count_tiles(TileState::Alive)
    }

    pub fn step(&mut self) {
        let next = self.next_generation();
        self.previous = mem::replace(&mut self.current, next);
        self.generation_count += 1;

        log::debug!(
            "Generation {}: {} alive",
            self.generation_count,
            self.population()
        );
    }

    pub fn next_generation(&self) -> GameBoard {
        let next_tiles = self
            .current
            .enumerate_tiles()
            .map(|(tile_pos, tile)| self.tick_tile(tile_pos, tile))
            .collect();

        GameBoard::with_tiles(self.current.rows, self.current.cols, next_tiles)
    }

    /// Counts live cells among the in-bounds neighbors of `(row, col)`; the grid does not wrap.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> usize {
        let (rows, cols) = self.dimensions();

        let neighbor_rows = row.saturating_sub(1)..=row.saturating_add(1).min(rows - 1);
        let neighbor_cols = col.saturating_sub(1)..=col.saturating_add(1).min(cols - 1);

        neighbor_rows
            .cartesian_product(neighbor_cols)
            .filter(|&neighbor| neighbor != (row, col))
            .filter_map(|neighbor| self.current.tile(neighbor))
            .filter(|tile| tile.is_alive())
            .count()
    }

    /// True only when the generation count is exactly the limit; stepping past it is not prevented.
    pub fn has_reached_generation_limit(&self) -> bool {
        self.max_generations == Some(self.generation_count)
    }

    pub fn is_population_changing(&self) -> bool {
        self.current != self.previous
    }

    /// Steps until the generation limit is hit, the population settles, or
    /// `step_budget` steps have been taken.
    pub fn run(&mut self, step_budget: usize) -> StopReason {
        for _ in 0..step_budget {
            self.step();

            if self.has_reached_generation_limit() {
                return StopReason::GenerationLimit;
            }

            if !self.is_population_changing() {
                return StopReason::Settled;
            }
        }

        log::warn!(
            "Stopped after {step_budget} steps at generation {}",
            self.generation_count
        );

        StopReason::StepBudget
    }

    fn tick_tile(&self, tile_pos: Position, tile: &TileState) -> TileState {
        let alive_neighbor_count = self.count_alive_neighbors(tile_pos.row, tile_pos.col);

        TileState::from(self.rule.next_state(tile.is_alive(), alive_neighbor_count))
    }
}

/// Returns the cell count of a `rows` x `cols` grid if one can be allocated.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GameError> {
    rows.checked_mul(cols)
        .filter(|&cell_count| cell_count > 0 && cell_count <= isize::MAX as usize)
        .ok_or(GameError::InvalidDimensions { rows, cols })
}

fn check_board(board: &GameBoard) -> Result<(), GameError> {
    let cell_count = check_dimensions(board.rows, board.cols)?;

    if board.tiles.len() != cell_count {
        return Err(GameError::TileCountMismatch {
            expected: cell_count,
            found: board.tiles.len(),
        });
    }

    Ok(())
}
