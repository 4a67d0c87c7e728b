use rand::{Rng, seq::index};

use super::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub rows: usize,
    pub cols: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        let tiles = vec![TileState::default(); rows * cols];
        Self::with_tiles(rows, cols, tiles)
    }

    /// Every cell is independently alive with probability one half.
    pub fn new_random<R>(rows: usize, cols: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tiles = (0..rows * cols)
            .map(|_| TileState::from(rng.random_bool(0.5)))
            .collect();

        Self::with_tiles(rows, cols, tiles)
    }

    /// Places exactly `alive_cells` live cells at distinct random positions,
    /// or fills the whole board if it has fewer tiles than that.
    pub fn new_random_population<R>(rows: usize, cols: usize, alive_cells: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut board = Self::new(rows, cols);
        let tile_count = board.tiles.len();

        for index in index::sample(rng, tile_count, alive_cells.min(tile_count)) {
            board.tiles[index] = TileState::Alive;
        }

        board
    }

    pub fn with_tiles(rows: usize, cols: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), rows * cols);

        Self { rows, cols, tiles }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn count_tiles(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    pub fn row(&self, row: usize) -> Option<&[TileState]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.cols;
        Some(&self.tiles[start..start + self.cols])
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    /// The digit used for this state in saved grids.
    pub fn as_digit(self) -> char {
        match self {
            TileState::Alive => '1',
            TileState::Dead => '0',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(TileState::Alive),
            '0' => Some(TileState::Dead),
            _ => None,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
