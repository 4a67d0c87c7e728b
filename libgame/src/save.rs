use std::{fmt, fs, io, path::Path, str::FromStr};

use crate::{
    Game,
    board::{GameBoard, TileState},
    error::{GameError, MalformedReason},
};

impl FromStr for GameBoard {
    type Err = GameError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut cols = None;
        let mut rows = 0;
        let mut tiles = Vec::new();

        for (line_index, line) in source.lines().enumerate() {
            let line_number = line_index + 1;

            let row_start = tiles.len();
            for digit in line.chars() {
                let tile = TileState::from_digit(digit).ok_or_else(|| {
                    GameError::malformed(line_number, MalformedReason::InvalidCharacter(digit))
                })?;
                tiles.push(tile);
            }

            let found = tiles.len() - row_start;
            if found == 0 {
                return Err(GameError::malformed(line_number, MalformedReason::EmptyRow));
            }

            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(GameError::malformed(
                    line_number,
                    MalformedReason::InconsistentRowLength { expected, found },
                ));
            }

            rows += 1;
        }

        match cols {
            Some(cols) => Ok(GameBoard::with_tiles(rows, cols, tiles)),
            None => Err(GameError::malformed(1, MalformedReason::Empty)),
        }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for tile in self.row(row).into_iter().flatten() {
                write!(f, "{}", tile.as_digit())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Game {
    /// Loads a saved grid with no generation limit.
    pub fn load<P>(path: P) -> Result<Self, GameError>
    where
        P: AsRef<Path>,
    {
        Self::load_with_limit(path, None)
    }

    pub fn load_with_limit<P>(path: P, max_generations: Option<usize>) -> Result<Self, GameError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let source = fs::read_to_string(path).map_err(|source| GameError::IoFailure {
            path: path.to_owned(),
            source,
        })?;
        let board = source.parse::<GameBoard>()?;

        log::info!("Loaded {}x{} grid from {}", board.rows, board.cols, path.display());

        Self::from_board(board, max_generations)
    }

    /// Writes the current generation, creating missing parent directories.
    pub fn save<P>(&self, path: P) -> Result<(), GameError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let io_failure = |source: io::Error| GameError::IoFailure {
            path: path.to_owned(),
            source,
        };

        if let Some(parent_path) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent_path).map_err(io_failure)?;
        }
        fs::write(path, self.current().to_string()).map_err(io_failure)?;

        log::info!(
            "Saved generation {} to {}",
            self.generation_count(),
            path.display()
        );

        Ok(())
    }
}
