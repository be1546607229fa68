use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
pub const MAX_CELLS: usize = ROWS * COLUMNS;

/// The marker a player owns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    PlayerOne,
    PlayerTwo,
}

impl Token {
    pub fn opponent(self) -> Token {
        match self {
            Token::PlayerOne => Token::PlayerTwo,
            Token::PlayerTwo => Token::PlayerOne,
        }
    }

    pub fn symbol(self) -> &'static str {
        Cell::from(self).symbol()
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "[ ]",
            Cell::PlayerOne => "[X]",
            Cell::PlayerTwo => "[O]",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        match token {
            Token::PlayerOne => Cell::PlayerOne,
            Token::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// Fixed 6x7 board. Row 0 is the top, so tokens settle toward `ROWS - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Clear every cell for a fresh game.
    pub fn init(&mut self) {
        self.cells = [[Cell::Empty; COLUMNS]; ROWS];
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    /// Panics when `(row, col)` lies outside the board; callers validate first.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert_in_bounds(row, col);
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert_in_bounds(row, col);
        self.cells[row][col] = cell;
    }

    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == MAX_CELLS
    }

    /// Rows from top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell; COLUMNS]> {
        self.cells.iter()
    }

    /// Copy of the grid with every row reversed (left-right mirror).
    pub fn mirrored(&self) -> Grid {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Grid { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn assert_in_bounds(row: usize, col: usize) {
    assert!(
        row < ROWS && col < COLUMNS,
        "cell ({row}, {col}) is outside the {ROWS}x{COLUMNS} grid"
    );
}
