//! Column drops. This is the only path by which tokens enter a [`Grid`].
use tracing::debug;

use crate::error::MoveError;
use crate::grid::{Cell, Grid, Token, COLUMNS, ROWS};

/// Applies gravity-resolved drops and remembers why the last one failed.
#[derive(Clone, Debug, Default)]
pub struct MoveEngine {
    last_error: String,
}

impl MoveEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message of the most recent failed validation, or `""` if the last
    /// validating call succeeded. Read it before the next drop overwrites it.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Drop `token` into the 0-indexed `column`. The token lands in the
    /// bottom-most empty row, which is returned.
    pub fn drop_token(
        &mut self,
        grid: &mut Grid,
        column: usize,
        token: Token,
    ) -> Result<usize, MoveError> {
        self.last_error.clear();
        let result = Self::place(grid, column, token);
        match &result {
            Ok(row) => debug!(column, row, ?token, "token dropped"),
            Err(err) => {
                debug!(column, ?token, error = %err, "drop rejected");
                self.last_error = err.to_string();
            }
        }
        result
    }

    /// Range check that records the out-of-range message on failure.
    pub fn is_column_in_range(&mut self, grid: &Grid, column: usize) -> bool {
        self.last_error.clear();
        if column < COLUMNS {
            return true;
        }
        self.last_error = out_of_range(grid).to_string();
        false
    }

    /// Capacity check that records the full-column message on failure.
    pub fn is_column_full(&mut self, grid: &Grid, column: usize) -> bool {
        self.last_error.clear();
        if next_available_row(grid, column).is_some() {
            return false;
        }
        self.last_error = MoveError::ColumnFull { column }.to_string();
        true
    }

    fn place(grid: &mut Grid, column: usize, token: Token) -> Result<usize, MoveError> {
        if column >= COLUMNS {
            return Err(out_of_range(grid));
        }
        let row = next_available_row(grid, column).ok_or(MoveError::ColumnFull { column })?;
        grid.set(row, column, Cell::from(token));
        Ok(row)
    }
}

/// Lowest empty row of a 0-indexed column, scanning from the bottom up.
/// `None` when the column is full or does not exist.
pub fn next_available_row(grid: &Grid, column: usize) -> Option<usize> {
    if column >= COLUMNS {
        return None;
    }
    (0..ROWS).rev().find(|&row| grid.get(row, column).is_empty())
}

/// Columns that still accept a token, 1-indexed and ascending.
pub fn valid_columns(grid: &Grid) -> Vec<usize> {
    (0..COLUMNS)
        .filter(|&column| next_available_row(grid, column).is_some())
        .map(|column| column + 1)
        .collect()
}

fn out_of_range(grid: &Grid) -> MoveError {
    MoveError::ColumnOutOfRange {
        valid: valid_columns(grid),
    }
}
