use thiserror::Error;

/// A rejected column drop. Both variants are recoverable: the same player
/// simply chooses again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// `valid` holds the 1-indexed columns that still accept a token.
    #[error("Invalid column, please only choose from {}", join_columns(.valid))]
    ColumnOutOfRange { valid: Vec<usize> },
    /// `column` is the 0-indexed column; the message shows it 1-indexed.
    #[error("Column {} is already full, please choose a different column.", .column + 1)]
    ColumnFull { column: usize },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{player} failed {attempts} consecutive moves, aborting the game as a stalemate")]
    StalemateAbort { player: String, attempts: usize },
    #[error("input for {player} was closed before a column was chosen")]
    InputClosed { player: String },
    #[error("failed to read player input: {0}")]
    Io(#[from] std::io::Error),
}

fn join_columns(columns: &[usize]) -> String {
    columns
        .iter()
        .map(|column| column.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_lists_valid_columns() {
        let err = MoveError::ColumnOutOfRange {
            valid: vec![1, 3, 4, 5, 6, 7],
        };
        assert_eq!(
            err.to_string(),
            "Invalid column, please only choose from 1, 3, 4, 5, 6, 7"
        );
    }

    #[test]
    fn full_column_is_one_indexed() {
        let err = MoveError::ColumnFull { column: 1 };
        assert_eq!(
            err.to_string(),
            "Column 2 is already full, please choose a different column."
        );
    }

    #[test]
    fn stalemate_names_player() {
        let err = GameError::StalemateAbort {
            player: "Robot".to_string(),
            attempts: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Robot failed 1000 consecutive moves, aborting the game as a stalemate"
        );
    }
}
