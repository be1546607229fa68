//! Four-in-a-row detection. Every call rescans the whole grid; with at most
//! 42 cells there is nothing to gain from incremental tracking.
use once_cell::sync::Lazy;

use crate::grid::{Cell, Grid, Token, COLUMNS, ROWS};

const RUN: usize = 4;

/// Four `(row, column)` cells forming one candidate alignment.
pub type Line = [(usize, usize); RUN];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// `/`: from the start cell, each step goes one row down and one column left.
    ForwardDiagonal,
    /// `\`: from the start cell, each step goes one row down and one column right.
    BackDiagonal,
}

impl Direction {
    /// Scan order used by [`check_win`].
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::ForwardDiagonal,
        Direction::BackDiagonal,
    ];

    fn idx(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::ForwardDiagonal => 2,
            Direction::BackDiagonal => 3,
        }
    }
}

/// Every in-bounds line per direction, indexed by `Direction::idx`.
static LINES: Lazy<[Vec<Line>; 4]> = Lazy::new(|| Direction::ALL.map(generate_lines));

pub fn check_win(grid: &Grid, token: Token) -> bool {
    find_alignment(grid, token).is_some()
}

/// First alignment of `token`, trying directions in [`Direction::ALL`] order.
pub fn find_alignment(grid: &Grid, token: Token) -> Option<(Direction, Line)> {
    Direction::ALL.iter().find_map(|&direction| {
        find_in_direction(grid, token, direction).map(|line| (direction, line))
    })
}

pub fn check_direction(grid: &Grid, token: Token, direction: Direction) -> bool {
    find_in_direction(grid, token, direction).is_some()
}

pub fn check_horizontal(grid: &Grid, token: Token) -> bool {
    check_direction(grid, token, Direction::Horizontal)
}

pub fn check_vertical(grid: &Grid, token: Token) -> bool {
    check_direction(grid, token, Direction::Vertical)
}

pub fn check_forward_diagonal(grid: &Grid, token: Token) -> bool {
    check_direction(grid, token, Direction::ForwardDiagonal)
}

pub fn check_back_diagonal(grid: &Grid, token: Token) -> bool {
    check_direction(grid, token, Direction::BackDiagonal)
}

fn find_in_direction(grid: &Grid, token: Token, direction: Direction) -> Option<Line> {
    let target = Cell::from(token);
    LINES[direction.idx()]
        .iter()
        .find(|line| line.iter().all(|&(row, col)| grid.get(row, col) == target))
        .copied()
}

fn generate_lines(direction: Direction) -> Vec<Line> {
    let mut lines = Vec::new();
    match direction {
        Direction::Horizontal => {
            for row in 0..ROWS {
                for col in 0..=COLUMNS - RUN {
                    lines.push(std::array::from_fn(|offset| (row, col + offset)));
                }
            }
        }
        Direction::Vertical => {
            for col in 0..COLUMNS {
                for row in 0..=ROWS - RUN {
                    lines.push(std::array::from_fn(|offset| (row + offset, col)));
                }
            }
        }
        Direction::ForwardDiagonal => {
            for row in 0..=ROWS - RUN {
                for col in RUN - 1..COLUMNS {
                    lines.push(std::array::from_fn(|offset| (row + offset, col - offset)));
                }
            }
        }
        Direction::BackDiagonal => {
            for row in 0..=ROWS - RUN {
                for col in 0..=COLUMNS - RUN {
                    lines.push(std::array::from_fn(|offset| (row + offset, col + offset)));
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize, Token)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col, token) in cells {
            grid.set(row, col, Cell::from(token));
        }
        grid
    }

    #[test]
    fn line_counts_match_board_geometry() {
        assert_eq!(LINES[Direction::Horizontal.idx()].len(), 24);
        assert_eq!(LINES[Direction::Vertical.idx()].len(), 21);
        assert_eq!(LINES[Direction::ForwardDiagonal.idx()].len(), 12);
        assert_eq!(LINES[Direction::BackDiagonal.idx()].len(), 12);
    }

    #[test]
    fn empty_grid_has_no_winner() {
        let grid = Grid::new();
        assert!(!check_win(&grid, Token::PlayerOne));
        assert!(!check_win(&grid, Token::PlayerTwo));
    }

    #[test]
    fn horizontal_at_right_edge() {
        let p = Token::PlayerOne;
        let grid = grid_with(&[(0, 3, p), (0, 4, p), (0, 5, p), (0, 6, p)]);
        assert!(check_horizontal(&grid, p));
        assert!(!check_vertical(&grid, p));
        assert!(!check_win(&grid, p.opponent()));
    }

    #[test]
    fn vertical_at_top() {
        let p = Token::PlayerTwo;
        let grid = grid_with(&[(0, 6, p), (1, 6, p), (2, 6, p), (3, 6, p)]);
        assert!(check_vertical(&grid, p));
        assert_eq!(
            find_alignment(&grid, p),
            Some((Direction::Vertical, [(0, 6), (1, 6), (2, 6), (3, 6)]))
        );
    }

    #[test]
    fn forward_diagonal() {
        let p = Token::PlayerOne;
        let grid = grid_with(&[(2, 3, p), (3, 2, p), (4, 1, p), (5, 0, p)]);
        assert!(check_forward_diagonal(&grid, p));
        assert!(!check_back_diagonal(&grid, p));
        assert!(check_win(&grid, p));
    }

    #[test]
    fn back_diagonal() {
        let p = Token::PlayerTwo;
        let grid = grid_with(&[(2, 3, p), (3, 4, p), (4, 5, p), (5, 6, p)]);
        assert!(check_back_diagonal(&grid, p));
        assert!(!check_forward_diagonal(&grid, p));
    }

    #[test]
    fn broken_run_is_not_a_win() {
        let (p, o) = (Token::PlayerOne, Token::PlayerTwo);
        let grid = grid_with(&[(5, 0, p), (5, 1, p), (5, 2, o), (5, 3, p), (5, 4, p)]);
        assert!(!check_win(&grid, p));
    }

    #[test]
    fn repeated_checks_agree() {
        let p = Token::PlayerOne;
        let grid = grid_with(&[(5, 1, p), (4, 1, p), (3, 1, p), (2, 1, p)]);
        assert_eq!(check_win(&grid, p), check_win(&grid, p));
        assert!(check_win(&grid, p));
    }
}
