//! Column choosers. Human and AI players all satisfy [`Player`]; the game
//! never needs to know which one it is driving beyond [`Player::is_human`].
use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::grid::{Grid, Token, COLUMNS};
use crate::moves::valid_columns;

pub trait Player {
    fn name(&self) -> &str;

    fn token(&self) -> Token;

    /// Called once by the game at setup.
    fn assign_token(&mut self, token: Token);

    fn is_human(&self) -> bool;

    /// The desired column, 1-indexed. May block on input.
    fn choose_column(&mut self, grid: &Grid) -> Result<usize, GameError>;
}

/// Reads column numbers line by line and prompts on `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    token: Token,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            token: Token::PlayerOne,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Token {
        self.token
    }

    fn assign_token(&mut self, token: Token) {
        self.token = token;
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_column(&mut self, _grid: &Grid) -> Result<usize, GameError> {
        write!(
            self.output,
            "{}{}) Enter a column number: ",
            self.name,
            self.token.symbol()
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed {
                player: self.name.clone(),
            });
        }
        // Column 0 never exists, so garbage input is rejected like any bad column.
        Ok(line.trim().parse().unwrap_or(0))
    }
}

/// Picks uniformly from every column, full or not.
pub struct RandomAi {
    name: String,
    token: Token,
    rng: StdRng,
}

impl RandomAi {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, StdRng::from_os_rng())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            token: Token::PlayerOne,
            rng,
        }
    }
}

impl Player for RandomAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Token {
        self.token
    }

    fn assign_token(&mut self, token: Token) {
        self.token = token;
    }

    fn is_human(&self) -> bool {
        false
    }

    fn choose_column(&mut self, _grid: &Grid) -> Result<usize, GameError> {
        Ok(self.rng.random_range(1..=COLUMNS))
    }
}

/// Picks uniformly among the columns that still have room.
pub struct ValidColumnAi {
    name: String,
    token: Token,
    rng: StdRng,
}

impl ValidColumnAi {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, StdRng::from_os_rng())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            token: Token::PlayerOne,
            rng,
        }
    }
}

impl Player for ValidColumnAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn token(&self) -> Token {
        self.token
    }

    fn assign_token(&mut self, token: Token) {
        self.token = token;
    }

    fn is_human(&self) -> bool {
        false
    }

    fn choose_column(&mut self, grid: &Grid) -> Result<usize, GameError> {
        let columns = valid_columns(grid);
        if columns.is_empty() {
            // Full board: answer something so the game's retry bound ends the turn.
            return Ok(0);
        }
        Ok(columns[self.rng.random_range(0..columns.len())])
    }
}
