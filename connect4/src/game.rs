//! Turn orchestration: asks players for columns, retries rejected drops and
//! stops on the first alignment or when the board is full.
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GameError;
use crate::grid::{Cell, Grid, Token, MAX_CELLS};
use crate::moves::MoveEngine;
use crate::player::Player;
use crate::render::{Renderer, Tone};
use crate::win::find_alignment;

const DEFAULT_MAX_AI_ATTEMPTS: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Consecutive rejected drops an AI may make before the game is aborted.
    pub max_ai_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_ai_attempts: DEFAULT_MAX_AI_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_max_ai_attempts(mut self, attempts: usize) -> Self {
        self.max_ai_attempts = attempts.max(1);
        self
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Winner(Token),
    Draw,
}

pub struct Game<R> {
    grid: Grid,
    engine: MoveEngine,
    players: [Box<dyn Player>; 2],
    renderer: R,
    config: GameConfig,
    turns: usize,
}

impl<R: Renderer> Game<R> {
    /// Player one moves first with [`Token::PlayerOne`].
    pub fn new(
        mut player_one: Box<dyn Player>,
        mut player_two: Box<dyn Player>,
        renderer: R,
    ) -> Self {
        player_one.assign_token(Token::PlayerOne);
        player_two.assign_token(Token::PlayerTwo);
        Self {
            grid: Grid::new(),
            engine: MoveEngine::new(),
            players: [player_one, player_two],
            renderer,
            config: GameConfig::default(),
            turns: 0,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Successful moves made so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self, token: Token) -> &dyn Player {
        match token {
            Token::PlayerOne => self.players[0].as_ref(),
            Token::PlayerTwo => self.players[1].as_ref(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Fresh board, turn counter back to zero, welcome banner.
    pub fn setup(&mut self) {
        self.grid.init();
        self.turns = 0;
        let banner = format!(
            "Hey! Welcome to Connect4 game simulation.\n\
             It is a turn based game between two players.\n\
             Each player simply needs to enter a column number and\n\
             try to Connect4 tokens of their own.\n\
             --------------------------------------\n\
             The players are...\n\
             Player One: Name {}, Token {}\n\
             Player Two: Name {}, Token {}\n\
             {} indicates an empty cell and a valid drop point.\n\
             Have fun!\n",
            self.players[0].name(),
            self.players[0].token().symbol(),
            self.players[1].name(),
            self.players[1].token().symbol(),
            Cell::Empty.symbol(),
        );
        self.renderer.message(Tone::Info, &banner);
        self.renderer.grid(&self.grid);
    }

    /// Plays turns until someone aligns four or the board fills up.
    pub fn start(&mut self) -> Result<GameOutcome, GameError> {
        info!(
            player_one = self.players[0].name(),
            player_two = self.players[1].name(),
            "game started"
        );
        while self.turns < MAX_CELLS {
            let current = self.turns % 2;
            if let Err(err) = self.take_turn(current) {
                self.renderer.message(Tone::Error, &format!("Game aborted: {err}"));
                return Err(err);
            }
            self.turns += 1;

            let player = &self.players[current];
            if let Some((direction, line)) = find_alignment(&self.grid, player.token()) {
                info!(winner = player.name(), ?direction, ?line, turns = self.turns, "game won");
                let text = format!("Congratulations! The winner is {}", player.name());
                self.renderer.message(Tone::Success, &text);
                return Ok(GameOutcome::Winner(player.token()));
            }
        }
        info!(turns = self.turns, "game drawn");
        self.renderer.message(Tone::Error, "There is no winner. :(");
        Ok(GameOutcome::Draw)
    }

    /// [`setup`](Self::setup) followed by [`start`](Self::start).
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.setup();
        self.start()
    }

    /// Ask the same player until one drop is accepted.
    fn take_turn(&mut self, current: usize) -> Result<(), GameError> {
        let player = &mut self.players[current];
        let mut failures = 0;
        loop {
            let choice = player.choose_column(&self.grid)?;
            // Column 0 has no 0-indexed counterpart; push it out of range.
            let column = choice.checked_sub(1).unwrap_or(usize::MAX);
            match self.engine.drop_token(&mut self.grid, column, player.token()) {
                Ok(_) => {
                    let text = format!(
                        "{} {} move is in the position C{}",
                        player.name(),
                        player.token().symbol(),
                        choice
                    );
                    self.renderer.message(Tone::Info, &text);
                    self.renderer.grid(&self.grid);
                    return Ok(());
                }
                Err(_) if player.is_human() => {
                    self.renderer.message(Tone::Error, self.engine.last_error());
                }
                Err(err) => {
                    failures += 1;
                    debug!(
                        player = player.name(),
                        choice,
                        failures,
                        error = %err,
                        "ai move rejected"
                    );
                    if failures >= self.config.max_ai_attempts {
                        warn!(player = player.name(), failures, "aborting game as stalemate");
                        return Err(GameError::StalemateAbort {
                            player: player.name().to_string(),
                            attempts: failures,
                        });
                    }
                }
            }
        }
    }
}
