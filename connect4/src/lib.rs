//! Connect 4 game engine.
//! Players drop tokens into a 6x7 grid; gravity settles each token in the
//! lowest empty row of its column and the first player to line up four of
//! their own tokens wins. Columns are 0-indexed inside the engine and
//! 1-indexed wherever a player sees or chooses them.
pub mod error;
pub mod game;
pub mod grid;
pub mod moves;
pub mod player;
pub mod render;
pub mod win;

pub use error::{GameError, MoveError};
pub use game::{Game, GameConfig, GameOutcome};
pub use grid::{Cell, Grid, Token, COLUMNS, MAX_CELLS, ROWS};
pub use moves::{next_available_row, valid_columns, MoveEngine};
pub use player::{HumanPlayer, Player, RandomAi, ValidColumnAi};
pub use render::{Renderer, TerminalRenderer, Tone};
pub use win::{check_win, find_alignment, Direction, Line};
