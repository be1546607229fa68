use std::io::Write;

use tracing::warn;

use crate::grid::Grid;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[33m",
            Tone::Success => "\x1b[42m",
            Tone::Error => "\x1b[31m",
        }
    }
}

/// Output sink the game notifies after every applied move and at game end.
pub trait Renderer {
    fn grid(&mut self, grid: &Grid);

    fn message(&mut self, tone: Tone, text: &str);
}

/// Draws the board as text:
///
/// ```text
///     [ ][ ][ ][ ][ ][ ][ ]
///     [ ][ ][X][O][ ][ ][ ]
/// C->  1  2  3  4  5  6  7
/// ```
pub struct TerminalRenderer<W> {
    out: W,
    colors: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, colors: true }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_grid(&mut self, grid: &Grid) -> std::io::Result<()> {
        for row in grid.rows_iter() {
            write!(self.out, "    ")?;
            for cell in row {
                write!(self.out, "{}", cell.symbol())?;
            }
            writeln!(self.out)?;
        }
        write!(self.out, "C->")?;
        for column in 1..=grid.columns() {
            write!(self.out, "  {column}")?;
        }
        write!(self.out, "\n\n")?;
        self.out.flush()
    }

    fn write_message(&mut self, tone: Tone, text: &str) -> std::io::Result<()> {
        if self.colors {
            writeln!(self.out, "{}{text} \x1b[0m", tone.ansi())?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn grid(&mut self, grid: &Grid) {
        if let Err(err) = self.write_grid(grid) {
            warn!(error = %err, "failed to draw grid");
        }
    }

    fn message(&mut self, tone: Tone, text: &str) {
        if let Err(err) = self.write_message(tone, text) {
            warn!(error = %err, ?tone, "failed to print message");
        }
    }
}
