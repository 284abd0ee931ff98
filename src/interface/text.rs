#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::core::{Board, Player, NUM_CELLS};

use super::{Interface, Notice};

/// Console front-end: prompts on `output`, reads one line per move from `input`.
pub struct TextInterface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextInterface<StdinLock<'static>, Stdout> {
    /// Bind to the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interface for TextInterface<R, W> {
    fn prompt_move(&mut self, player: Player) -> io::Result<Option<String>> {
        write!(
            self.output,
            "{}'s turn. Input move (0-{}): ",
            player,
            NUM_CELLS - 1
        )?;
        self.output.flush()?;
        // Raw bytes: a line that is not UTF-8 is a bad move, not a broken stream.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", board)?;
        self.output.flush()
    }

    fn announce(&mut self, notice: Notice) -> io::Result<()> {
        match notice {
            Notice::InvalidMove(_) => writeln!(self.output, "Invalid move. Try again.")?,
            Notice::Win(p) => writeln!(self.output, "{} wins!", p)?,
            Notice::Draw => writeln!(self.output, "It's a tie!")?,
        }
        self.output.flush()
    }
}
