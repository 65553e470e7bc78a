//! Console-backed human move source.

use super::MoveSource;
use crate::board::{Board, Coord};
use crate::error::GameError;
use crate::moves;
use std::io::{BufRead, Write};

/// Move source that prompts on `output` and reads one line from `input`.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
/// A closed input stream is a fatal `Io` error, not a retry.
#[derive(Debug)]
pub struct HumanSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanSource<R, W> {
    /// Creates a source over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the source, returning the output stream. Used by tests to
    /// inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line to the output stream.
    pub fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes a prompt (no newline) and reads one line back.
    ///
    /// # Errors
    ///
    /// A closed input stream is a fatal `Io` error.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(GameError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanSource<R, W> {
    fn next_move(&mut self, board: &Board) -> Result<Coord, GameError> {
        let line = self.prompt_line("Enter your move (column row): ")?;
        moves::parse_move(&line, board.size())
    }

    fn notify_rejected(&mut self, err: &GameError) {
        // Best effort: a rejection message that fails to print should not
        // mask the rejection itself.
        let _ = writeln!(self.output, "{err}. Try again.");
    }
}
