use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use common::model::game::Move;
use tracing::warn;

use crate::{error::Result, model::external};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail to parse as a move.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn read_move(&mut self, name: &str) -> Result<Option<Move>> {
        let prompt = external::move_prompt(name);
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match line.parse::<Move>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    warn!("Rejected input: {}", e);
                    self.say(external::INVALID_MOVE)?;
                }
            }
        }
    }

    pub fn ask_continue(&mut self) -> Result<bool> {
        Ok(self
            .read_line(external::CONTINUE_PROMPT)?
            .is_some_and(|answer| external::wants_another_round(&answer)))
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
