//! Line-oriented operator console over any reader/writer pair.
//! Production wires stdin/stdout; tests feed a `Cursor`.

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};
use tracing::trace;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// One line without its terminator, or `None` at end of input.
    /// Bytes that are not UTF-8 become replacement characters.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until an integer is entered. `None` means the input is closed.
    pub fn read_choice(&mut self) -> AppResult<Option<i64>> {
        loop {
            write!(self.output, "Please make your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    trace!(input = %line, "rejected selection");
                    writeln!(self.output, "Your input is invalid!")?;
                }
            }
        }
    }

    /// Ask for one field value. End of input aborts the current form.
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()?.ok_or(AppError::InputClosed)
    }
}
