//! Prompt/response I/O over any `BufRead` + `Write` pair
//!
//! End of input surfaces as [`KioskError::InputClosed`] from every read,
//! so a closed stdin unwinds the session loop cleanly.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crossterm::{cursor::MoveTo, execute, terminal::Clear, terminal::ClearType};
use rust_decimal::Decimal;

use crate::core::{Config, KioskError, KioskResult};

pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    loading_delay: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            clear_screen: config.clear_screen,
            loading_delay: Duration::from_millis(config.loading_delay_ms),
        }
    }

    pub fn write(&mut self, text: &str) -> KioskResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn writeln(&mut self, text: &str) -> KioskResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Next raw line without its line ending
    fn next_line(&mut self) -> KioskResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(KioskError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Whole line, spaces included (may be empty)
    pub fn read_line(&mut self, prompt: &str) -> KioskResult<String> {
        self.write(prompt)?;
        self.next_line()
    }

    /// First word of the next non-blank line; the rest of that line is dropped
    pub fn read_token(&mut self, prompt: &str) -> KioskResult<String> {
        self.write(prompt)?;
        loop {
            let line = self.next_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Numeric menu choice; `None` when the token is not a number
    pub fn read_choice(&mut self, prompt: &str) -> KioskResult<Option<u32>> {
        self.read_parsed(prompt)
    }

    pub fn read_decimal(&mut self, prompt: &str) -> KioskResult<Option<Decimal>> {
        self.read_parsed(prompt)
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str) -> KioskResult<Option<T>> {
        let token = self.read_token(prompt)?;
        Ok(token.parse().ok())
    }

    /// Clear the screen when enabled in config
    pub fn clear(&mut self) -> KioskResult<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// `Processing...` with a pause after each dot
    pub fn loading(&mut self) -> KioskResult<()> {
        self.write("Processing")?;
        for _ in 0..3 {
            self.write(".")?;
            if !self.loading_delay.is_zero() {
                thread::sleep(self.loading_delay);
            }
        }
        self.write("\n")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
