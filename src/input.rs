//! Line-based console input and output.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use combat::CombatIo;
use error::{GameError, Result};
use tracing::{debug, warn};
use trivia::{CHOICES, Question};

/// Reads answers line by line from `input` and prints to `output`.
///
/// Every numeric prompt re-asks until the answer is in range; a closed input
/// surfaces as [`GameError::InputClosed`].
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    pub fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.output, "{}", line).and_then(|_| self.output.flush()) {
            warn!("Failed to write to the console: {}", e);
        }
    }

    pub fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    /// Next line of input without its line terminator
    pub fn read_line(&mut self) -> Result<String> {
        if self.closed {
            return Err(GameError::InputClosed);
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Err(GameError::InputClosed);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        debug!("Read {:?}", line);
        Ok(line)
    }

    /// Print `prompt` until the answer parses as a number inside `range`
    pub fn number_in(&mut self, prompt: &str, range: RangeInclusive<usize>) -> Result<usize> {
        self.say(prompt);
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                Ok(_) => self.say(format!(
                    "Invalid choice. Please enter a number between {} and {}.",
                    range.start(),
                    range.end()
                )),
                Err(_) => self.say("Invalid input. Please enter a number."),
            }
        }
    }

    /// Numbered menu; returns the 1-based option picked
    pub fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize> {
        let mut menu = prompt.to_string();
        for (i, option) in options.iter().enumerate() {
            menu.push_str(&format!("\n{}. {}", i + 1, option));
        }
        self.number_in(&menu, 1..=options.len().max(1))
    }

    /// Yes/no question; answers starting with `o` or `y` mean yes
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.say(prompt);
        let line = self.read_line()?;
        Ok(matches!(
            line.trim_start().chars().next(),
            Some('o' | 'O' | 'y' | 'Y')
        ))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Fights cannot fail on input: a closed console declines the special
/// ability and answers trivia with an out-of-range choice, and the next menu
/// prompt reports the closed input.
impl<R: BufRead, W: Write> CombatIo for Console<R, W> {
    fn show(&mut self, line: &str) {
        self.say(line);
    }

    fn pause(&mut self, delay: Duration) {
        self.wait(delay);
    }

    fn confirm_special(&mut self, hero: &str) -> bool {
        let prompt = format!("{} can use their special ability. Use it now? (y/n)", hero);
        self.confirm(&prompt).unwrap_or(false)
    }

    fn ask(&mut self, question: &Question) -> usize {
        self.say(question);
        self.number_in("Pick the number of the correct answer:", 1..=CHOICES)
            .unwrap_or(0)
    }
}
