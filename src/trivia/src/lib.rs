//! Trivia questions that can amplify a hero's attack.
//!
//! Questions are read from a pipe-delimited flat file, one per line:
//!
//! ```text
//! prompt|choice 1|choice 2|choice 3|choice 4|answer
//! ```
//!
//! Loading is best-effort: a bad row or a missing file is logged and the game
//! simply continues with whatever questions could be read.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use error::{GameError, Result};
use rand::Rng;
use tracing::{info, warn};

/// Number of answer choices every question offers
pub const CHOICES: usize = 4;

const FIELD_SEPARATOR: char = '|';

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: [String; CHOICES],
    answer: String,
}

impl Question {
    /// Build a question. Fails unless exactly four choices are given and the
    /// answer is one of them.
    pub fn new(prompt: impl Into<String>, choices: Vec<String>, answer: impl Into<String>) -> Result<Self> {
        let prompt = prompt.into();
        let answer = answer.into();
        let count = choices.len();
        let choices: [String; CHOICES] = choices.try_into().map_err(|_| {
            GameError::InvalidQuestion(format!(
                "\"{}\" has {} choices, expected {}",
                prompt, count, CHOICES
            ))
        })?;

        if !choices.contains(&answer) {
            return Err(GameError::InvalidQuestion(format!(
                "answer \"{}\" of \"{}\" is not among the choices",
                answer, prompt
            )));
        }

        Ok(Self {
            prompt,
            choices,
            answer,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String; CHOICES] {
        &self.choices
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a 1-based choice number. Numbers outside 1..=4 are never correct.
    pub fn is_correct(&self, choice_number: usize) -> bool {
        choice_number
            .checked_sub(1)
            .and_then(|idx| self.choices.get(idx))
            .is_some_and(|choice| *choice == self.answer)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "^^ {} ^^", self.prompt)?;
        for (i, choice) in self.choices.iter().enumerate() {
            writeln!(f, "-  {}. {}", i + 1, choice)?;
        }
        Ok(())
    }
}

/// Pool of questions still available for this game
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a bank from disk, logging and returning an empty bank on failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(bank) => {
                info!("Loaded {} questions from {}", bank.len(), path.display());
                bank
            }
            Err(e) => {
                warn!("Could not read question file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Parse every row of `reader`, skipping blank lines, `#` comments and
    /// malformed rows.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut questions = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading questions at line {}: {}", idx + 1, e);
                    break;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match Self::parse_line(trimmed) {
                Ok(question) => questions.push(question),
                Err(e) => warn!("Skipping question row {}: {}", idx + 1, e),
            }
        }

        Self { questions }
    }

    /// Parse a single `prompt|c1|c2|c3|c4|answer` row
    pub fn parse_line(line: &str) -> Result<Question> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != CHOICES + 2 {
            return Err(GameError::InvalidQuestion(format!(
                "expected {} fields, found {}",
                CHOICES + 2,
                fields.len()
            )));
        }

        let choices = fields[1..=CHOICES].iter().map(|s| s.to_string()).collect();
        Question::new(fields[0], choices, fields[CHOICES + 1])
    }

    /// Remove and return a random question; each question is asked at most once
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Question> {
        if self.questions.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.questions.len());
        Some(self.questions.swap_remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
