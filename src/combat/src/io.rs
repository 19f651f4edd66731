//! The seam between a running fight and the player.

#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;
use std::time::Duration;

use trivia::{Question, QuestionBank};

use crate::rng::GameRng;

/// Everything a fight needs from the outside world
pub trait CombatIo {
    /// Print one line of the fight transcript
    fn show(&mut self, line: &str);

    /// Cosmetic delay between transcript lines
    fn pause(&mut self, delay: Duration);

    /// Ask whether `hero` spends their one-time special ability now
    fn confirm_special(&mut self, hero: &str) -> bool;

    /// Ask `question` and return the chosen 1-based choice number.
    /// Re-prompting until the number is in range is up to the implementor.
    fn ask(&mut self, question: &Question) -> usize;
}

/// Delays used while narrating a fight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacing {
    pub line_delay: Duration,
    pub kill_delay: Duration,
}

impl Pacing {
    pub fn new(line_delay: Duration, kill_delay: Duration) -> Self {
        Self {
            line_delay,
            kill_delay,
        }
    }

    /// No delays at all (tests, scripted runs)
    pub fn instant() -> Self {
        Self::default()
    }
}

/// What a hero needs to play one turn of a fight
pub struct TurnContext<'a> {
    pub io: &'a mut dyn CombatIo,
    pub questions: &'a mut QuestionBank,
    pub rng: &'a mut GameRng,
    pub pacing: Pacing,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        io: &'a mut dyn CombatIo,
        questions: &'a mut QuestionBank,
        rng: &'a mut GameRng,
        pacing: Pacing,
    ) -> Self {
        Self {
            io,
            questions,
            rng,
            pacing,
        }
    }

    pub fn show(&mut self, line: &str) {
        self.io.show(line);
    }

    pub fn pause_line(&mut self) {
        self.io.pause(self.pacing.line_delay);
    }
}

/// Replays pre-recorded decisions and keeps the transcript.
///
/// Once a script runs dry the special ability is declined and the first
/// choice is picked.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    pub transcript: Vec<String>,
    pub questions_asked: Vec<Question>,
    specials: VecDeque<bool>,
    answers: VecDeque<usize>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specials(mut self, specials: impl IntoIterator<Item = bool>) -> Self {
        self.specials.extend(specials);
        self
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = usize>) -> Self {
        self.answers.extend(answers);
        self
    }

    /// Special-ability answers not consumed yet
    pub fn specials_left(&self) -> usize {
        self.specials.len()
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

#[cfg(any(test, feature = "test-util"))]
impl CombatIo for ScriptedIo {
    fn show(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn pause(&mut self, _delay: Duration) {}

    fn confirm_special(&mut self, _hero: &str) -> bool {
        self.specials.pop_front().unwrap_or(false)
    }

    fn ask(&mut self, question: &Question) -> usize {
        self.questions_asked.push(question.clone());
        self.answers.pop_front().unwrap_or(1)
    }
}
