use std::fmt;
use std::ops::Range;

use rand::Rng;
use strum::EnumIter;

/// 难度等级，决定地图长度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu choice (1-based) to difficulty; anything unknown plays easy
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Range of walkable cells between the start and finish banners
    pub fn length_range(&self) -> Range<usize> {
        match self {
            Difficulty::Easy => 5..10,
            Difficulty::Medium => 10..20,
            Difficulty::Hard => 20..40,
        }
    }

    pub fn roll_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(self.length_range())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many enemy groups a map of `inner_length` cells gets: at least one,
/// fewer than two thirds of the length.
pub fn encounter_count<R: Rng + ?Sized>(inner_length: usize, rng: &mut R) -> usize {
    let upper = (inner_length * 2 / 3).max(2);
    rng.random_range(1..upper)
}
