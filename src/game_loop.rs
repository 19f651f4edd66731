//! 游戏循环：setup, one turn per menu choice, and the end screen.

use std::fmt;
use std::io::{BufRead, Write};

use combat::{Combatant, Encounter, EncounterOutcome, GameRng, TurnContext};
use crossterm::style::Stylize;
use error::{GameError, Result, handle_error};
use hero::{Hero, HeroClass};
use map::{Difficulty, Map, encounter_count, random_stage_name};
use tracing::{info, warn};
use trivia::QuestionBank;

use crate::config::GameConfig;
use crate::input::Console;

const TURN_MENU: [&str; 2] = ["Move forward", "Quit"];
const FIGHT_MENU: [&str; 2] = ["Fight", "Flee"];
const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
const DEFAULT_NAME: &str = "Hero";
const CLASS_COUNT: usize = 4;

/// 游戏结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => f.write_str("Victory"),
            Outcome::Defeat => f.write_str("Defeat"),
        }
    }
}

/// One running game: the hero, their map and the console they are played from
pub struct Game<R, W> {
    config: GameConfig,
    console: Console<R, W>,
    rng: GameRng,
    questions: QuestionBank,
    hero: Hero,
    map: Map,
    finished: Option<Outcome>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Ask for the hero's name, class and the difficulty, then build and
    /// populate the map.
    pub fn setup(
        config: GameConfig,
        questions: QuestionBank,
        mut console: Console<R, W>,
    ) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("Game seed: {}", rng.seed());

        console.say("Enter your hero's name:");
        let name = console.read_line()?.trim().to_string();
        let name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name
        };

        console.wait(config.pacing().line_delay);
        console.say("Pick your hero:");
        console.say(HeroClass::catalogue());
        let choice = console.number_in("Choose a number between 1 and 4:", 1..=CLASS_COUNT)?;
        let hero = Hero::new(name, HeroClass::from_choice(choice));
        console.say(format!("{} the {} is ready.", hero.name, hero.class));

        let labels = DIFFICULTIES.map(|d| d.label());
        let difficulty = Difficulty::from_choice(console.choose("Pick a difficulty:", &labels)?);
        info!("Difficulty: {}", difficulty);

        let inner = difficulty.roll_length(&mut rng);
        let mut map = Map::new(random_stage_name(&mut rng), inner);
        let groups: Vec<Encounter> = (0..encounter_count(inner, &mut rng))
            .map(|_| Encounter::random(&mut rng))
            .collect();

        map.place_hero(&hero.name, hero.position)?;
        let placed = map.place_encounters(groups, &mut rng, config.placement_attempts);
        info!("{} enemy groups wait on {}", placed, map.name());

        console.say(format!("\nThe game begins on {}!", map.name()));
        console.say(map.render());

        Ok(Self::from_parts(config, console, rng, questions, hero, map))
    }

    /// Assemble a game around an existing hero and map
    pub fn from_parts(
        config: GameConfig,
        console: Console<R, W>,
        rng: GameRng,
        questions: QuestionBank,
        hero: Hero,
        map: Map,
    ) -> Self {
        Self {
            config,
            console,
            rng,
            questions,
            hero,
            map,
            finished: None,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Questions not asked yet
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Final result once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.finished
    }

    /// Victory only counts for a living hero standing right before the
    /// finish banner.
    fn reached_goal(&self) -> bool {
        self.hero.is_alive() && self.hero.position + 1 >= self.map.finish()
    }

    /// Play one menu choice. Returns the outcome once the game is over.
    pub fn play_turn(&mut self) -> Result<Option<Outcome>> {
        if let Some(outcome) = self.finished {
            return Ok(Some(outcome));
        }

        match self.console.choose("What do you do?", &TURN_MENU)? {
            1 => self.move_forward()?,
            _ => {
                self.console.say(format!("{} quits the adventure.", self.hero.name));
                self.hero.surrender();
            }
        }

        if !self.hero.is_alive() {
            self.finished = Some(Outcome::Defeat);
        } else {
            self.console.say(self.map.render());
            if self.reached_goal() {
                self.finished = Some(Outcome::Victory);
            }
        }

        if let Some(outcome) = self.finished {
            info!("Game over: {}", outcome);
        }
        Ok(self.finished)
    }

    fn move_forward(&mut self) -> Result<()> {
        let next = self.hero.position + 1;
        if !self.map.has_encounter(next) {
            if let Err(e) = self.hero.advance(&mut self.map) {
                self.console.say(handle_error(&e));
            }
            return Ok(());
        }

        self.console.say("A group of enemies blocks the way!");
        if let Some(group) = self.map.encounter_at(next) {
            for enemy in group.enemies() {
                self.console.say(format!("  {}", enemy.stats_bar()));
            }
        }

        if self.console.choose("Fight or flee?", &FIGHT_MENU)? != 1 {
            self.console.say(format!("{} flees and is never seen again.", self.hero.name));
            self.hero.surrender();
            return Ok(());
        }

        if self.fight(next)? == EncounterOutcome::Victory {
            self.console.say("The way is clear!".green());
            self.map.remove_encounter(next);
            self.hero.advance(&mut self.map)?;
        }
        Ok(())
    }

    fn fight(&mut self, position: usize) -> Result<EncounterOutcome> {
        let length = self.map.len();
        let pacing = self.config.pacing();
        let encounter = self
            .map
            .encounter_at_mut(position)
            .ok_or(GameError::OutOfBounds { position, length })?;

        let mut ctx = TurnContext::new(
            &mut self.console,
            &mut self.questions,
            &mut self.rng,
            pacing,
        );
        let outcome = encounter.resolve(&mut self.hero, &mut ctx);
        if outcome == EncounterOutcome::Defeat {
            warn!("{} fell at position {}", self.hero.name, position);
        }
        Ok(outcome)
    }

    /// Play turns until the hero wins, dies or gives up
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.play_turn()? {
                let message = self.finish_message();
                self.console.say(message);
                return Ok(outcome);
            }
            self.console.wait(self.config.turn_delay());
        }
    }

    /// End screen: green for a victory, red for a defeat
    pub fn finish_message(&self) -> String {
        match self.finished {
            Some(Outcome::Victory) => format!(
                "\n{}\n{}",
                "VICTORY! The enemies are defeated!".green().bold(),
                "Thanks for playing!"
            ),
            Some(Outcome::Defeat) => format!(
                "\n{}\n{}",
                format!("DEFEAT! {} is dead!", self.hero.name).red().bold(),
                "Thanks for playing!"
            ),
            None => "The game is still running.".to_string(),
        }
    }
}
