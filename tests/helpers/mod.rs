//! Builders for scripted games: a console fed from a string and small maps
//! with hand-placed enemy groups.

#![allow(dead_code)]

use std::io::Cursor;

use beat_them_all::{Console, Game, GameConfig};
use combat::{Encounter, Enemy, EnemyKind, GameRng};
use hero::{Hero, HeroClass};
use map::Map;
use trivia::QuestionBank;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;
pub type ScriptedGame = Game<Cursor<Vec<u8>>, Vec<u8>>;

pub const SEED: u64 = 0x5eed;

/// Console answering with `lines`, one per prompt
pub fn console(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

pub fn transcript(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is UTF-8")
}

pub fn group(enemies: Vec<Enemy>) -> Encounter {
    Encounter::new(enemies)
}

pub fn brigand(name: &str, hp: i32, attack: u32) -> Enemy {
    Enemy::new(name, hp, attack, EnemyKind::Brigand)
}

/// Builder for a game on a hand-made map
pub struct TestGameBuilder {
    hero: Hero,
    map: Map,
    questions: QuestionBank,
}

impl TestGameBuilder {
    /// Map with `inner` walkable cells and a barbarian named Ben on it
    pub fn new(inner: usize) -> Self {
        Self {
            hero: Hero::new("Ben", HeroClass::Barbarian),
            map: Map::new("Test Alley", inner),
            questions: QuestionBank::default(),
        }
    }

    pub fn with_class(mut self, class: HeroClass) -> Self {
        self.hero = Hero::new("Ben", class);
        self
    }

    /// Hero whose special ability is already spent, so fights never ask for it
    pub fn with_special_spent(mut self) -> Self {
        self.hero.special_used = true;
        self
    }

    pub fn with_questions(mut self, questions: QuestionBank) -> Self {
        self.questions = questions;
        self
    }

    pub fn with_hero_hp(mut self, hp: i32) -> Self {
        self.hero.hp = hp;
        self
    }

    pub fn with_encounter(mut self, position: usize, encounter: Encounter) -> Self {
        self.map
            .insert_encounter(position, encounter)
            .expect("encounter inside the map");
        self
    }

    pub fn build(mut self, lines: &[&str]) -> ScriptedGame {
        self.map
            .place_hero(&self.hero.name, self.hero.position)
            .expect("hero inside the map");
        Game::from_parts(
            GameConfig::instant(),
            console(lines),
            GameRng::new(SEED),
            self.questions,
            self.hero,
            self.map,
        )
    }
}
