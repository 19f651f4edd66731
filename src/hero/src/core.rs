// src/hero/src/core.rs
use error::{GameError, Result};
use map::Map;
use tracing::{info, warn};

use crate::class::HeroClass;

/// Cell a new hero starts on, right after the start banner
pub const START_POSITION: usize = 1;

/// 英雄核心数据结构
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub class: HeroClass,
    pub hp: i32,
    pub attack: u32,
    pub attack_count: u32,
    pub ranged: bool,

    /// The class special can be spent once per game
    pub special_used: bool,
    pub position: usize,
}

impl Hero {
    pub fn new(name: impl Into<String>, class: HeroClass) -> Self {
        let hero = Self {
            name: name.into(),
            class,
            hp: class.base_hp(),
            attack: class.base_attack(),
            attack_count: 1,
            ranged: false,
            special_used: false,
            position: START_POSITION,
        };

        info!(
            "Hero added ({}) = HP / Attack / Attacks / Class: {} / {} / {} / {}",
            hero.name, hero.hp, hero.attack, hero.attack_count, hero.class
        );
        hero
    }

    pub fn special_available(&self) -> bool {
        !self.special_used
    }

    /// Step one cell towards the finish and redraw the hero on `map`.
    ///
    /// The hero can reach the finish banner but never go past it.
    pub fn advance(&mut self, map: &mut Map) -> Result<usize> {
        let last = map.len().saturating_sub(1);
        if self.position >= last {
            warn!("{} is already at the end of the map!", self.name);
            return Err(GameError::AtFinish {
                position: self.position,
            });
        }

        map.update_position(self.position, self.position + 1, &self.name);
        self.position += 1;
        info!("{} moves to position {}", self.name, self.position);
        Ok(self.position)
    }

    /// Give up: the hero counts as dead from now on
    pub fn surrender(&mut self) {
        info!("{} gives up", self.name);
        self.hp = 0;
    }
}
