// src/combat/src/enemy.rs

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use strum::{EnumIter, IntoEnumIterator};

use crate::combatant::Combatant;

/// Names handed out to randomly generated enemies
const ROSTER: &[&str] = &[
    "Knuckles", "Big Tony", "Rico", "Mad Dog", "Slasher", "Viper", "Bruno", "Ironjaw",
    "Scarface", "Dutch", "Mama Rosa", "Switchblade", "Tank", "The Butcher", "Lefty",
];

/// 敌人种类，影响基础属性和行为
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum EnemyKind {
    #[default]
    Brigand,
    /// Spawns with half again as much health
    Wrestler,
    /// Shoots from range, so always acts before the hero
    Gangster,
}

impl EnemyKind {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kinds: Vec<EnemyKind> = EnemyKind::iter().collect();
        *kinds.choose(rng).unwrap_or(&EnemyKind::Brigand)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Brigand => "Brigand",
            EnemyKind::Wrestler => "Wrestler",
            EnemyKind::Gangster => "Gangster",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 敌人实体
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub hp: i32,
    pub attack: u32,
    pub attack_count: u32,
    pub ranged: bool,
}

impl Enemy {
    /// 创建新敌人实例，种类修正在此应用
    pub fn new(name: impl Into<String>, hp: i32, attack: u32, kind: EnemyKind) -> Self {
        let (hp, ranged) = match kind {
            EnemyKind::Brigand => (hp, false),
            EnemyKind::Wrestler => (hp.saturating_mul(3) / 2, false),
            EnemyKind::Gangster => (hp, true),
        };

        Self {
            name: name.into(),
            kind,
            hp,
            attack,
            attack_count: 1,
            ranged,
        }
    }

    pub fn with_attack_count(mut self, attack_count: u32) -> Self {
        self.attack_count = attack_count;
        self
    }

    /// Health in [50, 100), attack in [1, 3), random kind and name
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = ROSTER.choose(rng).copied().unwrap_or("Thug");
        let hp = rng.random_range(50..100);
        let attack = rng.random_range(1..3);
        let kind = EnemyKind::random(rng);
        Self::new(name, hp, attack, kind)
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> i32 {
        self.hp
    }

    fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }

    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn attack_count(&self) -> u32 {
        self.attack_count
    }

    fn is_ranged(&self) -> bool {
        self.ranged
    }

    fn stats_bar(&self) -> String {
        format!(
            "{} (♥ {} | ⚔ {} | Type: {})",
            self.name,
            self.displayed_hp(),
            self.attack,
            self.kind
        )
    }
}
