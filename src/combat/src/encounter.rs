//! One group of enemies waiting on a map cell, and the round loop that
//! resolves the fight against it.

use rand::Rng;
use tracing::{debug, info};

use crate::combatant::Combatant;
use crate::enemy::Enemy;
use crate::io::TurnContext;
use crate::{Combat, CombatResult};

/// Largest group of enemies a random encounter spawns
pub const MAX_GROUP: usize = 4;

/// The hero side of a fight. The hero crate decides how a turn is played
/// (special ability, trivia bonus, plain strike); the encounter only decides
/// when it is played.
pub trait HeroActor: Combatant {
    /// Play one turn against `foes`; the front enemy is the current opponent.
    /// Enemies may be damaged or removed, but a turn never reorders them.
    /// `defeated` must be set when the front enemy is down or no enemy is left.
    fn take_turn(&mut self, foes: &mut Vec<Enemy>, ctx: &mut TurnContext<'_>) -> CombatResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}

/// 战斗遭遇：按顺序排列的敌人
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encounter {
    enemies: Vec<Enemy>,
}

impl Encounter {
    pub fn new(enemies: Vec<Enemy>) -> Self {
        Self { enemies }
    }

    /// Between one and [`MAX_GROUP`] random enemies
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.random_range(1..=MAX_GROUP);
        info!("Spawning a group of {} enemies", count);
        let enemies = (0..count).map(|_| Enemy::random(rng)).collect();
        Self { enemies }
    }

    pub fn push(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// The fight is over once every enemy is gone or the hero has fallen
    pub fn is_over<H: Combatant + ?Sized>(&self, hero: &H) -> bool {
        self.enemies.is_empty() || !hero.is_alive()
    }

    fn front_alive(&self) -> bool {
        self.enemies.first().is_some_and(|e| e.is_alive())
    }

    /// Hero plus every remaining enemy
    pub fn roster<H: Combatant + ?Sized>(&self, hero: &H) -> String {
        let mut out = format!("{}\nEnemies:", hero.stats_bar());
        for enemy in &self.enemies {
            out.push_str("\n• ");
            out.push_str(&enemy.stats_bar());
        }
        out
    }

    fn duel_bar<H: Combatant + ?Sized>(round: u32, hero: &H, enemy: &Enemy) -> String {
        format!("\n[{}] {} 🤼 {}", round, hero.stats_bar(), enemy.stats_bar())
    }

    /// Fight every enemy in order until the group is wiped out or the hero
    /// falls.
    ///
    /// Each round the side that acts first strikes, then the other side
    /// answers if it is still standing. Ranged enemies act before the hero;
    /// against anyone else the hero opens. A defeated front enemy is removed
    /// and the next one steps up with a fresh round counter.
    pub fn resolve<H: HeroActor>(&mut self, hero: &mut H, ctx: &mut TurnContext<'_>) -> EncounterOutcome {
        ctx.show("=== The fight begins ===");
        ctx.show(&self.roster(&*hero));

        while !self.is_over(&*hero) {
            ctx.show("\n=== Next opponent ===");
            let mut rounds = 0u32;
            ctx.show(&Self::duel_bar(rounds, &*hero, &self.enemies[0]));

            while hero.is_alive() && self.front_alive() {
                rounds += 1;
                if self.enemies[0].is_ranged() {
                    self.enemy_strikes(hero, ctx);
                    if hero.is_alive() {
                        self.hero_turn(hero, ctx);
                    }
                } else if !self.hero_turn(hero, ctx) {
                    self.enemy_strikes(hero, ctx);
                }

                if let Some(front) = self.enemies.first() {
                    ctx.show(&Self::duel_bar(rounds, &*hero, front));
                }
            }

            // A special ability may already have cleared the whole group
            if hero.is_alive() && !self.enemies.is_empty() {
                let fallen = self.enemies.remove(0);
                info!("{} defeated after {} rounds", fallen.name, rounds);
                ctx.show(&format!("{} died after {} rounds.", fallen.name, rounds));
                ctx.io.pause(ctx.pacing.kill_delay);
            }
        }

        if hero.is_alive() {
            EncounterOutcome::Victory
        } else {
            info!("{} fell in battle", hero.name());
            EncounterOutcome::Defeat
        }
    }

    /// Returns whether the turn put the front enemy down
    fn hero_turn<H: HeroActor>(&mut self, hero: &mut H, ctx: &mut TurnContext<'_>) -> bool {
        let result = hero.take_turn(&mut self.enemies, ctx);
        for line in &result.logs {
            ctx.show(line);
        }
        ctx.pause_line();
        result.defeated
    }

    fn enemy_strikes<H: HeroActor>(&self, hero: &mut H, ctx: &mut TurnContext<'_>) {
        let Some(enemy) = self.enemies.first().filter(|e| e.is_alive()) else {
            return;
        };
        let damage = Combat::strike(enemy, &mut *hero);
        debug!("{} -> {}: {} damage", enemy.name, hero.name(), damage);
        ctx.show(&format!("{} deals {} damage.", enemy.name, damage));
        ctx.pause_line();
    }
}
