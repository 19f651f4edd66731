// src/hero/src/combat.rs
use combat::{Combat, CombatResult, Combatant, Enemy, HeroActor, TurnContext};
use tracing::debug;

use crate::core::Hero;

/// A correctly answered trivia question multiplies the turn's damage
pub const TRIVIA_MULTIPLIER: u32 = 5;

/// Chance that a regular attack comes with a trivia question
const TRIVIA_CHANCE: f64 = 0.5;

impl Combatant for Hero {
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
            "{} (♥ {} | ⚔ {} | Special {})",
            self.name,
            self.displayed_hp(),
            self.attack,
            if self.special_used { "used" } else { "available" }
        )
    }
}

impl HeroActor for Hero {
    /// 英雄回合：特殊能力、问答加成或普通攻击
    fn take_turn(&mut self, foes: &mut Vec<Enemy>, ctx: &mut TurnContext<'_>) -> CombatResult {
        let quiz = ctx.rng.random_bool(TRIVIA_CHANCE);

        if !self.special_used && ctx.io.confirm_special(&self.name) {
            self.special_used = true;
            return self.unleash_special(foes);
        }

        let mut result = CombatResult::new();
        if foes.is_empty() {
            result.defeated = true;
            return result;
        }

        let mut multiplier = 1;
        if quiz {
            if let Some(question) = ctx.questions.draw(&mut *ctx.rng) {
                let choice = ctx.io.ask(&question);
                if question.is_correct(choice) {
                    ctx.show("CORRECT ANSWER");
                    multiplier = TRIVIA_MULTIPLIER;
                } else {
                    ctx.show(&format!(
                        "Wrong answer. The correct answer was: {}",
                        question.answer()
                    ));
                }
            }
        }

        let front = &mut foes[0];
        let damage = Combat::strike_times(&*self, front, multiplier);
        debug!("{} turn: x{} for {} damage", self.name, multiplier, damage);
        result.log(format!("{} deals {} damage.", self.name, damage));
        result.defeated = !front.is_alive();
        result
    }
}
