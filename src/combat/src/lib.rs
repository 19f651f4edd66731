// src/combat/src/lib.rs

use tracing::debug;

pub mod combatant;
pub mod encounter;
pub mod enemy;
pub mod io;
pub mod rng;

pub use crate::combatant::Combatant;
pub use crate::encounter::{Encounter, EncounterOutcome, HeroActor};
pub use crate::enemy::{Enemy, EnemyKind};
pub use crate::io::{CombatIo, Pacing, TurnContext};
#[cfg(any(test, feature = "test-util"))]
pub use crate::io::ScriptedIo;
pub use crate::rng::GameRng;

/// Handles combat interactions between entities
pub struct Combat;

impl Combat {
    /// Apply every blow of `attacker`'s turn to `defender` and return the
    /// total damage dealt (attack power × attack count).
    pub fn strike<T, U>(attacker: &T, defender: &mut U) -> u32
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
    {
        Self::strike_times(attacker, defender, 1)
    }

    /// Like [`Combat::strike`], repeated `times` over (trivia bonus)
    pub fn strike_times<T, U>(attacker: &T, defender: &mut U, times: u32) -> u32
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
    {
        let blows = attacker.attack_count().saturating_mul(times);
        for _ in 0..blows {
            defender.take_damage(attacker.attack_power());
        }

        let damage = attacker.attack_power().saturating_mul(blows);
        debug!(
            "{} hits {} for {} ({} left)",
            attacker.name(),
            defender.name(),
            damage,
            defender.hp()
        );
        damage
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default)]
pub struct CombatResult {
    pub logs: Vec<String>, // Combat messages for the console
    pub defeated: bool,    // Whether the target was defeated
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }
}
